//! Resource Context - Entity

use serde::{Deserialize, Serialize};

use super::ResourceId;

/// 资源记录
///
/// 由 Store 创建和持有，路由层只读。字段名与目录 JSON 完全一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub main_cat1: String,
    pub main_cat2: String,
    #[serde(default)]
    pub tag1: String,
    #[serde(default)]
    pub tag2: String,
    #[serde(default)]
    pub tag3: String,
}

impl Resource {
    /// 主分类是否等于给定值（大小写敏感）
    pub fn in_category(&self, category: &str) -> bool {
        self.main_cat1 == category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tags_default_to_empty() {
        let json = r#"{
            "id": 7,
            "title": "Rust Book",
            "description": "The book",
            "url": "https://doc.rust-lang.org/book/",
            "main_cat1": "LANGUAGES",
            "main_cat2": "RUST"
        }"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.id, ResourceId::new(7));
        assert_eq!(resource.tag1, "");
        assert_eq!(resource.tag3, "");
    }

    #[test]
    fn test_in_category_is_case_sensitive() {
        let json = r#"{"id":1,"title":"t","description":"d","url":"u","main_cat1":"AI","main_cat2":"ML"}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert!(resource.in_category("AI"));
        assert!(!resource.in_category("ai"));
    }
}
