//! Resource Context - 目录级规则

use std::collections::{BTreeSet, HashSet};

use super::{Resource, ResourceError};

/// 校验目录中没有重复 ID
pub fn ensure_unique_ids(resources: &[Resource]) -> Result<(), ResourceError> {
    let mut seen = HashSet::with_capacity(resources.len());
    for resource in resources {
        if !seen.insert(resource.id) {
            return Err(ResourceError::DuplicateId(resource.id));
        }
    }
    Ok(())
}

/// 提取去重后的 `main_cat1`，按字典序（字节序）升序排列
pub fn distinct_categories(resources: &[Resource]) -> Vec<String> {
    resources
        .iter()
        .map(|r| r.main_cat1.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::ResourceId;

    fn resource(id: u64, main_cat1: &str) -> Resource {
        Resource {
            id: ResourceId::new(id),
            title: format!("Resource {}", id),
            description: String::new(),
            url: format!("https://example.com/{}", id),
            main_cat1: main_cat1.to_string(),
            main_cat2: String::new(),
            tag1: String::new(),
            tag2: String::new(),
            tag3: String::new(),
        }
    }

    #[test]
    fn test_distinct_categories_sorted_and_deduplicated() {
        let resources = vec![
            resource(1, "DEVOPS"),
            resource(2, "AI"),
            resource(3, "DEVOPS"),
            resource(4, "CLOUD"),
        ];
        assert_eq!(distinct_categories(&resources), vec!["AI", "CLOUD", "DEVOPS"]);
    }

    #[test]
    fn test_distinct_categories_empty_catalog() {
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn test_ensure_unique_ids_detects_duplicate() {
        let resources = vec![resource(1, "AI"), resource(2, "AI"), resource(1, "CLOUD")];
        assert_eq!(
            ensure_unique_ids(&resources),
            Err(ResourceError::DuplicateId(ResourceId::new(1)))
        );
    }

    #[test]
    fn test_ensure_unique_ids_accepts_unique() {
        let resources = vec![resource(1, "AI"), resource(2, "AI")];
        assert!(ensure_unique_ids(&resources).is_ok());
    }
}
