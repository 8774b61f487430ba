//! Resource Context - Value Objects

use serde::{Deserialize, Serialize};

use super::ResourceError;

/// 资源唯一标识
///
/// 序列化为裸数字，与目录数据中的 `id` 字段一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(u64);

impl ResourceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// 从路径段解析 ID
    ///
    /// 只接受纯 ASCII 十进制数字；`+1`、`-1`、`1a`、空串一律拒绝，
    /// 超出 u64 范围同样视为无效
    pub fn parse_segment(segment: &str) -> Result<Self, ResourceError> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ResourceError::InvalidId(segment.to_string()));
        }
        segment
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ResourceError::InvalidId(segment.to_string()))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 分类（`main_cat1` 的取值）
///
/// 由查询参数构造时总是 URL 解码并转为大写
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    /// 从已经过一次表单解码的查询参数构造
    ///
    /// 再做一次百分号解码后转为大写，`Ai%20Tools` → `AI TOOLS`。
    /// `%` 后不是两位十六进制数，或解码结果不是合法 UTF-8，均返回错误
    pub fn from_query(raw: &str) -> Result<Self, ResourceError> {
        if !has_well_formed_escapes(raw) {
            return Err(ResourceError::InvalidCategory(raw.to_string()));
        }
        let decoded = urlencoding::decode(raw)
            .map_err(|_| ResourceError::InvalidCategory(raw.to_string()))?;
        Ok(Self(decoded.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 每个 `%` 后都必须紧跟两位十六进制数
fn has_well_formed_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segment_accepts_digits() {
        assert_eq!(ResourceId::parse_segment("42").unwrap(), ResourceId::new(42));
        assert_eq!(ResourceId::parse_segment("007").unwrap(), ResourceId::new(7));
    }

    #[test]
    fn test_parse_segment_rejects_non_digits() {
        for segment in ["", "abc", "12abc", "+12", "-1", "1.5", " 1"] {
            assert!(
                ResourceId::parse_segment(segment).is_err(),
                "segment {:?} should be rejected",
                segment
            );
        }
    }

    #[test]
    fn test_parse_segment_rejects_overflow() {
        assert_eq!(
            ResourceId::parse_segment("99999999999999999999999"),
            Err(ResourceError::InvalidId("99999999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_resource_id_serializes_as_number() {
        let json = serde_json::to_string(&ResourceId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn test_category_uppercases() {
        assert_eq!(Category::from_query("devops").unwrap().as_str(), "DEVOPS");
    }

    #[test]
    fn test_category_decodes_percent_sequences() {
        assert_eq!(Category::from_query("ai%20tools").unwrap().as_str(), "AI TOOLS");
    }

    #[test]
    fn test_category_rejects_malformed_escapes() {
        for raw in ["%zz", "%", "ai%2", "%G0"] {
            assert_eq!(
                Category::from_query(raw),
                Err(ResourceError::InvalidCategory(raw.to_string())),
                "raw {:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_category_rejects_invalid_utf8() {
        assert!(Category::from_query("%FF").is_err());
    }
}
