//! 应用层错误定义
//!
//! 统一的查询错误类型

use thiserror::Error;

use crate::application::ports::StoreError;
use crate::domain::resource::{Category, ResourceError, ResourceId};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} with ID {id} not found")]
    NotFound {
        resource_type: &'static str,
        id: ResourceId,
    },

    /// 分类过滤结果为空
    #[error("No resources found for category: {0}")]
    CategoryNotFound(Category),

    /// 资源 ID 不是合法数字
    #[error("Invalid resource ID. Must be a number.")]
    InvalidResourceId(String),

    /// 分类参数无法解码
    #[error("Failed to decode category parameter: {0}")]
    InvalidCategory(String),

    /// Store 错误
    #[error("Store error: {0}")]
    StoreError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: ResourceId) -> Self {
        Self::NotFound { resource_type, id }
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        Self::StoreError(err.to_string())
    }
}

impl From<ResourceError> for ApplicationError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::InvalidId(raw) => Self::InvalidResourceId(raw),
            ResourceError::InvalidCategory(raw) => Self::InvalidCategory(raw),
            ResourceError::DuplicateId(_) => Self::StoreError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_id() {
        let err = ApplicationError::not_found("Resource", ResourceId::new(3));
        assert_eq!(err.to_string(), "Resource with ID 3 not found");
    }

    #[test]
    fn test_invalid_id_message() {
        let err = ApplicationError::from(ResourceError::InvalidId("abc".to_string()));
        assert_eq!(err.to_string(), "Invalid resource ID. Must be a number.");
    }

    #[test]
    fn test_store_error_is_wrapped() {
        let err = ApplicationError::from(StoreError::Io("disk gone".to_string()));
        assert!(matches!(err, ApplicationError::StoreError(msg) if msg.contains("disk gone")));
    }
}
