//! Resource Context - Errors

use thiserror::Error;

use super::ResourceId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("无效的资源 ID: {0}")]
    InvalidId(String),

    #[error("资源 ID 重复: {0}")]
    DuplicateId(ResourceId),

    #[error("无效的分类编码: {0}")]
    InvalidCategory(String),
}
