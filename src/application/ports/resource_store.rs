//! Resource Store Port - 出站端口
//!
//! 路由层只依赖这三个只读操作，数据从哪里来（内嵌、文件、远程）由适配器决定

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::resource::{Resource, ResourceId};

/// Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Duplicate resource id: {0}")]
    DuplicateId(ResourceId),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Resource Store Port
///
/// 实现必须可以被任意多个请求并发读取
#[async_trait]
pub trait ResourceStorePort: Send + Sync {
    /// 获取全部资源（目录顺序，可能为空）
    async fn all(&self) -> Result<Vec<Resource>, StoreError>;

    /// 根据 ID 查找资源
    async fn find(&self, id: ResourceId) -> Result<Option<Resource>, StoreError>;

    /// 按主分类过滤，调用方传入的总是大写值
    async fn filter(&self, category: &str) -> Result<Vec<Resource>, StoreError>;
}
