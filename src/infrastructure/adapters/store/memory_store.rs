//! In-Memory Resource Store
//!
//! 目录整体驻留内存，来源可以是编译期内嵌的 JSON、磁盘上的 JSON 文件或调用方直接给出的列表

use async_trait::async_trait;
use std::path::Path;

use crate::application::ports::{ResourceStorePort, StoreError};
use crate::domain::resource::{ensure_unique_ids, Resource, ResourceError, ResourceId};

/// 编译进二进制的默认目录
const EMBEDDED_CATALOG: &str = include_str!("../../../../data/resources.json");

/// 内存资源目录
///
/// 构造后不可变，多个请求并发读取无需加锁
pub struct InMemoryResourceStore {
    resources: Vec<Resource>,
}

impl InMemoryResourceStore {
    /// 从资源列表创建，ID 重复时拒绝
    pub fn new(resources: Vec<Resource>) -> Result<Self, StoreError> {
        ensure_unique_ids(&resources).map_err(|e| match e {
            ResourceError::DuplicateId(id) => StoreError::DuplicateId(id),
            other => StoreError::Parse(other.to_string()),
        })?;
        Ok(Self { resources })
    }

    /// 从 JSON 数组文本创建
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let resources: Vec<Resource> =
            serde_json::from_str(json).map_err(|e| StoreError::Parse(e.to_string()))?;
        Self::new(resources)
    }

    /// 从 JSON 文件创建
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            count = store.len(),
            "Resource catalog loaded from file"
        );
        Ok(store)
    }

    /// 使用内嵌目录创建
    pub fn embedded() -> Result<Self, StoreError> {
        let store = Self::from_json_str(EMBEDDED_CATALOG)?;
        tracing::info!(count = store.len(), "Embedded resource catalog loaded");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[async_trait]
impl ResourceStorePort for InMemoryResourceStore {
    async fn all(&self) -> Result<Vec<Resource>, StoreError> {
        Ok(self.resources.clone())
    }

    async fn find(&self, id: ResourceId) -> Result<Option<Resource>, StoreError> {
        Ok(self.resources.iter().find(|r| r.id == id).cloned())
    }

    async fn filter(&self, category: &str) -> Result<Vec<Resource>, StoreError> {
        Ok(self
            .resources
            .iter()
            .filter(|r| r.in_category(category))
            .cloned()
            .collect())
    }
}
