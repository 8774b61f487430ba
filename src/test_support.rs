//! 测试辅助：样例目录与总是失败的 Store

use async_trait::async_trait;

use crate::application::ports::{ResourceStorePort, StoreError};
use crate::domain::resource::{Resource, ResourceId};

pub fn resource(id: u64, main_cat1: &str) -> Resource {
    Resource {
        id: ResourceId::new(id),
        title: format!("Resource {}", id),
        description: format!("Description of resource {}", id),
        url: format!("https://example.com/resources/{}", id),
        main_cat1: main_cat1.to_string(),
        main_cat2: "GENERAL".to_string(),
        tag1: "tag".to_string(),
        tag2: String::new(),
        tag3: String::new(),
    }
}

/// id 1、3 属于 AI，id 2 属于 DEVOPS
pub fn sample_resources() -> Vec<Resource> {
    vec![resource(1, "AI"), resource(2, "DEVOPS"), resource(3, "AI")]
}

/// 每个操作都返回错误，用于覆盖 500 路径
pub struct FailingStore;

#[async_trait]
impl ResourceStorePort for FailingStore {
    async fn all(&self) -> Result<Vec<Resource>, StoreError> {
        Err(StoreError::Unavailable("connection refused to 10.0.0.7".to_string()))
    }

    async fn find(&self, _id: ResourceId) -> Result<Option<Resource>, StoreError> {
        Err(StoreError::Unavailable("connection refused to 10.0.0.7".to_string()))
    }

    async fn filter(&self, _category: &str) -> Result<Vec<Resource>, StoreError> {
        Err(StoreError::Unavailable("connection refused to 10.0.0.7".to_string()))
    }
}
