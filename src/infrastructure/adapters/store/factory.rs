//! 根据配置选择目录适配器

use std::sync::Arc;

use super::{HttpResourceStore, HttpResourceStoreConfig, InMemoryResourceStore};
use crate::application::ports::{ResourceStorePort, StoreError};
use crate::config::{StoreConfig, StoreSource};

/// 按 `store.source` 创建 Store
///
/// 内嵌和文件来源在这里一次性加载并校验，远程来源只创建客户端
pub async fn build_store(config: &StoreConfig) -> Result<Arc<dyn ResourceStorePort>, StoreError> {
    let store: Arc<dyn ResourceStorePort> = match config.source {
        StoreSource::Embedded => Arc::new(InMemoryResourceStore::embedded()?),
        StoreSource::File => Arc::new(InMemoryResourceStore::from_json_file(&config.path).await?),
        StoreSource::Remote => {
            let http_config =
                HttpResourceStoreConfig::new(config.url.clone()).with_timeout(config.timeout_secs);
            tracing::info!(url = %config.url, "Using remote resource catalog");
            Arc::new(HttpResourceStore::new(http_config)?)
        }
    };

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::ResourceId;
    use crate::test_support::sample_resources;

    #[tokio::test]
    async fn test_build_embedded_store() {
        let store = build_store(&StoreConfig::default()).await.unwrap();
        assert!(!store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_build_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.json");
        std::fs::write(&path, serde_json::to_vec(&sample_resources()).unwrap()).unwrap();

        let config = StoreConfig {
            source: StoreSource::File,
            path,
            ..Default::default()
        };
        let store = build_store(&config).await.unwrap();
        assert!(store.find(ResourceId::new(2)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_build_file_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            source: StoreSource::File,
            path: dir.path().join("missing.json"),
            ..Default::default()
        };
        assert!(matches!(build_store(&config).await, Err(StoreError::Io(_))));
    }

    #[tokio::test]
    async fn test_build_remote_store_is_lazy() {
        let config = StoreConfig {
            source: StoreSource::Remote,
            url: "http://127.0.0.1:9/resources.json".to_string(),
            ..Default::default()
        };
        assert!(build_store(&config).await.is_ok());
    }
}
