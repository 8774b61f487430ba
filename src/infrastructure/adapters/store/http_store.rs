//! HTTP Resource Store - 从远程 URL 拉取目录
//!
//! 实现 ResourceStorePort trait，每次调用都 GET 一次目录 JSON（不缓存）
//!
//! 远程目录格式:
//! GET {url}
//! Response: application/json，Resource 对象数组

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{ResourceStorePort, StoreError};
use crate::domain::resource::{ensure_unique_ids, Resource, ResourceError, ResourceId};

/// HTTP Store 配置
#[derive(Debug, Clone)]
pub struct HttpResourceStoreConfig {
    /// 目录 JSON 的完整 URL
    pub url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpResourceStoreConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000/resources.json".to_string(),
            timeout_secs: 10,
        }
    }
}

impl HttpResourceStoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// 远程资源目录
pub struct HttpResourceStore {
    client: Client,
    config: HttpResourceStoreConfig,
}

impl HttpResourceStore {
    /// 创建新的 HTTP Store
    pub fn new(config: HttpResourceStoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Http(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 拉取并校验完整目录
    async fn fetch(&self) -> Result<Vec<Resource>, StoreError> {
        tracing::debug!(url = %self.config.url, "Fetching resource catalog");

        let response = self.client.get(&self.config.url).send().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Unavailable(format!("Timed out fetching catalog: {}", e))
            } else if e.is_connect() {
                StoreError::Unavailable(format!("Cannot connect to catalog source: {}", e))
            } else {
                StoreError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StoreError::Http(format!("HTTP {}: {}", status, error_text)));
        }

        let resources: Vec<Resource> = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(format!("Failed to decode catalog: {}", e)))?;

        ensure_unique_ids(&resources).map_err(|e| match e {
            ResourceError::DuplicateId(id) => StoreError::DuplicateId(id),
            other => StoreError::Parse(other.to_string()),
        })?;

        tracing::debug!(count = resources.len(), "Resource catalog fetched");
        Ok(resources)
    }
}

#[async_trait]
impl ResourceStorePort for HttpResourceStore {
    async fn all(&self) -> Result<Vec<Resource>, StoreError> {
        self.fetch().await
    }

    async fn find(&self, id: ResourceId) -> Result<Option<Resource>, StoreError> {
        Ok(self.fetch().await?.into_iter().find(|r| r.id == id))
    }

    async fn filter(&self, category: &str) -> Result<Vec<Resource>, StoreError> {
        Ok(self
            .fetch()
            .await?
            .into_iter()
            .filter(|r| r.in_category(category))
            .collect())
    }
}
