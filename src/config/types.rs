//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 资源目录来源配置
    #[serde(default)]
    pub store: StoreConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// 目录来源
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreSource {
    /// 编译期内嵌的目录
    #[default]
    Embedded,
    /// 启动时从本地 JSON 文件加载
    File,
    /// 每次请求从远程 URL 拉取
    Remote,
}

impl StoreSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreSource::Embedded => "embedded",
            StoreSource::File => "file",
            StoreSource::Remote => "remote",
        }
    }
}

/// 资源目录配置
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub source: StoreSource,

    /// `file` 来源的 JSON 文件路径
    #[serde(default = "default_store_path")]
    pub path: PathBuf,

    /// `remote` 来源的目录 URL
    #[serde(default)]
    pub url: String,

    /// 远程请求超时时间（秒）
    #[serde(default = "default_store_timeout")]
    pub timeout_secs: u64,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("data/resources.json")
}

fn default_store_timeout() -> u64 {
    10
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            source: StoreSource::default(),
            path: default_store_path(),
            url: String::new(),
            timeout_secs: default_store_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8787);
        assert_eq!(config.store.source, StoreSource::Embedded);
        assert_eq!(config.store.timeout_secs, 10);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_store_source_deserializes_lowercase() {
        let source: StoreSource = serde_json::from_str("\"remote\"").unwrap();
        assert_eq!(source, StoreSource::Remote);
        assert_eq!(source.as_str(), "remote");
    }
}
