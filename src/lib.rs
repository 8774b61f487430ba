//! Resource Catalog - 只读资源目录 API
//!
//! 架构设计: DDD + CQRS（只读侧）+ Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Resource Context: 资源实体、ID 与分类值对象
//!
//! 应用层 (application/):
//! - Ports: ResourceStorePort
//! - Queries: 列表、按分类过滤、按 ID 查询、分类列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum 路由、CORS 头、方法守卫、JSON 信封
//! - Adapters: 内嵌/文件目录、远程 HTTP 目录

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_support;

pub use config::{load_config, AppConfig};
