//! 应用层 - 查询（读操作）
//!
//! 系统只有读侧，所有路由都落到这里的查询

mod resource_queries;

pub mod handlers;

pub use resource_queries::*;
