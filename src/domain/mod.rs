//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Resource Context: 只读资源目录

pub mod resource;
