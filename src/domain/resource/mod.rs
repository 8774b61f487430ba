//! Resource Context - 资源目录限界上下文
//!
//! 职责:
//! - Resource 实体（只读记录）
//! - 资源 ID 与分类值对象
//! - 目录级规则（ID 唯一、分类去重排序）

mod catalog;
mod entity;
mod errors;
mod value_objects;

pub use catalog::{distinct_categories, ensure_unique_ids};
pub use entity::Resource;
pub use errors::ResourceError;
pub use value_objects::{Category, ResourceId};
