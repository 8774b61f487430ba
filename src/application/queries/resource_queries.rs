//! Resource Queries

use crate::domain::resource::{Category, ResourceId};

/// 列出全部资源
#[derive(Debug, Clone)]
pub struct ListResources;

/// 按分类列出资源
#[derive(Debug, Clone)]
pub struct ListResourcesByCategory {
    pub category: Category,
}

/// 获取单个资源
#[derive(Debug, Clone)]
pub struct GetResource {
    pub resource_id: ResourceId,
}

/// 列出去重排序后的分类
#[derive(Debug, Clone)]
pub struct ListCategories;
