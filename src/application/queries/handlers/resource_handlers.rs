//! Resource Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ResourceStorePort;
use crate::application::queries::{
    GetResource, ListCategories, ListResources, ListResourcesByCategory,
};
use crate::domain::resource::{distinct_categories, Resource};

/// ListResources Handler
pub struct ListResourcesHandler {
    store: Arc<dyn ResourceStorePort>,
}

impl ListResourcesHandler {
    pub fn new(store: Arc<dyn ResourceStorePort>) -> Self {
        Self { store }
    }

    /// 空目录返回空列表而不是错误
    pub async fn handle(&self, _query: ListResources) -> Result<Vec<Resource>, ApplicationError> {
        Ok(self.store.all().await?)
    }
}

/// ListResourcesByCategory Handler
pub struct ListResourcesByCategoryHandler {
    store: Arc<dyn ResourceStorePort>,
}

impl ListResourcesByCategoryHandler {
    pub fn new(store: Arc<dyn ResourceStorePort>) -> Self {
        Self { store }
    }

    /// 过滤结果为空时返回 CategoryNotFound
    pub async fn handle(
        &self,
        query: ListResourcesByCategory,
    ) -> Result<Vec<Resource>, ApplicationError> {
        let resources = self.store.filter(query.category.as_str()).await?;
        if resources.is_empty() {
            return Err(ApplicationError::CategoryNotFound(query.category));
        }
        Ok(resources)
    }
}

/// GetResource Handler
pub struct GetResourceHandler {
    store: Arc<dyn ResourceStorePort>,
}

impl GetResourceHandler {
    pub fn new(store: Arc<dyn ResourceStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetResource) -> Result<Resource, ApplicationError> {
        self.store
            .find(query.resource_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Resource", query.resource_id))
    }
}

/// ListCategories Handler
pub struct ListCategoriesHandler {
    store: Arc<dyn ResourceStorePort>,
}

impl ListCategoriesHandler {
    pub fn new(store: Arc<dyn ResourceStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: ListCategories) -> Result<Vec<String>, ApplicationError> {
        let resources = self.store.all().await?;
        Ok(distinct_categories(&resources))
    }
}
