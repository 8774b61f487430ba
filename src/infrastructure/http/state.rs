//! Application State
//!
//! 持有所有 Query Handlers（共享同一个 Store 端口），启动时注入，请求间只读共享

use std::sync::Arc;

use crate::application::{
    GetResourceHandler, ListCategoriesHandler, ListResourcesByCategoryHandler,
    ListResourcesHandler, ResourceStorePort,
};

/// 应用状态
pub struct AppState {
    pub list_resources_handler: ListResourcesHandler,
    pub list_by_category_handler: ListResourcesByCategoryHandler,
    pub get_resource_handler: GetResourceHandler,
    pub list_categories_handler: ListCategoriesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<dyn ResourceStorePort>) -> Self {
        Self {
            list_resources_handler: ListResourcesHandler::new(store.clone()),
            list_by_category_handler: ListResourcesByCategoryHandler::new(store.clone()),
            get_resource_handler: GetResourceHandler::new(store.clone()),
            list_categories_handler: ListCategoriesHandler::new(store),
        }
    }
}
