//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ResourceStore）
//! - queries: 只读查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

pub use error::ApplicationError;

pub use ports::{ResourceStorePort, StoreError};

pub use queries::{
    GetResource,
    ListCategories,
    ListResources,
    ListResourcesByCategory,
    // Handlers
    handlers::{
        GetResourceHandler, ListCategoriesHandler, ListResourcesByCategoryHandler,
        ListResourcesHandler,
    },
};
