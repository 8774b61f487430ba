//! HTTP Routes
//!
//! API Endpoints:
//! - /api/resources              GET  列出全部资源，`?category=` 按主分类过滤
//! - /api/resources/{id}         GET  获取单个资源（id 为纯数字）
//! - /api/categories             GET  列出去重排序后的主分类
//!
//! 其余路径落到 fallback，返回 404

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .fallback(handlers::endpoint_not_found)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/resources", get(handlers::list_resources))
        .route("/resources/:id", get(handlers::get_resource))
        .route("/categories", get(handlers::list_categories))
}
