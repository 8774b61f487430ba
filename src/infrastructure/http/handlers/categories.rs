//! Category HTTP Handlers

use axum::extract::State;
use std::sync::Arc;

use crate::application::ListCategories;
use crate::infrastructure::http::dto::{ApiResponse, PrettyJson};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出去重后按字典序升序排列的主分类
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<PrettyJson<ApiResponse<Vec<String>>>, ApiError> {
    let categories = state.list_categories_handler.handle(ListCategories).await?;
    Ok(PrettyJson(ApiResponse::list(categories)))
}
