//! Fallback Handler

use axum::http::Uri;

use crate::infrastructure::http::error::ApiError;

/// 未匹配任何路由
pub async fn endpoint_not_found(uri: Uri) -> ApiError {
    tracing::debug!(uri = %uri, "No route matched");
    ApiError::NotFound("Endpoint not found".to_string())
}
