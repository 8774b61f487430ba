//! Resource HTTP Handlers

use axum::extract::{OriginalUri, Query, State};
use std::sync::Arc;

use crate::application::{
    ApplicationError, GetResource, ListResources, ListResourcesByCategory,
};
use crate::domain::resource::{Category, Resource, ResourceId};
use crate::infrastructure::http::dto::{ApiResponse, PrettyJson};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 取第一个 `category` 参数（与浏览器 `URLSearchParams.get` 一致），值为空时视为未过滤
fn category_param(params: Vec<(String, String)>) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == "category")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// 列出资源
///
/// 带非空 `category` 时按分类过滤，过滤结果为空返回 404；
/// 不带时返回全部资源，空目录也是 200
pub async fn list_resources(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<PrettyJson<ApiResponse<Vec<Resource>>>, ApiError> {
    let resources = match category_param(params) {
        Some(raw) => {
            let category = Category::from_query(&raw).map_err(ApplicationError::from)?;
            tracing::debug!(category = %category, "Filtering resources by category");
            state
                .list_by_category_handler
                .handle(ListResourcesByCategory { category })
                .await?
        }
        None => state.list_resources_handler.handle(ListResources).await?,
    };

    Ok(PrettyJson(ApiResponse::list(resources)))
}

/// 请求路径的最后一段，保持百分号编码原样
fn raw_last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

/// 获取单个资源
///
/// 校验的是未解码的原始路径段，`%32` 不会被当作 `2`
pub async fn get_resource(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Result<PrettyJson<ApiResponse<Resource>>, ApiError> {
    let segment = raw_last_segment(uri.path());
    let resource_id = ResourceId::parse_segment(segment).map_err(ApplicationError::from)?;

    let resource = state
        .get_resource_handler
        .handle(GetResource { resource_id })
        .await?;

    Ok(PrettyJson(ApiResponse::single(resource)))
}
