//! HTTP Middleware
//!
//! - 方法守卫：OPTIONS 预检直接 204，其余非 GET 方法 405
//! - 状态码错误日志

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::error::ApiError;

/// 方法守卫中间件
///
/// 在路由匹配之前执行，所以对不存在的路径同样生效：
/// OPTIONS 优先于一切检查，非 GET 方法优先于 404
pub async fn method_guard_middleware(request: Request, next: Next) -> Response {
    let method = request.method();

    if *method == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }

    if *method != Method::GET {
        return ApiError::MethodNotAllowed.into_response();
    }

    next.run(request).await
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}
