//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::dto::{ErrorResponse, PrettyJson};
use crate::application::ApplicationError;

/// 对外的通用 500 文案，内部细节只写日志
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed,
    /// 携带内部细节，仅用于日志
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 写入响应体的文案
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
            ApiError::MethodNotAllowed => "Method not allowed",
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(detail) => {
                tracing::error!(status = status.as_u16(), error = %detail, "Internal server error");
            }
            _ => {
                tracing::debug!(status = status.as_u16(), reason = %self.message(), "Request rejected");
            }
        }

        (status, PrettyJson(ErrorResponse::new(self.message(), status))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } | ApplicationError::CategoryNotFound(_) => {
                ApiError::NotFound(e.to_string())
            }
            ApplicationError::InvalidResourceId(_) => ApiError::BadRequest(e.to_string()),
            // 分类解码失败与 Store 失败同样处理：通用 500，细节只写日志
            ApplicationError::InvalidCategory(_) => ApiError::Internal(e.to_string()),
            ApplicationError::StoreError(msg) => ApiError::Internal(msg),
        }
    }
}
