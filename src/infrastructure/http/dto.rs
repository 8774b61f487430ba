//! Data Transfer Objects - 响应信封

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 成功响应信封 `{ data, count? }`
///
/// `count` 只在 `data` 为列表时出现，且等于列表长度
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 单条记录，不带 count
    pub fn single(data: T) -> Self {
        Self { data, count: None }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// 列表，count 取列表长度
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            data,
            count: Some(count),
        }
    }
}

/// 错误响应信封 `{ error: "Error", message, statusCode }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            error: "Error",
            message: message.into(),
            status_code: status.as_u16(),
        }
    }
}

// ============================================================================
// Pretty JSON
// ============================================================================

/// 序列化失败时的兜底响应体
const SERIALIZATION_FAILURE_BODY: &str =
    "{\n  \"error\": \"Error\",\n  \"message\": \"Internal server error\",\n  \"statusCode\": 500\n}";

/// 以缩进格式输出的 JSON 响应
#[derive(Debug)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        let content_type = [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )];

        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => (content_type, body).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    content_type,
                    SERIALIZATION_FAILURE_BODY,
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_single_has_no_count() {
        let value = serde_json::to_value(ApiResponse::single("x")).unwrap();
        assert_eq!(value, json!({ "data": "x" }));
    }

    #[test]
    fn test_list_count_matches_len() {
        let value = serde_json::to_value(ApiResponse::list(vec!["AI", "DEVOPS"])).unwrap();
        assert_eq!(value, json!({ "data": ["AI", "DEVOPS"], "count": 2 }));
    }

    #[test]
    fn test_empty_list_count_zero() {
        let value = serde_json::to_value(ApiResponse::list(Vec::<String>::new())).unwrap();
        assert_eq!(value, json!({ "data": [], "count": 0 }));
    }

    #[test]
    fn test_error_response_shape() {
        let value =
            serde_json::to_value(ErrorResponse::new("Endpoint not found", StatusCode::NOT_FOUND))
                .unwrap();
        assert_eq!(
            value,
            json!({ "error": "Error", "message": "Endpoint not found", "statusCode": 404 })
        );
    }

    #[tokio::test]
    async fn test_pretty_json_is_indented() {
        let response = PrettyJson(ApiResponse::list(vec![1, 2])).into_response();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("\n  \"data\""));
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["count"], 2);
    }

    #[test]
    fn test_fallback_body_is_valid_json() {
        let value: Value = serde_json::from_str(SERIALIZATION_FAILURE_BODY).unwrap();
        assert_eq!(value["statusCode"], 500);
    }
}
