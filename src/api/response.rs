// src/api/response.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::parser::ParserError;

/// Standardized API response format
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Custom response type that handles both successful and error responses
pub enum ApiResult<T: Serialize> {
    Success(T),
    Error(StatusCode, String),
}

impl<T: Serialize> IntoResponse for ApiResult<T> {
    fn into_response(self) -> Response {
        match self {
            ApiResult::Success(data) => {
                (StatusCode::OK, Json(ApiResponse::success(data))).into_response()
            }
            ApiResult::Error(status, message) => {
                (status, Json(ApiResponse::<T>::error(message))).into_response()
            }
        }
    }
}

// Helper functions to create API results
pub fn api_success<T: Serialize>(data: T) -> ApiResult<T> {
    ApiResult::Success(data)
}

pub fn api_error<T: Serialize>(status: StatusCode, message: impl Into<String>) -> ApiResult<T> {
    ApiResult::Error(status, message.into())
}

/// Status for a failed parse: upstream failures are a bad gateway
pub fn parser_error_status(error: &ParserError) -> StatusCode {
    if error.is_upstream() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Parse failures wrapped in the standard error body
pub struct ParseFailure(pub ParserError);

impl IntoResponse for ParseFailure {
    fn into_response(self) -> Response {
        let status = parser_error_status(&self.0);
        (status, Json(ApiResponse::<()>::error(self.0.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses() {
        assert_eq!(parser_error_status(&ParserError::Distress), StatusCode::BAD_GATEWAY);
        let status = ParserError::Status {
            endpoint: "http://localhost:9001/parse".to_string(),
            status: 500,
        };
        assert_eq!(parser_error_status(&status), StatusCode::BAD_GATEWAY);

        let invalid = ParserError::InvalidEndpoint {
            endpoint: "nope".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };
        assert_eq!(parser_error_status(&invalid), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_value(ApiResponse::<()>::error("parser in distress")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "parser in distress");
        assert!(body["data"].is_null());
    }
}
