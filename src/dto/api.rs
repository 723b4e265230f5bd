use axum::http::StatusCode;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::student::FieldViolations;

/// Uniform response envelope for successful requests.
///
/// Every endpoint wraps its payload in this envelope. The `code` field mirrors the
/// HTTP status of the response, `data` carries the operation payload (or `null` for
/// operations without one), and `timestamp` is the epoch-millisecond production time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    /// Builds a 200 envelope around the given payload.
    pub fn ok(data: T) -> Self {
        Self::build(StatusCode::OK, "success", Some(data))
    }

    /// Builds a 200 envelope with a custom message around the given payload.
    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self::build(StatusCode::OK, message, Some(data))
    }

    /// Builds a 201 envelope around the given payload.
    pub fn created(data: T) -> Self {
        Self::build(StatusCode::CREATED, "created", Some(data))
    }

    fn build(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

impl ApiResponse<()> {
    /// Builds a 200 envelope for operations that succeed without a payload.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self::build(StatusCode::OK, message, None)
    }
}

/// Envelope returned for failed requests.
///
/// Shares the wire shape of [`ApiResponse`]. `data` is `null` except for validation
/// failures, where it carries the field-to-message violation map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub code: u16,
    pub message: String,
    pub data: Option<FieldViolations>,
    pub timestamp: i64,
}

impl ErrorDto {
    /// Builds an error envelope whose `code` mirrors the given status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data: None,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Builds a 400 envelope carrying the per-field violation map.
    pub fn validation(violations: FieldViolations) -> Self {
        Self {
            code: StatusCode::BAD_REQUEST.as_u16(),
            message: "validation failed".to_string(),
            data: Some(violations),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
