//! Application errors and their HTTP mapping.
//!
//! `AppError` is the application's top-level error type. Infrastructure errors
//! convert into it with `#[from]`, request-level failures are constructed with
//! an explanatory message, and its `IntoResponse` implementation turns every
//! variant into the matching HTTP status wrapped in the response envelope.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{dto::api::ErrorDto, error::config::ConfigError, model::student::FieldViolations};

/// The application's top-level error type.
///
/// Every failure a handler can hit ends up as one of these variants.
/// Infrastructure errors arrive through `#[from]` conversions, while the
/// request-level variants (`NotFound`, `Conflict`, `BadRequest`, `Validation`)
/// carry the information needed to build the response body.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while reading environment variables at startup.
    ///
    /// Maps to 500 Internal Server Error; without configuration the
    /// application cannot operate at all.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// SeaORM database failure.
    ///
    /// Maps to 500 Internal Server Error with the details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Requested resource does not exist.
    ///
    /// Maps to 404 Not Found with the provided message.
    ///
    /// # Fields
    /// - Message naming the missing resource
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness conflict.
    ///
    /// Maps to 409 Conflict. Raised when a request would duplicate a student
    /// number that is already stored.
    ///
    /// # Fields
    /// - Message naming the conflicting value
    #[error("{0}")]
    Conflict(String),

    /// Request is invalid for reasons other than payload validation.
    ///
    /// Maps to 400 Bad Request with the provided message.
    ///
    /// # Fields
    /// - Message describing what was wrong with the request
    #[error("{0}")]
    BadRequest(String),

    /// Request payload failed validation.
    ///
    /// Maps to 400 Bad Request. The response `data` carries a map from field
    /// name to violation message covering every field that failed.
    ///
    /// # Fields
    /// - Map of field name to violation message
    #[error("validation failed")]
    Validation(FieldViolations),

    /// Unexpected internal failure with a message meant for the log.
    ///
    /// Maps to 500 Internal Server Error. The message is logged server-side
    /// while the client only sees a generic response.
    ///
    /// # Fields
    /// - Message recorded in the server log
    #[error("{0}")]
    InternalError(String),
}

/// Renders an `AppError` as its HTTP response.
///
/// Each variant maps to a status code and an error envelope whose `code`
/// mirrors that status. Internal failures are logged in full while the client
/// only receives a generic message.
///
/// # Returns
/// - 400 Bad Request - For the `BadRequest` and `Validation` variants
/// - 404 Not Found - For the `NotFound` variant
/// - 409 Conflict - For the `Conflict` variant
/// - 500 Internal Server Error - For everything else (ConfigErr, DbErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new(StatusCode::NOT_FOUND, msg)))
                    .into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto::new(StatusCode::CONFLICT, msg)))
                    .into_response()
            }
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(StatusCode::BAD_REQUEST, msg)),
            )
                .into_response(),
            Self::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::validation(violations)),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error",
                    )),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Fallback wrapper turning any displayable error into a 500 response.
///
/// Logs the wrapped error and answers with a generic "Internal server error"
/// envelope so no implementation detail reaches the client. Used for error
/// variants without a dedicated HTTP mapping.
pub struct InternalServerError<E>(pub E);

/// Turns the wrapped error into a 500 response.
///
/// The full error goes to the log; the client only sees the generic envelope.
///
/// # Arguments
/// - `E` - Anything displayable, in practice an error
///
/// # Returns
/// A 500 Internal Server Error response with a generic error message envelope
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            )),
        )
            .into_response()
    }
}
