//! Error types for the favourite-places server.
//!
//! Domain-specific error types (`PlaceError`, `LikeError`) are aggregated into
//! a single `Error` enum using `thiserror`. All errors implement
//! `IntoResponse`: anticipated failures (duplicate place, duplicate like,
//! malformed request bodies) map to 4xx responses, everything else funnels
//! through `InternalServerError` which logs and returns a generic 500.

pub mod like;
pub mod place;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{like::LikeError, place::PlaceError},
    model::api::ErrorDto,
};

/// Main error type for the favourite-places server.
#[derive(Error, Debug)]
pub enum Error {
    /// Place error (duplicate place entry).
    #[error(transparent)]
    PlaceError(#[from] PlaceError),
    /// Like error (student already liked the place).
    #[error(transparent)]
    LikeError(#[from] LikeError),
    /// Request body error (body missing, not JSON, or failing validation).
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::PlaceError(err) => err.into_response(),
            Self::LikeError(err) => err.into_response(),
            Self::JsonRejection(err) => {
                tracing::debug!("{}", err);

                // The original service answered missing JSON bodies with a
                // fixed message; deserialization failures carry the field name.
                let error = match &err {
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing JSON in request".to_string()
                    }
                    err => err.body_text(),
                };

                (StatusCode::BAD_REQUEST, Json(ErrorDto { error })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the error message and returns a generic "Internal server error"
/// message to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
