use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PlaceError {
    #[error("Place {place:?} already exists for student {student:?}")]
    AlreadyExists { student: String, place: String },
}

impl IntoResponse for PlaceError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyExists { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Place already exists".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
