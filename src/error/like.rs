use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum LikeError {
    #[error("Student {student:?} has already liked place {place:?}")]
    AlreadyLiked { student: String, place: String },
}

impl IntoResponse for LikeError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyLiked { .. } => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "You have already liked this place".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
