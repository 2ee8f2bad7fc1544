use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::SqlErr;

use crate::{
    data::like::LikeRepository,
    error::{like::LikeError, Error},
    model::{
        api::{ErrorDto, LikeDto, MessageDto, PlaceLikesDto},
        app::AppState,
    },
};

pub static LIKE_TAG: &str = "like";

/// Like a place as a student
#[utoipa::path(
    post,
    path = "/like",
    tag = LIKE_TAG,
    request_body = LikeDto,
    responses(
        (status = 200, description = "Like recorded", body = MessageDto),
        (status = 400, description = "Body missing, not JSON, missing a required field, or place already liked by this student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_place(
    State(state): State<AppState>,
    payload: Result<Json<LikeDto>, JsonRejection>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let Json(like) = payload?;
    let like_repository = LikeRepository::new(&state.db);

    // The constrained insert is the "already liked" check; there is no
    // read-before-write window for concurrent duplicates to slip through.
    if let Err(err) = like_repository.create(&like.student, &like.place).await {
        return match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(LikeError::AlreadyLiked {
                student: like.student,
                place: like.place,
            }
            .into()),
            _ => Err(err.into()),
        };
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: "Like agregado correctamente".to_string(),
        }),
    )
        .into_response())
}

/// Get like counts grouped by place
#[utoipa::path(
    get,
    path = "/likes",
    tag = LIKE_TAG,
    responses(
        (status = 200, description = "Like counts per place", body = Vec<PlaceLikesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_likes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let like_repository = LikeRepository::new(&state.db);

    let counts = like_repository.count_grouped_by_place().await?;

    let count_dtos: Vec<PlaceLikesDto> = counts
        .into_iter()
        .map(|row| PlaceLikesDto {
            place: row.place,
            likes: row.likes as u64,
        })
        .collect();

    Ok((StatusCode::OK, Json(count_dtos)).into_response())
}

/// Get the like count for a single place
#[utoipa::path(
    get,
    path = "/likes/{place}",
    tag = LIKE_TAG,
    params(
        ("place" = String, Path, description = "Name of the place")
    ),
    responses(
        (status = 200, description = "Like count for the place, 0 if the place is unknown", body = PlaceLikesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_likes_for_place(
    State(state): State<AppState>,
    Path(place): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let like_repository = LikeRepository::new(&state.db);

    let likes = like_repository.count_by_place(&place).await?;

    Ok((StatusCode::OK, Json(PlaceLikesDto { place, likes })).into_response())
}
