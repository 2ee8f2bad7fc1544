use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::SqlErr;

use crate::{
    data::place::PlaceRepository,
    error::{place::PlaceError, Error},
    model::{
        api::{AddPlaceDto, ErrorDto, MessageDto, PlaceDto},
        app::AppState,
    },
};

pub static PLACE_TAG: &str = "place";

/// List all recorded favourite places
#[utoipa::path(
    get,
    path = "/",
    tag = PLACE_TAG,
    responses(
        (status = 200, description = "All recorded favourite places", body = Vec<PlaceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_places(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let place_repository = PlaceRepository::new(&state.db);

    let places = place_repository.get_all().await?;

    let place_dtos: Vec<PlaceDto> = places.into_iter().map(PlaceDto::from).collect();

    Ok((StatusCode::OK, Json(place_dtos)).into_response())
}

/// Record a new favourite place for a student
#[utoipa::path(
    post,
    path = "/add",
    tag = PLACE_TAG,
    request_body = AddPlaceDto,
    responses(
        (status = 200, description = "Place added", body = MessageDto),
        (status = 400, description = "Body missing, not JSON, or missing a required field", body = ErrorDto),
        (status = 409, description = "Place already exists for this student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_place(
    State(state): State<AppState>,
    payload: Result<Json<AddPlaceDto>, JsonRejection>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let Json(place) = payload?;
    let place_repository = PlaceRepository::new(&state.db);

    // Kept for the conflict response; the DTO is consumed by the insert
    let student = place.student.clone();
    let name = place.place.clone();

    if let Err(err) = place_repository.create(place).await {
        return match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(PlaceError::AlreadyExists {
                student,
                place: name,
            }
            .into()),
            _ => Err(err.into()),
        };
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: "Place added".to_string(),
        }),
    )
        .into_response())
}
