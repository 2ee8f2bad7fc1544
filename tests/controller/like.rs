use axum::{
    body::{to_bytes, Body},
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use tower::ServiceExt;

use favourite_places::{
    controller::like::{get_likes, get_likes_for_place, like_place},
    error::Error,
    model::api::{ErrorDto, LikeDto, MessageDto, PlaceLikesDto},
    router,
};

use crate::setup::{create_tables, test_setup};

fn like_dto(student: &str, place: &str) -> LikeDto {
    LikeDto {
        student: student.to_string(),
        place: place.to_string(),
    }
}

fn into_response(result: Result<impl IntoResponse, Error>) -> Response {
    match result {
        Ok(resp) => resp.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Expect 200 with the confirmation message when a student likes a place
#[tokio::test]
async fn like_place_success() -> Result<(), DbErr> {
    let test = test_setup().await;
    create_tables(&test.state.db).await?;

    let result = like_place(State(test.state), Ok(Json(like_dto("ana", "Paris")))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let msg: MessageDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(msg.msg, "Like agregado correctamente");

    Ok(())
}

/// Expect 400 on a repeated like from the same student, with the count
/// unchanged at 1
#[tokio::test]
async fn like_place_duplicate_rejected() -> Result<(), DbErr> {
    let test = test_setup().await;
    create_tables(&test.state.db).await?;

    let result = like_place(State(test.state.clone()), Ok(Json(like_dto("ana", "Paris")))).await;
    assert!(result.is_ok());

    let result = like_place(State(test.state.clone()), Ok(Json(like_dto("ana", "Paris")))).await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let error: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.error, "You have already liked this place");

    let resp = get_likes_for_place(State(test.state), Path("Paris".to_string()))
        .await
        .unwrap()
        .into_response();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let count: PlaceLikesDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(count.likes, 1);

    Ok(())
}

/// Expect at most one of two concurrent duplicate likes to succeed
#[tokio::test]
async fn like_place_concurrent_duplicates() -> Result<(), DbErr> {
    let test = test_setup().await;
    create_tables(&test.state.db).await?;

    let (first, second) = tokio::join!(
        like_place(State(test.state.clone()), Ok(Json(like_dto("ana", "Paris")))),
        like_place(State(test.state.clone()), Ok(Json(like_dto("ana", "Paris")))),
    );

    let statuses = [into_response(first).status(), into_response(second).status()];
    assert_eq!(
        statuses.iter().filter(|s| **s == StatusCode::OK).count(),
        1,
        "exactly one of two concurrent duplicate likes may succeed"
    );

    let resp = get_likes_for_place(State(test.state), Path("Paris".to_string()))
        .await
        .unwrap()
        .into_response();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let count: PlaceLikesDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(count.likes, 1);

    Ok(())
}

/// Expect likes from different students to accumulate on the same place
#[tokio::test]
async fn like_place_multiple_students() -> Result<(), DbErr> {
    let test = test_setup().await;
    create_tables(&test.state.db).await?;

    like_place(State(test.state.clone()), Ok(Json(like_dto("ana", "Paris"))))
        .await
        .unwrap();
    like_place(State(test.state.clone()), Ok(Json(like_dto("luis", "Paris"))))
        .await
        .unwrap();

    let resp = get_likes_for_place(State(test.state), Path("Paris".to_string()))
        .await
        .unwrap()
        .into_response();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let count: PlaceLikesDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(count.place, "Paris");
    assert_eq!(count.likes, 2);

    Ok(())
}

/// Expect 200 with likes = 0 for a place nobody has liked
#[tokio::test]
async fn get_likes_for_place_unknown_is_zero() -> Result<(), DbErr> {
    let test = test_setup().await;
    create_tables(&test.state.db).await?;

    let result = get_likes_for_place(State(test.state), Path("Atlantis".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let count: PlaceLikesDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(count.place, "Atlantis");
    assert_eq!(count.likes, 0);

    Ok(())
}

/// Expect grouped counts to match the accepted like rows per place
#[tokio::test]
async fn get_likes_grouped_counts() -> Result<(), DbErr> {
    let test = test_setup().await;
    create_tables(&test.state.db).await?;

    like_place(State(test.state.clone()), Ok(Json(like_dto("ana", "Paris"))))
        .await
        .unwrap();
    like_place(State(test.state.clone()), Ok(Json(like_dto("luis", "Paris"))))
        .await
        .unwrap();
    like_place(
        State(test.state.clone()),
        Ok(Json(like_dto("luis", "Oporto"))),
    )
    .await
    .unwrap();

    let result = get_likes(State(test.state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let counts: Vec<PlaceLikesDto> = serde_json::from_slice(&body).unwrap();

    assert_eq!(counts.len(), 2);

    let paris = counts
        .iter()
        .find(|c| c.place == "Paris")
        .expect("Paris count missing");
    assert_eq!(paris.likes, 2);

    let oporto = counts
        .iter()
        .find(|c| c.place == "Oporto")
        .expect("Oporto count missing");
    assert_eq!(oporto.likes, 1);

    Ok(())
}

/// Expect 400 when the like body is missing a required field
#[tokio::test]
async fn like_place_missing_required_field() -> Result<(), DbErr> {
    let test = test_setup().await;
    create_tables(&test.state.db).await?;

    let app = router::routes().with_state(test.state);

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/like")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"student":"ana"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let error: ErrorDto = serde_json::from_slice(&body).unwrap();
    assert!(error.error.contains("place"));

    Ok(())
}
