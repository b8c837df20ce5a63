use crate::domain::validate::validate;
use crate::transport::http::types::{AppState, ErrorBody};
use crate::domain::application::TutorApplication;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = Object,
    responses(
        (status = 201, description = "Application stored", body = TutorApplication),
        (status = 400, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_application_handler(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> impl IntoResponse {
    let Json(raw) = match body {
        Ok(v) => v,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::message(format!("Invalid JSON body: {}", e))),
            )
                .into_response();
        }
    };

    // Validation is fully resolved before the store is touched.
    let record = match validate(&raw) {
        Ok(record) => record,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::validation(e.message, e.field)),
            )
                .into_response();
        }
    };

    match state.store.insert(&record).await {
        Ok(stored) => {
            println!("> New tutor application received: id={}", stored.id);
            (StatusCode::CREATED, Json(stored)).into_response()
        }
        Err(e) => {
            eprintln!("> Application insert failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::message("Failed to create application")),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/applications",
    responses(
        (status = 200, description = "All applications, newest first", body = Vec<TutorApplication>),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_applications_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.list_all().await {
        Ok(applications) => (StatusCode::OK, Json(applications)).into_response(),
        Err(e) => {
            eprintln!("> Application listing failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::message("Failed to fetch applications")),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    params(
        ("id" = i32, Path, description = "Application id")
    ),
    responses(
        (status = 200, description = "Application found", body = TutorApplication),
        (status = 404, description = "No application with that id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn get_application_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match state.store.get_by_id(id).await {
        Ok(Some(application)) => (StatusCode::OK, Json(application)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::message("Application not found")),
        )
            .into_response(),
        Err(e) => {
            eprintln!("> Application lookup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::message("Failed to fetch application")),
            )
                .into_response()
        }
    }
}
