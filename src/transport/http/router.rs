use crate::domain::application::{
    DemoClass, Gender, NewTutorApplication, PreferredStudents, Qualification, TeachingMode,
    TimeSlot, TutorApplication, Weekday,
};
use crate::transport::http::handlers::{applications, health};
use crate::transport::http::types::ErrorBody;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        applications::create_application_handler,
        applications::list_applications_handler,
        applications::get_application_handler
    ),
    components(schemas(
        TutorApplication,
        NewTutorApplication,
        Gender,
        TeachingMode,
        PreferredStudents,
        Qualification,
        DemoClass,
        Weekday,
        TimeSlot,
        ErrorBody
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/applications",
            post(applications::create_application_handler)
                .get(applications::list_applications_handler),
        )
        .route("/api/applications/:id", get(applications::get_application_handler))
        .with_state(app_state)
}
