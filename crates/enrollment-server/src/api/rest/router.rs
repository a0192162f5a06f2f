//! Router creation and configuration
//!
//! Student endpoints are mounted under `/me`, course endpoints under `/api/v2`.

use super::handlers::*;
use super::types::AppState;
use crate::error::panic_response;
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/me", student_routes())
        .nest("/api/v2", course_routes())
        .with_state(state);

    with_layers(router)
}

/// Middleware shared by every route: panic catch-all, CORS, request tracing
pub(super) fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            get(list_students)
                .post(create_student)
                .put(update_student)
                .delete(delete_student),
        )
        .route("/students/:student_id", get(get_student))
        .route("/students/:student_id/courses", get(get_student_courses))
}

fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            get(list_courses)
                .post(create_course)
                .put(update_course)
                .delete(delete_course),
        )
        .route("/courses/:course_id", get(get_course))
        // Older clients address a single course with the prefix repeated
        .route("/api/v2/course/:course_id", get(get_course))
}
