pub mod account_router;
pub mod course_router;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::service::account_service::AccountService;
use crate::service::course_service::CourseService;
use account_router::account_router;
use course_router::course_router;

/// Full HTTP surface: account and course routes, a health check, permissive
/// CORS and request tracing.
pub fn create_router(
    account_service: Arc<dyn AccountService>,
    course_service: Arc<dyn CourseService>,
) -> Router {
    Router::new()
        .merge(account_router(account_service))
        .merge(course_router(course_service))
        .route("/health", get(|| async { "OK" }))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}
