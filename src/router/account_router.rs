use axum::{routing::post, Router};
use std::sync::Arc;

use crate::handler::account_handler::{login_handler, register_handler};
use crate::service::account_service::AccountService;

pub fn account_router(service: Arc<dyn AccountService>) -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .with_state(service)
}
