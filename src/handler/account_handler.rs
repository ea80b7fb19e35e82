use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::IntoResponse,
};
use tracing::warn;

use crate::dto::user_dto::{LoginRequest, MessageResponse, RegisterRequest};
use crate::service::account_service::AccountService;
use crate::util::error::{messages, HandlerError};

// Register
pub async fn register_handler(
    State(service): State<Arc<dyn AccountService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(payload) = payload.map_err(|e| {
        warn!("Rejected register body: {}", e);
        HandlerError::bad_request(messages::REGISTER_MISSING_FIELDS)
    })?;
    let registration = payload
        .into_registration()
        .map_err(|e| HandlerError::from_service(e, messages::SERVER_ERROR))?;
    service
        .register(registration)
        .await
        .map_err(|e| HandlerError::from_service(e, messages::SERVER_ERROR))?;
    Ok(Json(MessageResponse::new(messages::REGISTER_SUCCESS)))
}

// Login
pub async fn login_handler(
    State(service): State<Arc<dyn AccountService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(payload) = payload.map_err(|e| {
        warn!("Rejected login body: {}", e);
        HandlerError::bad_request(messages::LOGIN_MISSING_FIELDS)
    })?;
    let (email, password) = payload
        .into_credentials()
        .map_err(|e| HandlerError::from_service(e, messages::SERVER_ERROR))?;
    let res = service
        .login(email, password)
        .await
        .map_err(|e| HandlerError::from_service(e, messages::SERVER_ERROR))?;
    Ok(Json(res))
}
