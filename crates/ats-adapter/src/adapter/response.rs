use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use super::service::AdapterError;

/// Transport-neutral handler result: a numeric status and a JSON body.
///
/// This is the single place where adapter results turn into responses, both
/// for the HTTP router and for the serverless proxy surface.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: Value,
}

impl HandlerResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok<T: Serialize>(result: Result<T, AdapterError>) -> Self {
        Self::from_result(200, result)
    }

    pub fn created<T: Serialize>(result: Result<T, AdapterError>) -> Self {
        Self::from_result(201, result)
    }

    pub fn from_result<T: Serialize>(success: u16, result: Result<T, AdapterError>) -> Self {
        match result.and_then(|payload| {
            serde_json::to_value(payload).map_err(|err| AdapterError::Unexpected(err.to_string()))
        }) {
            Ok(body) => Self::new(success, body),
            Err(err) => Self::from(err),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl From<AdapterError> for HandlerResponse {
    fn from(err: AdapterError) -> Self {
        Self::new(err.status(), json!({ "error": err.to_string() }))
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_GATEWAY);
        (status, Json(self.body)).into_response()
    }
}

impl IntoResponse for AdapterError {
    fn into_response(self) -> Response {
        HandlerResponse::from(self).into_response()
    }
}
