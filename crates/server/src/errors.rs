use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use configs::Environment;
use store::StoreError;

/// Error every handler returns: a status plus the JSON `message` body the
/// API promises, e.g. `404 {"message":"User not found"}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found(entity: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{entity} not found"))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, err.to_string()),
        }
    }
}

/// Body rejections keep their own status (400/415/422) but answer in JSON
/// like every other error on this API.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

/// Fault boundary: turns a handler panic into the generic 500 body instead
/// of dropping the connection. Panic detail rides along only in development.
#[derive(Clone, Copy)]
pub struct PanicResponder {
    environment: Environment,
}

impl PanicResponder {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl tower_http::catch_panic::ResponseForPanic for PanicResponder {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(
        &mut self,
        err: Box<dyn Any + Send + 'static>,
    ) -> Response<Self::ResponseBody> {
        let detail = panic_detail(&*err);
        error!(detail = detail.as_deref().unwrap_or("<non-string payload>"), "handler panicked");
        let body = panic_body(self.environment, detail.as_deref());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

fn panic_detail(err: &(dyn Any + Send)) -> Option<String> {
    if let Some(s) = err.downcast_ref::<String>() {
        Some(s.clone())
    } else if let Some(s) = err.downcast_ref::<&str>() {
        Some((*s).to_string())
    } else {
        None
    }
}

fn panic_body(environment: Environment, detail: Option<&str>) -> serde_json::Value {
    let mut body = json!({
        "status": "error",
        "message": "Something went wrong!",
    });
    if environment.is_development() {
        body["error"] = json!(detail.unwrap_or("unknown panic"));
    }
    body
}
