use axum::Json;
use serde::Serialize;

/// JSON body for the failure path. Whatever message the store reported is
/// passed through opaque, without classifying the error kind.
#[derive(Serialize)]
pub(crate) struct AppError {
    pub error: String,
}

impl AppError {
    pub(crate) fn new(message: impl Into<String>) -> Json<AppError> {
        Json(AppError { error: message.into() })
    }
}
