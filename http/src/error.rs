use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use relay_application::ApplicationError;

#[derive(Debug)]
pub enum HttpError {
    BadRequest { message: String },
    InvalidMultipart { status: StatusCode, message: String },
    Internal { message: String },
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            HttpError::InvalidMultipart { status, .. } => *status,
            HttpError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            HttpError::BadRequest { message }
            | HttpError::InvalidMultipart { message, .. }
            | HttpError::Internal { message } => message,
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
    }
}

impl From<MultipartError> for HttpError {
    fn from(error: MultipartError) -> Self {
        HttpError::InvalidMultipart {
            status: error.status(),
            message: error.body_text(),
        }
    }
}

impl From<ApplicationError> for HttpError {
    fn from(error: ApplicationError) -> Self {
        error_mapper(error)
    }
}

pub fn error_mapper(error: ApplicationError) -> HttpError {
    let message = error.to_string();
    if error.is_client_error() {
        HttpError::BadRequest { message }
    } else {
        HttpError::Internal { message }
    }
}
