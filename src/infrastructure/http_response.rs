// HTTP error responses for conversion and inference failures
use crate::application::chart_inference::InferenceError;
use crate::domain::error::DigitizeError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    Digitize(DigitizeError),
    Inference(InferenceError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Digitize(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Inference(InferenceError::NoEndpoints) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Inference(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            ApiError::Digitize(e) => ErrorBody {
                error: e.kind(),
                message: e.to_string(),
            },
            ApiError::Inference(e) => ErrorBody {
                error: "upstream",
                message: e.to_string(),
            },
        }
    }
}

impl From<DigitizeError> for ApiError {
    fn from(e: DigitizeError) -> Self {
        ApiError::Digitize(e)
    }
}

impl From<InferenceError> for ApiError {
    fn from(e: InferenceError) -> Self {
        ApiError::Inference(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.body().message);
        } else {
            tracing::debug!("Rejected request: {}", self.body().message);
        }
        (status, Json(self.body())).into_response()
    }
}
