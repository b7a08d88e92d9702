use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde::Serialize;

use crate::errors::StoreError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    message: String,
    retryable: bool,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match self {
            StoreError::NoData(_) | StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Constraint(_) => StatusCode::CONFLICT,
            StoreError::InvalidInput(_) | StoreError::OddPlayerCount(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            StoreError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let body = Json(ErrorBody {
            message: self.to_string(),
            retryable: self.is_retryable(),
        });

        (status, body).into_response()
    }
}
