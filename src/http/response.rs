//! Error responses.
//!
//! Every failure leaves the service as `{"error": "<message>"}` with a
//! status chosen here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::phonebook::PhonebookError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Phonebook(#[from] PhonebookError),

    /// The body was not valid JSON for the expected payload.
    #[error("malformed JSON body")]
    MalformedBody,

    #[error("request body too large")]
    PayloadTooLarge,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Phonebook(PhonebookError::NameMissing)
            | ApiError::Phonebook(PhonebookError::NumberMissing) => StatusCode::BAD_REQUEST,
            ApiError::Phonebook(PhonebookError::NameTaken) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Phonebook(PhonebookError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::MalformedBody => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
