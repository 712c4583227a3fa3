//! `/api/persons` handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::http::request::{new_person_payload, parse_id};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::phonebook::{Person, PhonebookError};

/// GET /api/persons
pub async fn list_persons(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.store.list())
}

/// GET /api/persons/{id}
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let id = parse_id(&id).ok_or(PhonebookError::NotFound)?;
    Ok(Json(state.store.get(id)?))
}

/// POST /api/persons
pub async fn create_person(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Person>, ApiError> {
    let payload = new_person_payload(&headers, body)?;
    let person = state.store.create(payload)?;
    Ok(Json(person))
}

/// DELETE /api/persons/{id}
///
/// Always 204, whether or not the id existed.
pub async fn delete_person(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    if let Some(id) = parse_id(&id) {
        state.store.delete(id);
    }
    StatusCode::NO_CONTENT
}
