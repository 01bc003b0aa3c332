//! HTTP handlers for the user record operations

use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

use userstore_core::domain::result::Error;
use userstore_core::{DeletedUser, UpdatedUser, UserPatch, UserRecord};

use crate::AppState;

/// Error body shared by every failure response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Map a core error onto the HTTP taxonomy: validation and conflict are
/// client faults, absent records are 404, store failures pass their message
/// through as a 500.
fn error_response(err: Error) -> (StatusCode, Json<ErrorBody>) {
    let status = match &err {
        Error::Validation(_) | Error::Conflict(_) => StatusCode::BAD_REQUEST,
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::Store(message) => {
            tracing::error!("record store failure: {}", message);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

// Request bodies. Every field is optional: presence rules belong to the
// service, not to deserialization, so a missing field yields the service's
// validation message instead of a body-parse rejection.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Handler for GET /users/:user_id
pub async fn get_user(
    Extension(state): Extension<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserRecord>, (StatusCode, Json<ErrorBody>)> {
    state
        .context
        .user_service
        .get_user(&user_id)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Handler for POST /users
pub async fn create_user(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserRecord>, (StatusCode, Json<ErrorBody>)> {
    state
        .context
        .user_service
        .create_user(req.name, req.email, req.password)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Handler for POST /users/delete
pub async fn delete_user(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<DeleteUserRequest>,
) -> Result<Json<DeletedUser>, (StatusCode, Json<ErrorBody>)> {
    state
        .context
        .user_service
        .delete_user(req.user_id)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Handler for POST /users/update
pub async fn update_user(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UpdatedUser>, (StatusCode, Json<ErrorBody>)> {
    let patch = UserPatch {
        name: req.name,
        email: req.email,
        password: req.password,
    };
    state
        .context
        .user_service
        .update_user(req.user_id, patch)
        .await
        .map(Json)
        .map_err(error_response)
}
