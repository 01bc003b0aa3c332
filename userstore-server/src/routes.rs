use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::controllers;
use crate::{health, hello, AppState};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health))
        .route("/users/:user_id", get(controllers::get_user))
        .route("/users", post(controllers::create_user))
        .route("/users/delete", post(controllers::delete_user))
        .route("/users/update", post(controllers::update_user))
        .layer(Extension(state))
}
