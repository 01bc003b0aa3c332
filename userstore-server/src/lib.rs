//! Userstore server - axum HTTP surface over the core user service

use std::sync::Arc;

use axum::http::StatusCode;

use userstore_core::UserStoreContext;

pub mod controllers;
pub mod routes;

/// Shared application state handed to every request handler.
pub struct AppState {
    pub context: UserStoreContext,
}

impl AppState {
    pub fn new(context: UserStoreContext) -> Arc<Self> {
        Arc::new(Self { context })
    }
}

/// Greeting for the root path.
pub async fn hello() -> &'static str {
    "Hello, welcome to the user record service."
}

/// Liveness probe. The service holds no in-process state between requests,
/// so being able to answer at all is the whole check.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
