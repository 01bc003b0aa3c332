//! Handler-level tests over the in-memory store
//!
//! The handlers are plain async functions; these tests call them directly
//! with constructed extractors and assert the HTTP status mapping and the
//! wire shapes of the bodies.

use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};

use userstore_core::adapters::memory::MemoryStore;
use userstore_core::config::Config;
use userstore_core::UserStoreContext;
use userstore_server::controllers::{
    self, CreateUserRequest, DeleteUserRequest, UpdateUserRequest,
};
use userstore_server::AppState;

fn state() -> Arc<AppState> {
    let context = UserStoreContext::with_store(Config::in_memory(), Arc::new(MemoryStore::new()));
    AppState::new(context)
}

async fn create_ann(state: &Arc<AppState>) -> String {
    let Json(record) = controllers::create_user(
        Extension(state.clone()),
        Json(CreateUserRequest {
            name: Some("Ann".to_string()),
            email: Some("ann@x.com".to_string()),
            password: Some("Secret1".to_string()),
        }),
    )
    .await
    .expect("create should succeed");
    record.user_id
}

#[tokio::test]
async fn create_then_get_roundtrips_the_record() {
    let state = state();
    let id = create_ann(&state).await;

    let Json(record) = controllers::get_user(Extension(state.clone()), Path(id.clone()))
        .await
        .expect("get should succeed");
    assert_eq!(record.user_id, id);
    assert_eq!(record.name, "Ann");
    assert_eq!(record.email, "ann@x.com");
    assert_eq!(record.password, "Secret1");
}

#[tokio::test]
async fn get_of_unknown_id_is_404_with_error_body() {
    let state = state();
    let (status, Json(body)) =
        controllers::get_user(Extension(state), Path("unknown-id".to_string()))
            .await
            .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "User does not exist");
}

#[tokio::test]
async fn create_validation_failures_are_400() {
    let state = state();

    let (status, Json(body)) = controllers::create_user(
        Extension(state.clone()),
        Json(CreateUserRequest {
            name: Some("Bob".to_string()),
            email: Some("bob-no-at".to_string()),
            password: Some("Secret1".to_string()),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.error,
        "Email should contain the '@' character, as it's likely an email."
    );

    let (status, Json(body)) = controllers::create_user(
        Extension(state),
        Json(CreateUserRequest {
            name: Some("Bob".to_string()),
            email: Some("bob@x.com".to_string()),
            password: Some("lowercase".to_string()),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.error,
        "Password must contain at least one uppercase letter."
    );
}

#[tokio::test]
async fn delete_maps_missing_id_to_400_and_unknown_id_to_404() {
    let state = state();

    let (status, Json(body)) =
        controllers::delete_user(Extension(state.clone()), Json(DeleteUserRequest { user_id: None }))
            .await
            .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "Please provide a valid user id");

    let (status, Json(body)) = controllers::delete_user(
        Extension(state),
        Json(DeleteUserRequest {
            user_id: Some("unknown-id".to_string()),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "User does not exist");
}

#[tokio::test]
async fn second_delete_of_the_same_id_is_404() {
    let state = state();
    let id = create_ann(&state).await;

    let Json(confirmation) = controllers::delete_user(
        Extension(state.clone()),
        Json(DeleteUserRequest {
            user_id: Some(id.clone()),
        }),
    )
    .await
    .expect("first delete should succeed");
    assert_eq!(confirmation.deleted_user_id, id);
    assert_eq!(
        confirmation.message,
        format!("User with ID {} has been deleted", id)
    );

    let (status, _) = controllers::delete_user(
        Extension(state),
        Json(DeleteUserRequest { user_id: Some(id) }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_of_a_single_field_reports_only_that_attribute() {
    let state = state();
    let id = create_ann(&state).await;

    let Json(confirmation) = controllers::update_user(
        Extension(state.clone()),
        Json(UpdateUserRequest {
            user_id: Some(id.clone()),
            name: Some("Annette".to_string()),
            email: None,
            password: None,
        }),
    )
    .await
    .expect("update should succeed");
    assert_eq!(
        confirmation.message,
        format!("User with ID {} has been updated", id)
    );
    assert_eq!(confirmation.updated_attributes.len(), 1);
    assert_eq!(
        confirmation.updated_attributes.get("name"),
        Some(&"Annette".to_string())
    );

    // Omitted fields keep their prior values.
    let Json(record) = controllers::get_user(Extension(state), Path(id))
        .await
        .unwrap();
    assert_eq!(record.name, "Annette");
    assert_eq!(record.email, "ann@x.com");
    assert_eq!(record.password, "Secret1");
}

#[tokio::test]
async fn update_with_invalid_password_is_400() {
    let state = state();
    let id = create_ann(&state).await;

    let (status, Json(body)) = controllers::update_user(
        Extension(state),
        Json(UpdateUserRequest {
            user_id: Some(id),
            name: None,
            email: None,
            password: Some("lowercase".to_string()),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.error,
        "Password must contain at least one uppercase letter."
    );
}

#[tokio::test]
async fn update_with_no_attributes_is_500_with_the_store_message() {
    let state = state();
    let id = create_ann(&state).await;

    let (status, Json(body)) = controllers::update_user(
        Extension(state),
        Json(UpdateUserRequest {
            user_id: Some(id),
            name: None,
            email: None,
            password: None,
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "no attributes to update");
}

#[tokio::test]
async fn request_bodies_use_camel_case_field_names() {
    let req: UpdateUserRequest =
        serde_json::from_str(r#"{"userId":"abc123","name":"Annette"}"#).unwrap();
    assert_eq!(req.user_id.as_deref(), Some("abc123"));
    assert_eq!(req.name.as_deref(), Some("Annette"));
    assert!(req.email.is_none());

    let req: DeleteUserRequest = serde_json::from_str(r#"{"userId":"abc123"}"#).unwrap();
    assert_eq!(req.user_id.as_deref(), Some("abc123"));
}
