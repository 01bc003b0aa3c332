//! Userstore Core - business logic for the user record service
//!
//! This crate implements the core domain logic following hexagonal
//! architecture:
//!
//! - **domain**: Core business entities (UserRecord, UserPatch) and errors
//! - **ports**: Trait definitions for external dependencies (RecordStore)
//! - **services**: Business logic orchestration (UserService)
//! - **adapters**: Concrete implementations (DynamoDB, in-memory)
//!
//! Passwords are stored and echoed back in plain text for parity with the
//! service this replaces; hashing is an explicit non-goal of the current
//! contract.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::sync::Arc;

use anyhow::Result;
use aws_sdk_dynamodb::Client;

use adapters::dynamodb::DynamoDbStore;
use adapters::memory::MemoryStore;
use config::Config;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{UserPatch, UserRecord};
pub use ports::{RecordStore, StoreError};
pub use services::{DeletedUser, UpdatedUser, UserService};

/// Main context for userstore operations
///
/// This is the primary entry point: it holds the configuration, the record
/// store handle, and the user service. It is constructed once at process
/// start and shared by reference with request handlers.
pub struct UserStoreContext {
    pub config: Config,
    pub store: Arc<dyn RecordStore>,
    pub user_service: UserService,
}

impl UserStoreContext {
    /// Create a context with the store adapter selected by config
    pub async fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn RecordStore> = if config.in_memory {
            Arc::new(MemoryStore::new())
        } else {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
            if let Some(endpoint) = &config.endpoint_url {
                loader = loader.endpoint_url(endpoint);
            }
            let sdk_config = loader.load().await;
            let client = Client::new(&sdk_config);
            Arc::new(DynamoDbStore::new(client, config.users_table.clone()))
        };

        Ok(Self::with_store(config, store))
    }

    /// Create a context over an explicit store (tests, custom adapters)
    pub fn with_store(config: Config, store: Arc<dyn RecordStore>) -> Self {
        let user_service = UserService::new(Arc::clone(&store));
        Self {
            config,
            store,
            user_service,
        }
    }
}
