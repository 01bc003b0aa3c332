//! Record store port - keyed single-table storage abstraction

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::result::Error as DomainError;
use crate::domain::{UserPatch, UserRecord};

/// Failure raised by a record store adapter.
///
/// The service does not classify store failures further; the message is
/// surfaced to the caller as-is.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::Store(err.message)
    }
}

/// Keyed record store abstraction
///
/// The store maps a string key (the record's `userId`) to an item of named
/// string attributes. Adapters provide the actual storage access. Each call
/// is a single round trip: no retry or timeout policy lives behind this
/// trait; that is the collaborator's contract.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the record at the key.
    ///
    /// A stored item missing one of the record's attributes is an error,
    /// never a partial record.
    async fn get_item(&self, key: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Write a full record, overwriting any existing item at its key.
    async fn put_item(&self, record: &UserRecord) -> Result<(), StoreError>;

    /// Overwrite only the attributes supplied in the patch.
    ///
    /// Upsert semantics: an absent key is not rejected. Returns the
    /// attribute values the store reports as newly written.
    async fn update_item(
        &self,
        key: &str,
        patch: &UserPatch,
    ) -> Result<HashMap<String, String>, StoreError>;

    /// Delete the item at the key. Deleting an absent key is a no-op at
    /// this level; existence policy belongs to the caller.
    async fn delete_item(&self, key: &str) -> Result<(), StoreError>;
}
