//! In-memory record store for tests and local development
//!
//! Mirrors the DynamoDB adapter's observable semantics: items are attribute
//! maps that always carry their own key attribute, updates upsert, an empty
//! patch is a store error, and an item that is missing one of the record's
//! attributes reads back as an error rather than a partial record.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{UserPatch, UserRecord};
use crate::ports::{RecordStore, StoreError};

const KEY_ATTR: &str = "userId";

/// In-memory record store
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn attr(item: &HashMap<String, String>, name: &str) -> Result<String, StoreError> {
    item.get(name).cloned().ok_or_else(|| {
        StoreError::new(format!("stored item is missing string attribute '{}'", name))
    })
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<UserRecord>, StoreError> {
        let items = self.items.lock().unwrap();
        let Some(item) = items.get(key) else {
            return Ok(None);
        };
        Ok(Some(UserRecord {
            user_id: attr(item, KEY_ATTR)?,
            name: attr(item, "name")?,
            email: attr(item, "email")?,
            password: attr(item, "password")?,
        }))
    }

    async fn put_item(&self, record: &UserRecord) -> Result<(), StoreError> {
        let item = HashMap::from([
            (KEY_ATTR.to_string(), record.user_id.clone()),
            ("name".to_string(), record.name.clone()),
            ("email".to_string(), record.email.clone()),
            ("password".to_string(), record.password.clone()),
        ]);
        self.items
            .lock()
            .unwrap()
            .insert(record.user_id.clone(), item);
        Ok(())
    }

    async fn update_item(
        &self,
        key: &str,
        patch: &UserPatch,
    ) -> Result<HashMap<String, String>, StoreError> {
        if patch.is_empty() {
            return Err(StoreError::new("no attributes to update"));
        }

        let mut items = self.items.lock().unwrap();
        let item = items.entry(key.to_string()).or_default();
        // The key attribute is part of the item, like the real store.
        item.insert(KEY_ATTR.to_string(), key.to_string());

        let mut written = HashMap::new();
        for (name, value) in patch.attributes() {
            item.insert(name.to_string(), value.to_string());
            written.insert(name.to_string(), value.to_string());
        }
        Ok(written)
    }

    async fn delete_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.lock().unwrap().remove(key);
        Ok(())
    }
}
