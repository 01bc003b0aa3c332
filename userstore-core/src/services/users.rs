//! User service - validation and record store orchestration

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{UserPatch, UserRecord};
use crate::ports::RecordStore;

// Validation and lookup messages, kept byte-for-byte stable: callers match
// on them.
pub const ERR_EMAIL_FORMAT: &str =
    "Email should contain the '@' character, as it's likely an email.";
pub const ERR_PASSWORD_POLICY: &str = "Password must contain at least one uppercase letter.";
pub const ERR_INCOMPLETE_USER: &str =
    "Please provide complete user information (name, email, and password).";
pub const ERR_ID_CONFLICT: &str = "User with this ID already exists.";
pub const ERR_MISSING_USER_ID: &str = "Please provide a valid user id";
pub const ERR_USER_NOT_FOUND: &str = "User does not exist";

/// User service: validates inbound field data and translates it into point
/// operations against the record store.
///
/// The service holds no state of its own. Every request is a fresh
/// validation pass followed by at most two store round trips; check-then-act
/// sequences are deliberately not atomic (see create and delete).
pub struct UserService {
    store: Arc<dyn RecordStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Look up a record by key. No side effects.
    pub async fn get_user(&self, user_id: &str) -> Result<UserRecord> {
        match self.store.get_item(user_id).await? {
            Some(record) => Ok(record),
            None => Err(Error::not_found(ERR_USER_NOT_FOUND)),
        }
    }

    /// Create a record from the supplied fields.
    ///
    /// Validation runs in fixed order and short-circuits on the first
    /// violation. An absent field validates as the empty string, so a
    /// request with no email at all reports the '@' error rather than the
    /// missing-field error; the presence check runs last.
    pub async fn create_user(
        &self,
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<UserRecord> {
        let user_id = UserRecord::generate_id();

        if !UserRecord::email_is_plausible(email.as_deref().unwrap_or_default()) {
            return Err(Error::validation(ERR_EMAIL_FORMAT));
        }
        if !UserRecord::password_meets_policy(password.as_deref().unwrap_or_default()) {
            return Err(Error::validation(ERR_PASSWORD_POLICY));
        }
        let (name, email, password) = match (name, email, password) {
            (Some(name), Some(email), Some(password))
                if !name.is_empty() && !email.is_empty() && !password.is_empty() =>
            {
                (name, email, password)
            }
            _ => return Err(Error::validation(ERR_INCOMPLETE_USER)),
        };

        // The generator is collision-resistant; this existence check guards
        // against generator failure. On a hit the request fails outright,
        // it does not regenerate.
        if self.store.get_item(&user_id).await?.is_some() {
            return Err(Error::conflict(ERR_ID_CONFLICT));
        }

        let record = UserRecord::new(user_id, name, email, password);
        self.store.put_item(&record).await?;
        Ok(record)
    }

    /// Delete the record at the key, confirming it exists first.
    ///
    /// The existence pre-check makes a second delete of the same id surface
    /// as NotFound rather than a silent success, even though the delete
    /// itself is idempotent at the store level.
    pub async fn delete_user(&self, user_id: Option<String>) -> Result<DeletedUser> {
        let user_id = match user_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(Error::validation(ERR_MISSING_USER_ID)),
        };

        if self.store.get_item(&user_id).await?.is_none() {
            return Err(Error::not_found(ERR_USER_NOT_FOUND));
        }
        self.store.delete_item(&user_id).await?;

        Ok(DeletedUser {
            message: format!("User with ID {} has been deleted", user_id),
            deleted_user_id: user_id,
        })
    }

    /// Apply a partial update to the record at the key.
    ///
    /// A field is validated only when it is supplied; an absent field is
    /// neither validated nor written. There is no existence pre-check:
    /// unlike delete, an update addressed at a nonexistent key is not
    /// rejected and takes the store's upsert semantics.
    pub async fn update_user(
        &self,
        user_id: Option<String>,
        patch: UserPatch,
    ) -> Result<UpdatedUser> {
        let user_id = match user_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(Error::validation(ERR_MISSING_USER_ID)),
        };

        if let Some(email) = &patch.email {
            if !UserRecord::email_is_plausible(email) {
                return Err(Error::validation(ERR_EMAIL_FORMAT));
            }
        }
        if let Some(password) = &patch.password {
            if !UserRecord::password_meets_policy(password) {
                return Err(Error::validation(ERR_PASSWORD_POLICY));
            }
        }

        let updated_attributes = self.store.update_item(&user_id, &patch).await?;

        Ok(UpdatedUser {
            message: format!("User with ID {} has been updated", user_id),
            updated_attributes,
        })
    }
}

/// Confirmation of a completed delete
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedUser {
    pub message: String,
    pub deleted_user_id: String,
}

/// Confirmation of a completed update
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedUser {
    pub message: String,
    /// Attribute values the store reported as newly written
    pub updated_attributes: HashMap<String, String>,
}
