//! User record domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user record.
///
/// Field names follow the service's wire format (camelCase). The password is
/// held verbatim: hashing is out of scope for this service, and the read path
/// echoes the stored value back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserRecord {
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Generate a fresh record key: 32 lowercase hex characters (a v4 UUID
    /// without hyphens).
    pub fn generate_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    /// Syntactic email check: at least one `@` somewhere. Deliberately not
    /// RFC 5322.
    pub fn email_is_plausible(email: &str) -> bool {
        email.contains('@')
    }

    /// Password policy: at least one uppercase ASCII letter.
    pub fn password_meets_policy(password: &str) -> bool {
        password.chars().any(|c| c.is_ascii_uppercase())
    }
}

/// A partial update to a stored record.
///
/// A `None` field is neither validated nor written; the stored value stays
/// at its prior state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }

    /// Attribute name/value pairs for the fields actually supplied, in the
    /// store's attribute order.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        let mut attrs = Vec::new();
        if let Some(name) = &self.name {
            attrs.push(("name", name.as_str()));
        }
        if let Some(email) = &self.email {
            attrs.push(("email", email.as_str()));
        }
        if let Some(password) = &self.password {
            attrs.push(("password", password.as_str()));
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_32_hex_chars() {
        let id = UserRecord::generate_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_email_plausibility() {
        assert!(UserRecord::email_is_plausible("ann@x.com"));
        assert!(UserRecord::email_is_plausible("@"));
        assert!(!UserRecord::email_is_plausible("bob-no-at"));
        assert!(!UserRecord::email_is_plausible(""));
    }

    #[test]
    fn test_password_policy() {
        assert!(UserRecord::password_meets_policy("Secret1"));
        assert!(!UserRecord::password_meets_policy("lowercase"));
        // Non-ASCII uppercase does not satisfy the policy
        assert!(!UserRecord::password_meets_policy("Σecret"));
        assert!(!UserRecord::password_meets_policy(""));
    }

    #[test]
    fn test_patch_attributes_only_include_supplied_fields() {
        let patch = UserPatch {
            name: Some("Ann".to_string()),
            email: None,
            password: Some("Secret1".to_string()),
        };
        assert!(!patch.is_empty());
        assert_eq!(
            patch.attributes(),
            vec![("name", "Ann"), ("password", "Secret1")]
        );

        assert!(UserPatch::default().is_empty());
        assert!(UserPatch::default().attributes().is_empty());
    }

    #[test]
    fn test_record_wire_format_is_camel_case() {
        let record = UserRecord::new("abc123", "Ann", "ann@x.com", "Secret1");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userId"], "abc123");
        assert_eq!(json["name"], "Ann");
    }
}
