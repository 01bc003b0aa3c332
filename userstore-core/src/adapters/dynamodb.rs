//! DynamoDB record store adapter
//!
//! One item per record, string attributes only, keyed by the `userId`
//! partition key. Update requests ask for `UPDATED_NEW` return values so the
//! service can report exactly what was written.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use crate::domain::{UserPatch, UserRecord};
use crate::ports::{RecordStore, StoreError};

/// Partition key attribute of the users table
const KEY_ATTR: &str = "userId";

/// DynamoDB-backed record store
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

/// Read a required string attribute from an item.
fn attr_s(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String, StoreError> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| {
            StoreError::new(format!("stored item is missing string attribute '{}'", name))
        })
}

/// Build the `SET` update expression for a patch.
///
/// `name` is a DynamoDB reserved word, so it goes through an expression
/// attribute name alias; `email` and `password` are addressed directly.
fn build_update_expression(
    patch: &UserPatch,
) -> (
    String,
    Option<HashMap<String, String>>,
    HashMap<String, AttributeValue>,
) {
    let mut clauses = Vec::new();
    let mut names: HashMap<String, String> = HashMap::new();
    let mut values: HashMap<String, AttributeValue> = HashMap::new();

    if let Some(name) = &patch.name {
        clauses.push("#n = :n");
        names.insert("#n".to_string(), "name".to_string());
        values.insert(":n".to_string(), AttributeValue::S(name.clone()));
    }
    if let Some(email) = &patch.email {
        clauses.push("email = :e");
        values.insert(":e".to_string(), AttributeValue::S(email.clone()));
    }
    if let Some(password) = &patch.password {
        clauses.push("password = :p");
        values.insert(":p".to_string(), AttributeValue::S(password.clone()));
    }

    let expression = format!("SET {}", clauses.join(", "));
    let names = if names.is_empty() { None } else { Some(names) };
    (expression, names, values)
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn get_item(&self, key: &str) -> Result<Option<UserRecord>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTR, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::new(DisplayErrorContext(e).to_string()))?;

        let Some(item) = output.item else {
            return Ok(None);
        };
        Ok(Some(UserRecord {
            user_id: attr_s(&item, KEY_ATTR)?,
            name: attr_s(&item, "name")?,
            email: attr_s(&item, "email")?,
            password: attr_s(&item, "password")?,
        }))
    }

    async fn put_item(&self, record: &UserRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(KEY_ATTR, AttributeValue::S(record.user_id.clone()))
            .item("name", AttributeValue::S(record.name.clone()))
            .item("email", AttributeValue::S(record.email.clone()))
            .item("password", AttributeValue::S(record.password.clone()))
            .send()
            .await
            .map_err(|e| StoreError::new(DisplayErrorContext(e).to_string()))?;
        Ok(())
    }

    async fn update_item(
        &self,
        key: &str,
        patch: &UserPatch,
    ) -> Result<HashMap<String, String>, StoreError> {
        if patch.is_empty() {
            // An empty SET expression is rejected by DynamoDB anyway; fail
            // before the round trip with the same surface behavior.
            return Err(StoreError::new("no attributes to update"));
        }
        let (expression, names, values) = build_update_expression(patch);

        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY_ATTR, AttributeValue::S(key.to_string()))
            .update_expression(expression)
            .set_expression_attribute_names(names)
            .set_expression_attribute_values(Some(values))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| StoreError::new(DisplayErrorContext(e).to_string()))?;

        let mut written = HashMap::new();
        for (attr, value) in output.attributes.unwrap_or_default() {
            written.insert(attr, value.as_s().map(|s| s.clone()).unwrap_or_default());
        }
        Ok(written)
    }

    async fn delete_item(&self, key: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY_ATTR, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| StoreError::new(DisplayErrorContext(e).to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_expression_aliases_the_name_attribute() {
        let patch = UserPatch {
            name: Some("Ann".to_string()),
            email: None,
            password: None,
        };
        let (expression, names, values) = build_update_expression(&patch);
        assert_eq!(expression, "SET #n = :n");
        assert_eq!(names.unwrap().get("#n"), Some(&"name".to_string()));
        assert_eq!(values.get(":n"), Some(&AttributeValue::S("Ann".to_string())));
    }

    #[test]
    fn test_update_expression_skips_alias_map_without_name() {
        let patch = UserPatch {
            name: None,
            email: Some("ann@x.com".to_string()),
            password: None,
        };
        let (expression, names, values) = build_update_expression(&patch);
        assert_eq!(expression, "SET email = :e");
        assert!(names.is_none());
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_update_expression_joins_all_supplied_fields() {
        let patch = UserPatch {
            name: Some("Ann".to_string()),
            email: Some("ann@x.com".to_string()),
            password: Some("Secret1".to_string()),
        };
        let (expression, _, values) = build_update_expression(&patch);
        assert_eq!(expression, "SET #n = :n, email = :e, password = :p");
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_missing_attribute_reads_as_error() {
        let mut item = HashMap::new();
        item.insert(
            KEY_ATTR.to_string(),
            AttributeValue::S("abc123".to_string()),
        );
        assert_eq!(attr_s(&item, KEY_ATTR).unwrap(), "abc123");
        assert!(attr_s(&item, "email").is_err());
    }
}
