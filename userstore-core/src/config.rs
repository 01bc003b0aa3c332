//! Configuration management
//!
//! All configuration comes from the environment, matching the deployment
//! convention this service replaces: the record table name arrives via
//! `USERS_TABLE`, and local store endpoints via `AWS_ENDPOINT_URL`.

use anyhow::{Context, Result};

/// Service configuration, read once at process start and carried by the
/// context - no ambient globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the record store table holding user records
    pub users_table: String,
    /// Optional store endpoint override (local DynamoDB, integration rigs)
    pub endpoint_url: Option<String>,
    /// Swap the DynamoDB adapter for the in-memory store
    pub in_memory: bool,
}

impl Config {
    /// Load config from the environment
    ///
    /// In-memory mode can be enabled via USERSTORE_IN_MEMORY (for CI and
    /// local development); it does not require a table name.
    pub fn from_env() -> Result<Self> {
        let in_memory = match std::env::var("USERSTORE_IN_MEMORY").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            _ => false,
        };

        let users_table = if in_memory {
            std::env::var("USERS_TABLE").unwrap_or_default()
        } else {
            std::env::var("USERS_TABLE").context("USERS_TABLE must be set")?
        };
        let endpoint_url = std::env::var("AWS_ENDPOINT_URL").ok();

        Ok(Self {
            users_table,
            endpoint_url,
            in_memory,
        })
    }

    /// Config for the in-memory store (tests, local development)
    pub fn in_memory() -> Self {
        Self {
            users_table: String::new(),
            endpoint_url: None,
            in_memory: true,
        }
    }
}
