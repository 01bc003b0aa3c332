//! Userstore server binary
//!
//! Environment:
//! - USERS_TABLE         record store table name (required unless in-memory)
//! - AWS_ENDPOINT_URL    optional store endpoint override
//! - USERSTORE_IN_MEMORY run against the in-memory store
//! - BIND_ADDR           listen address, defaults to 0.0.0.0:3000

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use userstore_core::config::Config;
use userstore_core::UserStoreContext;
use userstore_server::{routes, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("load configuration")?;
    if config.in_memory {
        tracing::warn!("using the in-memory record store; data will not survive a restart");
    } else {
        tracing::info!(table = %config.users_table, "using the DynamoDB record store");
    }

    let context = UserStoreContext::new(config)
        .await
        .context("build service context")?;
    let app = routes::router(AppState::new(context));

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let addr: SocketAddr = bind.parse().context("parse BIND_ADDR")?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("bind tcp listener")?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server shutdown")?;

    Ok(())
}
