//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - DynamoDB for the RecordStore port
//! - An in-memory store mirroring the same semantics, for tests and
//!   local development

pub mod dynamodb;
pub mod memory;
