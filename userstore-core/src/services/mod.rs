//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions.

pub mod users;

pub use users::{DeletedUser, UpdatedUser, UserService};
