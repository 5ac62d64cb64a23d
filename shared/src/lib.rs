//! Shared types for the dining client
//!
//! Wire-level models read from the data feeds (menu items, locations) and
//! written to the local blob store (cart lines, location reviews), plus the
//! small utility types used across the workspace.

pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
pub use types::{Money, Timestamp};
