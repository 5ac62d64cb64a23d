//! Data models
//!
//! Shared between the dining client engine and its data feeds / local store.
//! Money fields are `Decimal` in memory and plain JSON numbers on the wire.

pub mod cart;
pub mod location;
pub mod menu_item;
pub mod review;
pub mod ticket;

// Re-exports
pub use cart::*;
pub use location::*;
pub use menu_item::*;
pub use review::*;
pub use ticket::*;
