//! View models
//!
//! Plain data derived from [`Session`](crate::core::Session) state. A front
//! end rebuilds the views it shows when a session event arrives; nothing in
//! here mutates the session.

pub mod cart;
pub mod format;
pub mod locations;
pub mod menu;

pub use cart::{CartBadge, CartLineView, CartPanel, CheckoutPanel};
pub use locations::{LocationCard, LocationList, MapView, RatingView, ReviewView};
pub use menu::{FilterOptions, MenuCard, MenuResults, TagBadge};
