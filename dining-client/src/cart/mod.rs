//! Shopping cart
//!
//! - `engine`: pure cart mutations and aggregates
//! - `money`: decimal parsing / formatting helpers

pub mod engine;
pub mod money;

pub use engine::{Cart, add, adjust_qty, clear, count, load, remove, save, total};
pub use money::{PriceError, format_money, parse_price};
