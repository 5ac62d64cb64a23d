//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Monetary amount. Exact decimal in memory, a JSON number on the wire.
pub type Money = rust_decimal::Decimal;
