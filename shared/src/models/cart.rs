//! Cart Model

use crate::types::Money;
use serde::{Deserialize, Serialize};

/// One distinct item entry in the cart
///
/// `name` is the identity key: a cart holds at most one line per name.
/// `qty` is always positive once a line is part of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Item name (unique within the cart)
    pub name: String,
    /// Unit price, fixed when the line is first added
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Money,
    /// Quantity
    pub qty: u32,
}

impl CartLine {
    /// New line with quantity 1
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
            qty: 1,
        }
    }

    /// qty × price
    pub fn line_total(&self) -> Money {
        self.price * Money::from(self.qty)
    }
}
