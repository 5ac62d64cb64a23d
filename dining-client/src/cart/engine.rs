//! Cart engine
//!
//! Pure functions over [`Cart`]. Each mutation takes the cart by value and
//! returns the updated cart; persisting it and notifying views is the
//! caller's job (see `core::session`).

use super::money::validate_price;
use crate::storage::{BlobStore, CART_KEY, StorageResult, load_or_default, save_json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::CartLine;
use tracing::debug;

/// Ordered cart lines, insertion order = display order
///
/// Invariants: every line has `qty > 0` and an accepted price, and no two
/// lines share a name. All three are re-established when a cart is built from raw lines, so a blob
/// written by an older client cannot break them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn get(&self, name: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.name == name)
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(raw: Vec<CartLine>) -> Self {
        let mut lines: Vec<CartLine> = Vec::with_capacity(raw.len());
        let valid = raw
            .into_iter()
            .filter(|l| l.qty > 0 && validate_price(l.price).is_ok());
        for line in valid {
            match lines.iter_mut().find(|l| l.name == line.name) {
                // First price wins, quantities merge
                Some(existing) => existing.qty = existing.qty.saturating_add(line.qty),
                None => lines.push(line),
            }
        }
        Self { lines }
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

/// Read the stored cart; missing or unreadable blobs yield an empty cart
pub fn load<S: BlobStore + ?Sized>(store: &S) -> Cart {
    load_or_default(store, CART_KEY)
}

/// Persist `cart` under the cart key
pub fn save<S: BlobStore + ?Sized>(store: &S, cart: &Cart) -> StorageResult<()> {
    save_json(store, CART_KEY, cart.lines())
}

/// Add one unit of `name`
///
/// An existing line gets `qty + 1` and keeps its original price; otherwise a
/// new line `{name, price, qty: 1}` is appended.
pub fn add(mut cart: Cart, name: &str, price: Decimal) -> Cart {
    match cart.lines.iter_mut().find(|l| l.name == name) {
        Some(line) => {
            line.qty = line.qty.saturating_add(1);
            debug!(name, qty = line.qty, "Cart line incremented");
        }
        None => {
            cart.lines.push(CartLine::new(name, price));
            debug!(name, %price, "Cart line added");
        }
    }
    cart
}

/// Add `delta` to the quantity of `name`, dropping the line at zero or below
///
/// Unknown names leave the cart untouched.
pub fn adjust_qty(mut cart: Cart, name: &str, delta: i64) -> Cart {
    let Some(idx) = cart.position(name) else {
        return cart;
    };

    let next = i64::from(cart.lines[idx].qty).saturating_add(delta);
    if next <= 0 {
        cart.lines.remove(idx);
        debug!(name, "Cart line removed by quantity change");
    } else {
        cart.lines[idx].qty = u32::try_from(next).unwrap_or(u32::MAX);
    }
    cart
}

/// Remove every line named `name`
pub fn remove(mut cart: Cart, name: &str) -> Cart {
    cart.lines.retain(|l| l.name != name);
    cart
}

/// Empty cart
pub fn clear() -> Cart {
    Cart::new()
}

/// Sum of quantities (the badge number)
pub fn count(cart: &Cart) -> u64 {
    cart.lines.iter().map(|l| u64::from(l.qty)).sum()
}

/// Sum of qty × price, unrounded
pub fn total(cart: &Cart) -> Decimal {
    cart.lines.iter().map(CartLine::line_total).sum()
}
