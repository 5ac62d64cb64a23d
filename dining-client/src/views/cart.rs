//! Cart panel, badge and checkout panel view models

use crate::cart::format_money;
use crate::checkout::CheckoutPhase;
use crate::core::Session;
use shared::models::OrderMode;

pub const EMPTY_CART: &str = "Your cart is empty. Add some items from the menu.";
pub const EMPTY_CART_HINT: &str = "Select items to see dine-in or pickup options.";
pub const CHECKOUT_HINT: &str = "Choose Dine In or Pickup above, then click Proceed to checkout.";
pub const DINE_IN_NOTE: &str =
    "Show this ticket number at the cashier to complete payment and receive your order.";
pub const PAYMENT_PROMPT: &str = "Enter your card details to pay online and receive a pickup ticket.";
pub const PICKUP_NOTE: &str = "Show this ticket at the pickup counter to receive your order.";

/// Navbar item count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartBadge {
    pub count: u64,
}

impl CartBadge {
    pub fn from_session(session: &Session) -> Self {
        Self {
            count: session.cart_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub name: String,
    /// `$2.50 each`
    pub unit_price: String,
    pub qty: u32,
    pub line_total: String,
}

/// What the checkout area under the cart shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutPanel {
    EmptyCart,
    Instructions { mode: Option<OrderMode> },
    DineInTicket { code: String, total: String },
    PickupPayment { total: String },
    PickupTicket { code: String, total: String },
}

impl CheckoutPanel {
    pub fn from_session(session: &Session) -> Self {
        if session.cart().is_empty() {
            return Self::EmptyCart;
        }
        let flow = session.checkout_flow();
        let total = format_money(session.cart_total());
        match (flow.phase(), flow.ticket()) {
            (CheckoutPhase::Ticketed, Some(ticket)) => Self::DineInTicket {
                code: ticket.code.clone(),
                total: format_money(ticket.total),
            },
            (CheckoutPhase::Paid, Some(ticket)) => Self::PickupTicket {
                code: ticket.code.clone(),
                total: format_money(ticket.total),
            },
            (CheckoutPhase::AwaitingPayment, _) => Self::PickupPayment { total },
            _ => Self::Instructions { mode: flow.mode() },
        }
    }

    /// Explanatory text under the panel
    pub fn message(&self) -> &'static str {
        match self {
            Self::EmptyCart => EMPTY_CART_HINT,
            Self::Instructions { .. } => CHECKOUT_HINT,
            Self::DineInTicket { .. } => DINE_IN_NOTE,
            Self::PickupPayment { .. } => PAYMENT_PROMPT,
            Self::PickupTicket { .. } => PICKUP_NOTE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanel {
    pub lines: Vec<CartLineView>,
    pub item_count: u64,
    pub total: String,
    pub checkout: CheckoutPanel,
}

impl CartPanel {
    pub fn from_session(session: &Session) -> Self {
        let lines = session
            .cart()
            .lines()
            .iter()
            .map(|line| CartLineView {
                name: line.name.clone(),
                unit_price: format!("{} each", format_money(line.price)),
                qty: line.qty,
                line_total: format_money(line.line_total()),
            })
            .collect();

        Self {
            lines,
            item_count: session.cart_count(),
            total: format_money(session.cart_total()),
            checkout: CheckoutPanel::from_session(session),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::PaymentDetails;
    use rust_decimal::Decimal;

    #[test]
    fn test_empty_cart_panel() {
        let session = Session::in_memory();
        let panel = CartPanel::from_session(&session);

        assert!(panel.is_empty());
        assert_eq!(panel.total, "$0.00");
        assert_eq!(panel.checkout, CheckoutPanel::EmptyCart);
        assert_eq!(panel.checkout.message(), EMPTY_CART_HINT);
        assert_eq!(CartBadge::from_session(&session).count, 0);
    }

    #[test]
    fn test_lines_and_totals() {
        let mut session = Session::in_memory();
        session.add_to_cart("Coffee", Decimal::new(250, 2)).unwrap();
        session.add_to_cart("Coffee", Decimal::new(250, 2)).unwrap();
        session.add_to_cart("Muffin", Decimal::new(1999, 3)).unwrap();

        let panel = CartPanel::from_session(&session);

        assert_eq!(panel.lines[0].unit_price, "$2.50 each");
        assert_eq!(panel.lines[0].line_total, "$5.00");
        assert_eq!(panel.lines[1].line_total, "$2.00");
        assert_eq!(panel.item_count, 3);
        assert_eq!(panel.total, "$7.00");
        assert_eq!(
            panel.checkout,
            CheckoutPanel::Instructions { mode: None }
        );
    }

    #[test]
    fn test_pickup_panels() {
        let mut session = Session::in_memory();
        session.add_to_cart("Wrap", Decimal::new(650, 2)).unwrap();
        session.select_mode(OrderMode::Pickup);
        session.proceed_to_checkout().unwrap();

        assert_eq!(
            CheckoutPanel::from_session(&session),
            CheckoutPanel::PickupPayment {
                total: "$6.50".into()
            }
        );

        let ticket = session.submit_payment(&PaymentDetails::default()).unwrap();
        assert_eq!(
            CheckoutPanel::from_session(&session),
            CheckoutPanel::PickupTicket {
                code: ticket.code,
                total: "$6.50".into()
            }
        );
    }
}
