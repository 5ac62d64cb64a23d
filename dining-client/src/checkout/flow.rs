//! Checkout state machine
//!
//! ```text
//!            select mode (any phase) ──► Idle, ticket cleared
//!
//!  Idle ──checkout, dine-in──► Ticketed            (terminal, pay at cashier)
//!  Idle ──checkout, pickup───► AwaitingPayment ──pay──► Paid  (terminal)
//!
//!  any cart mutation: non-Idle ──► Idle (mode kept)
//! ```
//!
//! Exactly one ticket is issued per attempt that reaches `Ticketed` or
//! `Paid`. Repeating checkout or payment from a terminal phase returns the
//! ticket already issued.

use super::ticket::TicketIssuer;
use crate::cart::{self, Cart};
use shared::models::{OrderMode, Ticket};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Checkout validation failures, shown to the user as a blocking alert
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Your cart is empty.")]
    EmptyCart,

    #[error("Please select Dine In or Pickup first.")]
    NoModeSelected,

    #[error("Payment is not expected while {0}")]
    PaymentNotExpected(CheckoutPhase),
}

/// Where the current checkout attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    /// Dine-in ticket shown
    Ticketed,
    /// Pickup payment form shown
    AwaitingPayment,
    /// Pickup ticket shown
    Paid,
}

impl fmt::Display for CheckoutPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Ticketed => write!(f, "ticketed"),
            Self::AwaitingPayment => write!(f, "awaiting payment"),
            Self::Paid => write!(f, "paid"),
        }
    }
}

/// Card fields from the pickup payment form
///
/// Never validated, stored or transmitted; the payment step is a UI stub.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    pub card_name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("card_name", &self.card_name)
            .field("card_number", &"<redacted>")
            .field("expiry", &"<redacted>")
            .field("cvv", &"<redacted>")
            .finish()
    }
}

/// Order mode + checkout phase + the ticket issued for this attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutFlow {
    mode: Option<OrderMode>,
    phase: CheckoutPhase,
    ticket: Option<Ticket>,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Option<OrderMode> {
        self.mode
    }

    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    /// Ticket issued in the current attempt (Ticketed / Paid only)
    pub fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    /// Choose dine-in or pickup; any ticket / payment panel goes back to idle
    pub fn select_mode(&mut self, mode: OrderMode) {
        debug!(%mode, previous_phase = %self.phase, "Order mode selected");
        self.mode = Some(mode);
        self.reset();
    }

    /// Back to `Idle`, keeping the selected mode
    ///
    /// Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        if self.phase == CheckoutPhase::Idle && self.ticket.is_none() {
            return false;
        }
        self.phase = CheckoutPhase::Idle;
        self.ticket = None;
        true
    }

    /// "Proceed to checkout"
    ///
    /// Rejections leave the state untouched.
    pub fn proceed(
        &mut self,
        cart: &Cart,
        issuer: &mut dyn TicketIssuer,
    ) -> Result<CheckoutPhase, CheckoutError> {
        if cart.is_empty() {
            warn!("Checkout rejected: empty cart");
            return Err(CheckoutError::EmptyCart);
        }
        let Some(mode) = self.mode else {
            warn!("Checkout rejected: no order mode selected");
            return Err(CheckoutError::NoModeSelected);
        };

        match (self.phase, mode) {
            (CheckoutPhase::Idle, OrderMode::DineIn) => {
                let ticket = issuer.issue(mode, cart::total(cart));
                info!(code = %ticket.code, total = %ticket.total, "Dine-in ticket issued");
                self.ticket = Some(ticket);
                self.phase = CheckoutPhase::Ticketed;
            }
            (CheckoutPhase::Idle, OrderMode::Pickup) => {
                debug!("Pickup checkout awaiting payment");
                self.phase = CheckoutPhase::AwaitingPayment;
            }
            // Same attempt: keep the ticket or the open form
            (phase, _) => debug!(%phase, "Checkout repeated, state kept"),
        }
        Ok(self.phase)
    }

    /// "Pay & get pickup ticket"
    ///
    /// Issues the ticket on the first submission; later submissions return it
    /// unchanged.
    pub fn submit_payment(
        &mut self,
        payment: &PaymentDetails,
        cart: &Cart,
        issuer: &mut dyn TicketIssuer,
    ) -> Result<&Ticket, CheckoutError> {
        match self.phase {
            CheckoutPhase::AwaitingPayment => {
                let mode = self.mode.unwrap_or(OrderMode::Pickup);
                let ticket = issuer.issue(mode, cart::total(cart));
                info!(
                    code = %ticket.code,
                    total = %ticket.total,
                    card_name = %payment.card_name,
                    "Pickup payment accepted (stub), ticket issued"
                );
                self.phase = CheckoutPhase::Paid;
                Ok(self.ticket.insert(ticket))
            }
            CheckoutPhase::Paid => match self.ticket.as_ref() {
                Some(ticket) => {
                    debug!(code = %ticket.code, "Payment re-submitted, returning issued ticket");
                    Ok(ticket)
                }
                None => Err(CheckoutError::PaymentNotExpected(self.phase)),
            },
            phase => {
                warn!(%phase, "Payment submitted outside the payment step");
                Err(CheckoutError::PaymentNotExpected(phase))
            }
        }
    }
}
