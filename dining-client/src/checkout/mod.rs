//! Order checkout
//!
//! - `flow`: the mode × phase state machine
//! - `ticket`: ticket code generation

pub mod flow;
pub mod ticket;

pub use flow::{CheckoutError, CheckoutFlow, CheckoutPhase, PaymentDetails};
pub use ticket::{ClockTicketIssuer, TicketIssuer, ticket_code};
