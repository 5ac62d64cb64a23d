//! Ticket issuance
//!
//! Code layout: `<prefix><4-digit timestamp suffix><2-digit random>`, e.g.
//! `D483127`. The suffix is the last four decimal digits of the Unix time in
//! milliseconds; the random part is drawn from 10..=99.
//!
//! Codes are not guaranteed unique: two tickets issued in the same
//! millisecond window share a suffix and then collide one time in ninety.

use rand::Rng;
use rust_decimal::Decimal;
use shared::models::{OrderMode, Ticket};
use shared::types::Timestamp;
use shared::util::now_millis;

/// Source of ticket codes
pub trait TicketIssuer {
    fn issue(&mut self, mode: OrderMode, total: Decimal) -> Ticket;
}

/// Build a ticket code from its parts
pub fn ticket_code(mode: OrderMode, now_ms: Timestamp, random: u8) -> String {
    format!(
        "{}{:04}{:02}",
        mode.ticket_prefix(),
        now_ms.rem_euclid(10_000),
        random
    )
}

/// Wall-clock + thread RNG issuer used by the running client
#[derive(Debug, Default)]
pub struct ClockTicketIssuer;

impl TicketIssuer for ClockTicketIssuer {
    fn issue(&mut self, mode: OrderMode, total: Decimal) -> Ticket {
        let random = rand::thread_rng().gen_range(10..=99);
        Ticket {
            code: ticket_code(mode, now_millis(), random),
            total,
        }
    }
}
