//! Order Mode & Ticket Model

use crate::types::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the customer takes the order
///
/// "No mode selected" is `Option<OrderMode>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderMode {
    /// 堂食 - pay at the cashier
    DineIn,
    /// 自取 - pay online, collect at the counter
    Pickup,
}

impl OrderMode {
    /// First character of every ticket code issued in this mode
    pub fn ticket_prefix(&self) -> char {
        match self {
            Self::DineIn => 'D',
            Self::Pickup => 'P',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DineIn => "Dine In",
            Self::Pickup => "Pickup",
        }
    }
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DineIn => write!(f, "dine-in"),
            Self::Pickup => write!(f, "pickup"),
        }
    }
}

impl std::str::FromStr for OrderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dine-in" | "dinein" | "dine_in" => Ok(Self::DineIn),
            "pickup" => Ok(Self::Pickup),
            other => Err(format!("unknown order mode: {other}")),
        }
    }
}

/// Reference code handed to the customer to claim an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("dine-in".parse::<OrderMode>().unwrap(), OrderMode::DineIn);
        assert_eq!("DineIn".parse::<OrderMode>().unwrap(), OrderMode::DineIn);
        assert_eq!(" pickup ".parse::<OrderMode>().unwrap(), OrderMode::Pickup);
        assert!("delivery".parse::<OrderMode>().is_err());
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(OrderMode::DineIn.ticket_prefix(), 'D');
        assert_eq!(OrderMode::Pickup.ticket_prefix(), 'P');
    }
}
