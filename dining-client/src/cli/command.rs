//! Shell command parsing

use crate::checkout::PaymentDetails;
use crate::menu::Selection;
use shared::models::OrderMode;
use std::str::FromStr;
use thiserror::Error;

/// Which menu criterion a `filter` command sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Location,
    Meal,
    Tag,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Menu,
    Filter(FilterField, Selection),
    Search(String),
    /// Price kept as typed; parsed when the item is added
    Add { price: String, name: String },
    Increment(String),
    Decrement(String),
    Remove(String),
    Clear,
    Cart,
    Mode(OrderMode),
    Checkout,
    Pay(PaymentDetails),
    Locations,
    Campus(Selection),
    Focus(String),
    Review {
        location_id: String,
        rating: i64,
        text: String,
        name: String,
    },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
Menu
  menu                              show menu results
  filter location|meal|tag <value>  set a filter (`all` clears it)
  search <text>                     free-text search (empty clears it)
Cart
  add <price> <name>                add one item
  inc <name> | dec <name>           change quantity
  rm <name>                         remove a line
  clear                             empty the cart
  cart                              show the cart
Checkout
  mode dine-in|pickup               choose order mode
  checkout                          proceed to checkout
  pay <name>|<number>|<expiry>|<cvv>  pay for a pickup order
Locations
  locations                         show location cards
  campus <value>                    campus filter (`all` clears it)
  focus <id>                        show a location on the map
  review <id> <rating> <text> [| <name>]  post a review
  help | quit";

/// Split off the first word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (s, ""),
    }
}

fn required(rest: &str, usage: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::Usage(usage))
    } else {
        Ok(rest.to_string())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = split_word(line);
        let cmd = match word.to_ascii_lowercase().as_str() {
            "menu" => Self::Menu,
            "filter" => {
                const USAGE: &str = "filter location|meal|tag <value>";
                let (field, value) = split_word(rest);
                let field = match field.to_ascii_lowercase().as_str() {
                    "location" => FilterField::Location,
                    "meal" => FilterField::Meal,
                    "tag" => FilterField::Tag,
                    _ => return Err(CommandError::Usage(USAGE)),
                };
                Self::Filter(field, Selection::from(value))
            }
            "search" => Self::Search(rest.to_string()),
            "add" => {
                const USAGE: &str = "add <price> <name>";
                let (price, name) = split_word(rest);
                if price.is_empty() || name.is_empty() {
                    return Err(CommandError::Usage(USAGE));
                }
                Self::Add {
                    price: price.to_string(),
                    name: name.to_string(),
                }
            }
            "inc" => Self::Increment(required(rest, "inc <name>")?),
            "dec" => Self::Decrement(required(rest, "dec <name>")?),
            "rm" | "remove" => Self::Remove(required(rest, "rm <name>")?),
            "clear" => Self::Clear,
            "cart" => Self::Cart,
            "mode" => {
                let mode = rest
                    .parse::<OrderMode>()
                    .map_err(|_| CommandError::Usage("mode dine-in|pickup"))?;
                Self::Mode(mode)
            }
            "checkout" => Self::Checkout,
            "pay" => {
                let mut fields = rest.split('|').map(|f| f.trim().to_string());
                Self::Pay(PaymentDetails {
                    card_name: fields.next().unwrap_or_default(),
                    card_number: fields.next().unwrap_or_default(),
                    expiry: fields.next().unwrap_or_default(),
                    cvv: fields.next().unwrap_or_default(),
                })
            }
            "locations" => Self::Locations,
            "campus" => Self::Campus(Selection::from(rest)),
            "focus" => Self::Focus(required(rest, "focus <id>")?),
            "review" => {
                const USAGE: &str = "review <id> <rating> <text> [| <name>]";
                let (location_id, rest) = split_word(rest);
                let (rating, rest) = split_word(rest);
                let rating = rating
                    .parse::<i64>()
                    .map_err(|_| CommandError::Usage(USAGE))?;
                if location_id.is_empty() {
                    return Err(CommandError::Usage(USAGE));
                }
                let (text, name) = rest.split_once('|').unwrap_or((rest, ""));
                Self::Review {
                    location_id: location_id.to_string(),
                    rating,
                    text: text.trim().to_string(),
                    name: name.trim().to_string(),
                }
            }
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(cmd)
    }
}
