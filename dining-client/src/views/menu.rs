//! Menu results view model

use super::format::{rating_label, rating_stars, tag_class};
use crate::cart::{format_money, money::format_amount};
use crate::core::{Loadable, Session};
use crate::sources::MENU_UNAVAILABLE;
use shared::models::MenuItem;

pub const NO_MATCHES: &str = "No menu items match your filters.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBadge {
    pub label: String,
    pub class: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCard {
    pub name: String,
    pub station: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<TagBadge>,
    pub stars: String,
    /// `4.2 (12 reviews)`
    pub rating: String,
    pub price: String,
    /// Price handed to "+ Add to Cart", two decimals, no sign
    pub add_price: String,
}

impl MenuCard {
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            station: item.station.clone(),
            location: item.location.clone(),
            description: item.description.clone(),
            tags: item
                .tags
                .iter()
                .map(|tag| TagBadge {
                    label: tag.clone(),
                    class: tag_class(tag),
                })
                .collect(),
            stars: rating_stars(item.rating),
            rating: format!("{} ({} reviews)", rating_label(item.rating), item.reviews),
            price: format_money(item.price),
            add_price: format_amount(item.price),
        }
    }
}

/// Content of the menu area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuResults {
    Loading,
    /// Feed failed; the whole area shows this message
    Unavailable(&'static str),
    Items(Vec<MenuCard>),
}

impl MenuResults {
    pub fn from_session(session: &Session) -> Self {
        match session.menu() {
            Loadable::Pending => Self::Loading,
            Loadable::Failed => Self::Unavailable(MENU_UNAVAILABLE),
            Loadable::Ready(_) => Self::Items(
                session
                    .menu_results()
                    .into_iter()
                    .map(MenuCard::from_item)
                    .collect(),
            ),
        }
    }

    /// `Menu Results (N items)`
    pub fn title(&self) -> String {
        let n = match self {
            Self::Items(cards) => cards.len(),
            _ => 0,
        };
        format!("Menu Results ({n} items)")
    }

    /// Message replacing the card grid, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Unavailable(message) => Some(message),
            Self::Items(cards) if cards.is_empty() => Some(NO_MATCHES),
            _ => None,
        }
    }
}

/// Values offered by the filter dropdowns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub meals: Vec<String>,
    pub tags: Vec<String>,
}

impl FilterOptions {
    pub fn from_session(session: &Session) -> Self {
        let Some(catalog) = session.menu().ready() else {
            return Self::default();
        };
        let owned = |values: Vec<&str>| -> Vec<String> {
            values.into_iter().map(str::to_string).collect()
        };
        Self {
            locations: owned(catalog.locations()),
            meals: owned(catalog.meals()),
            tags: owned(catalog.tags()),
        }
    }
}
