//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item as published in the menu feed (read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Average rating, 0-5
    #[serde(default)]
    pub rating: f64,
    /// Number of ratings behind `rating`
    #[serde(default)]
    pub reviews: u32,
    /// Dietary / attribute labels (vegetarian, spicy, ...)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Dining hall serving the item
    #[serde(default)]
    pub location: String,
    /// Meal period (breakfast, lunch, dinner, ...)
    #[serde(default)]
    pub meal: String,
    /// Station inside the hall
    #[serde(default)]
    pub station: String,
}

impl MenuItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_default() {
        let item: MenuItem = serde_json::from_str(r#"{"name":"Pasta","price":7.5}"#).unwrap();
        assert_eq!(item.name, "Pasta");
        assert!(item.tags.is_empty());
        assert_eq!(item.location, "");
        assert_eq!(item.reviews, 0);
    }

    #[test]
    fn test_has_tag() {
        let item: MenuItem = serde_json::from_str(
            r#"{"name":"Curry","price":9,"tags":["vegan","spicy"]}"#,
        )
        .unwrap();
        assert!(item.has_tag("spicy"));
        assert!(!item.has_tag("Spicy"));
    }
}
