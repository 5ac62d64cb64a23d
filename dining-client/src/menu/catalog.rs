//! Menu catalog
//!
//! The item list is fetched once per session and never changes afterwards.

use super::filter::MenuFilter;
use shared::models::MenuItem;

/// Immutable menu item list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn filter(&self, filter: &MenuFilter) -> Vec<&MenuItem> {
        filter.apply(&self.items)
    }

    /// Distinct hall names, first-seen order (location dropdown)
    pub fn locations(&self) -> Vec<&str> {
        distinct(self.items.iter().map(|i| i.location.as_str()))
    }

    /// Distinct meal periods, first-seen order (meal dropdown)
    pub fn meals(&self) -> Vec<&str> {
        distinct(self.items.iter().map(|i| i.meal.as_str()))
    }

    /// Distinct tags, first-seen order (legend)
    pub fn tags(&self) -> Vec<&str> {
        distinct(self.items.iter().flat_map(|i| i.tags.iter().map(String::as_str)))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values.filter(|v| !v.is_empty()) {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MenuCatalog {
        let items: Vec<MenuItem> = serde_json::from_str(
            r#"[
                {"name":"Pasta","price":7.5,"location":"Hall A","meal":"Dinner","tags":["vegetarian"]},
                {"name":"Burger","price":9,"location":"Hall B","meal":"Lunch"},
                {"name":"Tofu","price":8,"location":"Hall A","meal":"Lunch","tags":["vegan","vegetarian"]}
            ]"#,
        )
        .unwrap();
        MenuCatalog::new(items)
    }

    #[test]
    fn test_distinct_values_in_first_seen_order() {
        let catalog = catalog();
        assert_eq!(catalog.locations(), ["Hall A", "Hall B"]);
        assert_eq!(catalog.meals(), ["Dinner", "Lunch"]);
        assert_eq!(catalog.tags(), ["vegetarian", "vegan"]);
    }

    #[test]
    fn test_filter_delegates() {
        let catalog = catalog();
        let result = catalog.filter(&MenuFilter::all().with_meal("lunch"));
        assert_eq!(result.len(), 2);
        assert_eq!(catalog.len(), 3);
    }
}
