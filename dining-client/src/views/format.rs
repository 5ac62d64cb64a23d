//! Display formatting shared by the views

use chrono::{DateTime, Utc};
use shared::models::MAX_RATING;

const STAR_FULL: char = '★';
const STAR_EMPTY: char = '☆';

/// Fallback for reviews left without a name
pub const ANONYMOUS_REVIEWER: &str = "Student reviewer";

/// Five stars, `round(rating)` of them filled
pub fn rating_stars(rating: f64) -> String {
    let full = if rating.is_finite() {
        rating.round().clamp(0.0, f64::from(MAX_RATING)) as usize
    } else {
        0
    };
    stars(full)
}

/// Five stars for a 1-5 review rating
pub fn review_stars(rating: u8) -> String {
    stars(usize::from(rating.min(MAX_RATING)))
}

fn stars(full: usize) -> String {
    let total = usize::from(MAX_RATING);
    std::iter::repeat_n(STAR_FULL, full)
        .chain(std::iter::repeat_n(STAR_EMPTY, total - full))
        .collect()
}

/// `4.3` (one decimal)
pub fn rating_label(rating: f64) -> String {
    format!("{rating:.1}")
}

/// Badge class for the tags that have one
pub fn tag_class(tag: &str) -> Option<&'static str> {
    match tag {
        "vegetarian" => Some("tag-vegetarian"),
        "vegan" => Some("tag-vegan"),
        "spicy" => Some("tag-spicy"),
        "healthy" => Some("tag-healthy"),
        "glutenfree" => Some("tag-glutenfree"),
        _ => None,
    }
}

pub fn reviewer_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => ANONYMOUS_REVIEWER.to_string(),
    }
}

/// Calendar date only
pub fn review_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Drop control characters from user-supplied text, keeping line breaks
///
/// Review names and bodies reach the terminal verbatim otherwise, escape
/// sequences included.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}

/// Opening hours split on line breaks, blank lines dropped
pub fn hours_lines(hours: &str) -> Vec<String> {
    hours
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
