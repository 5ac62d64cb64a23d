//! Location cards, reviews and map view models

use super::format::{
    hours_lines, rating_label, rating_stars, review_date, review_stars, reviewer_name,
    sanitize_text,
};
use crate::core::{Loadable, Session};
use crate::locations::{InfoPopup, LocationDirectory, ReviewBook, Viewport};
use crate::sources::LOCATIONS_UNAVAILABLE;
use shared::models::{Location, LocationReview};

pub const NO_LOCATIONS: &str = "No locations match this filter.";
pub const NO_REVIEWS: &str = "No reviews yet. Be the first to add one.";

/// One user review as shown on a card
///
/// Name and text are user input and arrive here sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewView {
    pub name: String,
    pub stars: String,
    pub text: String,
    pub date: String,
}

impl ReviewView {
    pub fn from_review(review: &LocationReview) -> Self {
        Self {
            name: sanitize_text(&reviewer_name(review.name.as_deref())),
            stars: review_stars(review.rating),
            text: sanitize_text(&review.text),
            date: review_date(&review.date),
        }
    }
}

/// Published rating line: stars, one decimal, review count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingView {
    pub stars: String,
    pub score: String,
    pub reviews: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCard {
    pub id: String,
    pub campus: String,
    pub name: String,
    pub kind: String,
    pub rating: Option<RatingView>,
    pub hours: Vec<String>,
    pub description: String,
    pub payment: Vec<String>,
    pub highlighted: bool,
    pub reviews: Vec<ReviewView>,
}

impl LocationCard {
    pub fn build(location: &Location, reviews: &ReviewBook, highlighted: bool) -> Self {
        Self {
            id: location.id.clone(),
            campus: location.campus.clone(),
            name: location.name.clone(),
            kind: location.kind.clone().unwrap_or_default(),
            rating: location
                .rating
                .filter(|r| *r > 0.0)
                .map(|r| RatingView {
                    stars: rating_stars(r),
                    score: rating_label(r),
                    reviews: location.reviews.unwrap_or(0),
                }),
            hours: location.hours.as_deref().map(hours_lines).unwrap_or_default(),
            description: location.description.clone().unwrap_or_default(),
            payment: location.payment.clone(),
            highlighted,
            reviews: reviews
                .for_location(&location.id)
                .iter()
                .map(ReviewView::from_review)
                .collect(),
        }
    }

    /// Shown in place of the review list when it is empty
    pub fn reviews_message(&self) -> Option<&'static str> {
        self.reviews.is_empty().then_some(NO_REVIEWS)
    }
}

/// Content of the location card area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationList {
    Loading,
    Unavailable(&'static str),
    Cards(Vec<LocationCard>),
}

impl LocationList {
    pub fn from_session(session: &Session) -> Self {
        match session.locations() {
            Loadable::Pending => Self::Loading,
            Loadable::Failed => Self::Unavailable(LOCATIONS_UNAVAILABLE),
            Loadable::Ready(directory) => Self::Cards(cards(directory, session.reviews())),
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Unavailable(message) => Some(message),
            Self::Cards(cards) if cards.is_empty() => Some(NO_LOCATIONS),
            _ => None,
        }
    }
}

fn cards(directory: &LocationDirectory, reviews: &ReviewBook) -> Vec<LocationCard> {
    let highlighted = directory.highlighted();
    directory
        .visible()
        .into_iter()
        .map(|loc| LocationCard::build(loc, reviews, highlighted == Some(loc.id.as_str())))
        .collect()
}

/// Map summary for a text front end
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub viewport: Viewport,
    /// Titles of the visible markers
    pub markers: Vec<String>,
    pub popup: Option<InfoPopup>,
}

impl MapView {
    pub fn from_session(session: &Session) -> Option<Self> {
        let map = session.locations().ready()?.map();
        Some(Self {
            viewport: map.viewport().clone(),
            markers: map
                .markers()
                .iter()
                .filter(|m| m.visible)
                .map(|m| m.title.clone())
                .collect(),
            popup: map.popup().cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::ReviewDraft;
    use crate::storage::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn thrive() -> Location {
        serde_json::from_str(
            r#"{"id":"thrive","name":"Thrive","campus":"Foggy Bottom","type":"Dining Hall",
                "lat":38.8997,"lng":-77.0486,"hours":"Mon-Fri 7am-9pm\nSat 10am-8pm",
                "payment":["GWorld","Card"],"rating":4.26,"reviews":120}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_card_without_reviews() {
        let card = LocationCard::build(&thrive(), &ReviewBook::default(), false);

        assert_eq!(card.kind, "Dining Hall");
        assert_eq!(card.hours, ["Mon-Fri 7am-9pm", "Sat 10am-8pm"]);
        let rating = card.rating.as_ref().unwrap();
        assert_eq!(rating.score, "4.3");
        assert_eq!(rating.stars, "★★★★☆");
        assert_eq!(rating.reviews, 120);
        assert_eq!(card.reviews_message(), Some(NO_REVIEWS));
    }

    #[test]
    fn test_card_lists_reviews() {
        let store = MemoryStore::new();
        let mut book = ReviewBook::default();
        let date = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        book.submit(
            &store,
            "thrive",
            ReviewDraft::new("Good\u{7} coffee").with_rating(3),
            date,
        )
        .unwrap();

        let card = LocationCard::build(&thrive(), &book, true);

        assert!(card.highlighted);
        assert_eq!(
            card.reviews,
            vec![ReviewView {
                name: "Student reviewer".into(),
                stars: "★★★☆☆".into(),
                text: "Good coffee".into(),
                date: "2025-03-01".into(),
            }]
        );
        assert_eq!(card.reviews_message(), None);
    }

    #[test]
    fn test_empty_list_message() {
        assert_eq!(LocationList::Cards(Vec::new()).message(), Some(NO_LOCATIONS));
        assert_eq!(
            LocationList::Unavailable(LOCATIONS_UNAVAILABLE).message(),
            Some("Unable to load dining locations.")
        );
        assert_eq!(LocationList::Loading.message(), None);
    }
}
