//! Per-location reviews
//!
//! Persisted under `locationReviews` as `{ location_id: [review, ...] }`,
//! newest review last.

use crate::storage::{
    BlobStore, LOCATION_REVIEWS_KEY, StorageError, load_or_default, save_json,
};
use chrono::{DateTime, Utc};
use shared::models::{LocationReview, LocationReviews, MAX_RATING, MIN_RATING};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ReviewError {
    /// Blank review body; the form silently ignores it
    #[error("Review text is empty")]
    EmptyText,

    #[error("Missing location id")]
    MissingLocation,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Raw review form input
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    /// Optional reviewer name
    pub name: String,
    /// Selected stars; absent means the form default (5)
    pub rating: Option<i64>,
    pub text: String,
}

impl ReviewDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Normalized review, or `None` when the text is blank
    fn into_review(self, date: DateTime<Utc>) -> Option<LocationReview> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }
        let name = self.name.trim();
        let rating = self
            .rating
            .unwrap_or(i64::from(MAX_RATING))
            .clamp(i64::from(MIN_RATING), i64::from(MAX_RATING));

        Some(LocationReview {
            name: (!name.is_empty()).then(|| name.to_string()),
            rating: rating as u8,
            text: text.to_string(),
            date,
        })
    }
}

/// All location reviews, loaded once per session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewBook {
    reviews: LocationReviews,
}

impl ReviewBook {
    /// Read the stored reviews; unreadable data yields an empty book
    pub fn load<S: BlobStore + ?Sized>(store: &S) -> Self {
        Self {
            reviews: load_or_default(store, LOCATION_REVIEWS_KEY),
        }
    }

    pub fn for_location(&self, location_id: &str) -> &[LocationReview] {
        self.reviews
            .get(location_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of stored reviews
    pub fn len(&self) -> usize {
        self.reviews.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a review and persist the whole book
    ///
    /// On a storage failure the in-memory book is rolled back, so memory and
    /// store never disagree. Returns the location's updated list.
    pub fn submit<S: BlobStore + ?Sized>(
        &mut self,
        store: &S,
        location_id: &str,
        draft: ReviewDraft,
        now: DateTime<Utc>,
    ) -> Result<&[LocationReview], ReviewError> {
        if location_id.is_empty() {
            return Err(ReviewError::MissingLocation);
        }
        let Some(review) = draft.into_review(now) else {
            debug!(location_id, "Empty review ignored");
            return Err(ReviewError::EmptyText);
        };

        let list = self.reviews.entry(location_id.to_string()).or_default();
        list.push(review);

        if let Err(e) = save_json(store, LOCATION_REVIEWS_KEY, &self.reviews) {
            let list = self.reviews.entry(location_id.to_string()).or_default();
            list.pop();
            if list.is_empty() {
                self.reviews.remove(location_id);
            }
            return Err(e.into());
        }

        info!(location_id, "Location review posted");
        Ok(self.for_location(location_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageResult};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-04-02T18:30:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    /// Store whose writes always fail
    struct ReadOnlyStore;

    impl BlobStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Serialization(
                serde_json::from_str::<u8>("x").unwrap_err(),
            ))
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_submit_appends_and_persists() {
        let store = MemoryStore::new();
        let mut book = ReviewBook::load(&store);

        book.submit(&store, "thrive", ReviewDraft::new("Good soup").with_rating(4), now())
            .unwrap();
        let list = book
            .submit(&store, "thrive", ReviewDraft::new("Long line").with_name(" Sam "), now())
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].text, "Good soup");
        assert_eq!(list[1].name.as_deref(), Some("Sam"));
        assert_eq!(list[1].rating, 5);

        let reloaded = ReviewBook::load(&store);
        assert_eq!(reloaded, book);
        assert_eq!(reloaded.for_location("thrive").len(), 2);
    }

    #[test]
    fn test_blank_text_rejected_without_write() {
        let store = MemoryStore::new();
        let mut book = ReviewBook::load(&store);

        let result = book.submit(&store, "thrive", ReviewDraft::new("   "), now());

        assert!(matches!(result, Err(ReviewError::EmptyText)));
        assert!(book.is_empty());
        assert!(store.get(LOCATION_REVIEWS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_rating_clamped() {
        let store = MemoryStore::new();
        let mut book = ReviewBook::default();

        book.submit(&store, "a", ReviewDraft::new("meh").with_rating(0), now())
            .unwrap();
        book.submit(&store, "a", ReviewDraft::new("wow").with_rating(9), now())
            .unwrap();

        let ratings: Vec<u8> = book.for_location("a").iter().map(|r| r.rating).collect();
        assert_eq!(ratings, [1, 5]);
    }

    #[test]
    fn test_blank_name_stored_as_none() {
        let store = MemoryStore::new();
        let mut book = ReviewBook::default();
        let list = book
            .submit(&store, "a", ReviewDraft::new("ok").with_name("  "), now())
            .unwrap();
        assert_eq!(list[0].name, None);
    }

    #[test]
    fn test_storage_failure_rolls_back() {
        let mut book = ReviewBook::default();

        let result = book.submit(&ReadOnlyStore, "a", ReviewDraft::new("hello"), now());

        assert!(matches!(result, Err(ReviewError::Storage(_))));
        assert!(book.is_empty());
        assert!(book.for_location("a").is_empty());
    }

    #[test]
    fn test_corrupt_store_loads_empty() {
        let store = MemoryStore::new();
        store.set(LOCATION_REVIEWS_KEY, "[1,2,3]").unwrap();
        assert!(ReviewBook::load(&store).is_empty());
    }

    #[test]
    fn test_unknown_location_has_no_reviews() {
        assert!(ReviewBook::default().for_location("nowhere").is_empty());
    }
}
