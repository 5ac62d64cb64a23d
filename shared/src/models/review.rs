//! Location Review Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lowest accepted star rating
pub const MIN_RATING: u8 = 1;
/// Highest accepted star rating (also the form default)
pub const MAX_RATING: u8 = 5;

/// User-submitted review of a dining location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationReview {
    /// Reviewer name, absent when left blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// 1-5
    pub rating: u8,
    /// Review body (never empty)
    pub text: String,
    pub date: DateTime<Utc>,
}

/// Reviews keyed by location id, each list in submission order (newest last)
pub type LocationReviews = BTreeMap<String, Vec<LocationReview>>;
