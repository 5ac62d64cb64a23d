//! Dining Location Model

use serde::{Deserialize, Serialize};

/// Dining location as published in the locations feed (read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    /// Campus grouping used by the campus filter
    pub campus: String,
    /// Venue type (dining hall, cafe, market, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: String,
    /// Opening hours, one line per period
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Accepted payment methods
    #[serde(default)]
    pub payment: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}

impl Location {
    /// (lat, lng)
    pub fn position(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}
