//! Data feeds
//!
//! Menu items and dining locations are published as JSON arrays, either as
//! files next to the client or over HTTP(S). Each feed is fetched once per
//! session; a failure is reported, never retried.

use serde::de::DeserializeOwned;
use shared::models::{Location, MenuItem};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error};

/// Inline message replacing the menu when its feed fails
pub const MENU_UNAVAILABLE: &str = "Unable to load menu items.";

/// Inline message replacing the location cards when their feed fails
pub const LOCATIONS_UNAVAILABLE: &str = "Unable to load dining locations.";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid feed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where a feed lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` / `https://` → URL, anything else → file path
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Fetch and decode the feed
    pub async fn fetch<T: DeserializeOwned>(&self) -> Result<T, SourceError> {
        debug!(source = %self, "Fetching feed");
        match self {
            Self::File(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SourceError::Io {
                        path: path.clone(),
                        source,
                    })?;
                Ok(serde_json::from_str(&raw)?)
            }
            Self::Url(url) => {
                let response = reqwest::get(url).await?.error_for_status()?;
                let raw = response.text().await?;
                Ok(serde_json::from_str(&raw)?)
            }
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Menu item list
pub async fn fetch_menu(source: &DataSource) -> Result<Vec<MenuItem>, SourceError> {
    source.fetch().await.inspect_err(|e| {
        error!(source = %source, error = %e, "Error loading menu data");
    })
}

/// Dining location list
pub async fn fetch_locations(source: &DataSource) -> Result<Vec<Location>, SourceError> {
    source.fetch().await.inspect_err(|e| {
        error!(source = %source, error = %e, "Error loading dining locations");
    })
}
