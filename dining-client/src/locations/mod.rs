//! Dining locations
//!
//! - `directory`: location list + campus filter + highlighted card
//! - `map`: marker / viewport / popup model
//! - `reviews`: per-location user reviews

pub mod directory;
pub mod map;
pub mod reviews;

pub use directory::LocationDirectory;
pub use map::{Bounds, InfoPopup, LatLng, MapState, Marker, Viewport};
pub use reviews::{ReviewBook, ReviewDraft, ReviewError};
