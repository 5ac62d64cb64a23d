//! Menu browsing
//!
//! - `catalog`: the once-loaded item list
//! - `filter`: the multi-criteria filter pipeline

pub mod catalog;
pub mod filter;

pub use catalog::MenuCatalog;
pub use filter::{MenuFilter, Selection, apply_filters};
