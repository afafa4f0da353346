//! Curated directory listing for snapshot folders.

pub mod descriptions;
pub mod render;

pub use descriptions::{BUILTIN_DESCRIPTIONS, DescriptionTable, builtin_description};
pub use render::{FALLBACK_DESCRIPTION, HTML_SUFFIX, ListingEntry, listing_entries, render_listing};
