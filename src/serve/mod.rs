//! Static file server for a directory of snapshots.
//!
//! Serves files as-is and replaces directory listings with the curated
//! listing page when the directory contains `.html` files.

pub mod config;
pub mod default_listing;
pub mod router;

pub use config::{DEFAULT_PORT, ServeConfig};
pub use default_listing::{DirItem, render_default_listing};
pub use router::{build_router, read_directory, resolve_request_path};
