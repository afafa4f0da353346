pub mod html;
pub mod listing;
pub mod serve;
pub mod snapshot;

pub mod serve_cmd;
pub mod snapshot_cmd;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read input: {0}")]
    ReadInput(#[source] std::io::Error),
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("server error: {0}")]
    Serve(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

pub use html::{Escaped, html_escape};
pub use listing::{DescriptionTable, ListingEntry, render_listing};
pub use snapshot::{SnapshotDocument, SnapshotRequest, render, render_at};
