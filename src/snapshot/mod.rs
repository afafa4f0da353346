//! Snapshot rendering: a chat transcript in, a self-contained HTML page out.

pub mod render;
pub mod template;

pub use render::{
    DEFAULT_TITLE, SnapshotDocument, SnapshotRequest, format_timestamp, local_now, render,
    render_at, write_snapshot,
};
pub use template::{TAG_LABELS, TAGS_BLOCK};
