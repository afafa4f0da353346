//! Chat snapshot renderer.
//!
//! Turns a raw transcript into a standalone HTML page with inline CSS and no
//! external resources, so the file can be opened offline. The title and the
//! transcript are HTML-escaped; the transcript is shown verbatim in a `<pre>`.

use std::fs;
use std::path::Path;

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::debug;

use crate::html::Escaped;
use crate::snapshot::template::{self, SnapshotFields, TAGS_BLOCK};
use crate::{SnapshotError, SnapshotResult};

/// Default page title when the caller supplies none.
pub const DEFAULT_TITLE: &str = "Cimeika — Chat Snapshot";

/// Input for a single render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRequest {
    pub title: String,
    pub tags_enabled: bool,
    /// Raw transcript text. Never interpreted as markup.
    pub content: String,
}

impl SnapshotRequest {
    pub fn new(title: impl Into<String>, tags_enabled: bool, content: impl Into<String>) -> Self {
        SnapshotRequest {
            title: title.into(),
            tags_enabled,
            content: content.into(),
        }
    }
}

impl Default for SnapshotRequest {
    fn default() -> Self {
        SnapshotRequest::new(DEFAULT_TITLE, false, String::new())
    }
}

/// A rendered snapshot page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDocument {
    pub html: String,
}

/// Format a timestamp the way it appears in the page header.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    // Formatting a full date-time with a fixed description cannot fail.
    at.format(&fmt).unwrap_or_default()
}

/// Current local wall-clock time, falling back to UTC when the local offset
/// cannot be determined.
pub fn local_now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(offset) => now.to_offset(offset),
        Err(e) => {
            debug!(error = %e, "local offset unavailable, using UTC");
            now
        }
    }
}

/// Render a snapshot with an explicit timestamp.
///
/// Output depends only on the arguments.
pub fn render_at(request: &SnapshotRequest, at: OffsetDateTime) -> SnapshotDocument {
    let title = Escaped::new(&request.title);
    let timestamp = Escaped::new(&format_timestamp(at));
    let content = Escaped::new(&request.content);
    let tags_block = if request.tags_enabled { TAGS_BLOCK } else { "" };

    let html = template::fill(&SnapshotFields {
        title: &title,
        timestamp: &timestamp,
        tags_block,
        content: &content,
    });

    SnapshotDocument { html }
}

/// Render a snapshot stamped with the current local time.
pub fn render(title: &str, tags_enabled: bool, content: &str) -> String {
    let request = SnapshotRequest::new(title, tags_enabled, content);
    render_at(&request, local_now()).html
}

/// Write a rendered snapshot to a file, replacing any existing file.
pub fn write_snapshot(document: &SnapshotDocument, output_path: &Path) -> SnapshotResult<()> {
    fs::write(output_path, document.html.as_bytes()).map_err(|source| SnapshotError::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    })
}
