//! CLI command handler for `snapshot`.
//!
//! Reads the whole transcript from stdin, renders it and writes the page to
//! the output path.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::snapshot::{SnapshotRequest, local_now, render_at, write_snapshot};
use crate::{SnapshotError, SnapshotResult};

/// Run the `snapshot` command against stdin.
pub fn run(output: PathBuf, title: String, tags: bool) -> SnapshotResult<()> {
    let stdin = std::io::stdin();
    run_with_input(stdin.lock(), &output, title, tags)?;
    println!("✅ Успішно створено: {}", output.display());
    Ok(())
}

/// Read a transcript from `input` until end-of-stream and write its snapshot.
///
/// Input must be valid UTF-8.
pub fn run_with_input<R: Read>(
    mut input: R,
    output: &Path,
    title: String,
    tags: bool,
) -> SnapshotResult<()> {
    let mut content = String::new();
    input
        .read_to_string(&mut content)
        .map_err(SnapshotError::ReadInput)?;
    debug!(bytes = content.len(), "read transcript");

    let request = SnapshotRequest {
        title,
        tags_enabled: tags,
        content,
    };
    let document = render_at(&request, local_now());
    write_snapshot(&document, output)?;

    info!(path = %output.display(), tags, "wrote snapshot");
    Ok(())
}
