//! CLI command handler for `serve`.

use std::future::Future;
use std::path::Path;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::listing::HTML_SUFFIX;
use crate::serve::{ServeConfig, build_router, read_directory};
use crate::{SnapshotError, SnapshotResult};

/// Run the `serve` command until Ctrl+C.
pub fn run(config: ServeConfig) -> SnapshotResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        let addr = config.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| SnapshotError::Serve(format!("failed to bind {addr}: {e}")))?;

        serve(listener, config, shutdown_signal()).await?;
        info!("server stopped");
        Ok::<(), SnapshotError>(())
    })
}

/// Serve `config.root` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, config: ServeConfig, shutdown: F) -> SnapshotResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local = listener
        .local_addr()
        .map_err(|e| SnapshotError::Serve(e.to_string()))?;
    log_banner(&config.root, local.port()).await;

    let app = build_router(config.root, config.descriptions);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| SnapshotError::Serve(e.to_string()))
}

/// Names of the `.html` files directly inside `root`, sorted.
pub async fn html_files(root: &Path) -> std::io::Result<Vec<String>> {
    let mut names: Vec<String> = read_directory(root)
        .await?
        .into_iter()
        .filter(|item| !item.is_dir && item.name.ends_with(HTML_SUFFIX))
        .map(|item| item.name)
        .collect();
    names.sort();
    Ok(names)
}

async fn log_banner(root: &Path, port: u16) {
    let shown = std::fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    info!(dir = %shown.display(), "serving directory");
    info!("open http://localhost:{port}");

    match html_files(root).await {
        Ok(names) if names.is_empty() => info!("no HTML snapshots yet"),
        Ok(names) => {
            for name in names {
                info!("snapshot: http://localhost:{port}/{}", urlencoding::encode(&name));
            }
        }
        Err(e) => warn!(error = %e, "failed to list snapshots"),
    }
    info!("press Ctrl+C to stop");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
