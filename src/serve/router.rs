//! HTTP routing for the snapshot file server.
//!
//! Files are served by `tower-http`'s `ServeDir`. A middleware in front of it
//! answers directory requests: the curated listing page when the directory
//! holds `.html` files, the plain listing otherwise.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{debug, warn};

use crate::listing::{DescriptionTable, render_listing};
use crate::serve::default_listing::{DirItem, render_default_listing};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

#[derive(Debug)]
struct ServeState {
    root: PathBuf,
    descriptions: DescriptionTable,
}

/// Build the router serving `root`.
pub fn build_router(root: PathBuf, descriptions: DescriptionTable) -> Router {
    let serve_dir = ServeDir::new(&root);
    let state = Arc::new(ServeState { root, descriptions });

    Router::new()
        .fallback_service(serve_dir)
        .layer(middleware::from_fn_with_state(state, directory_index))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
}

/// Map a request path onto the served directory.
///
/// Returns `None` for paths that are not valid UTF-8 once decoded or that
/// try to leave the root.
pub fn resolve_request_path(root: &Path, uri_path: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(uri_path).ok()?;
    let mut path = root.to_path_buf();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            s if s.contains('\\') || s.contains('\0') => return None,
            s => path.push(s),
        }
    }
    Some(path)
}

/// List the members of a directory. Names that are not valid UTF-8 are skipped.
pub async fn read_directory(path: &Path) -> io::Result<Vec<DirItem>> {
    let mut dir = tokio::fs::read_dir(path).await?;
    let mut items = Vec::new();
    while let Some(entry) = dir.next_entry().await? {
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                debug!(name = ?raw, "skipping non UTF-8 file name");
                continue;
            }
        };
        let is_dir = match entry.file_type().await {
            Ok(t) => t.is_dir(),
            Err(_) => false,
        };
        items.push(DirItem { name, is_dir });
    }
    Ok(items)
}

fn html_response(body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HTML_CONTENT_TYPE)],
        body,
    )
        .into_response()
}

/// Render the page for a directory request.
///
/// A directory that cannot be read gets an empty plain listing.
async fn directory_page(state: &ServeState, dir: &Path, request_path: &str) -> String {
    let items = match read_directory(dir).await {
        Ok(items) => items,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "failed to read directory");
            return render_default_listing(request_path, &[]);
        }
    };

    let files = items.iter().filter(|i| !i.is_dir).map(|i| i.name.as_str());
    let describe = |name: &str| state.descriptions.describe(name).map(str::to_string);
    match render_listing(files, describe) {
        Some(page) => page,
        None => render_default_listing(request_path, &items),
    }
}

async fn directory_index(
    State(state): State<Arc<ServeState>>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET && request.method() != Method::HEAD {
        return next.run(request).await;
    }

    let uri_path = request.uri().path().to_string();
    let Some(dir) = resolve_request_path(&state.root, &uri_path) else {
        return next.run(request).await;
    };
    let is_dir = match tokio::fs::metadata(&dir).await {
        Ok(meta) => meta.is_dir(),
        Err(_) => false,
    };
    if !is_dir {
        return next.run(request).await;
    }

    if !uri_path.ends_with('/') {
        let location = match request.uri().query() {
            Some(q) => format!("{uri_path}/?{q}"),
            None => format!("{uri_path}/"),
        };
        return (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response();
    }

    if tokio::fs::metadata(dir.join("index.html"))
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
    {
        return next.run(request).await;
    }

    let decoded = urlencoding::decode(&uri_path)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| uri_path.clone());
    debug!(path = %decoded, "rendering directory index");
    html_response(directory_page(&state, &dir, &decoded).await)
}
