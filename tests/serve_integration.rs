//! End-to-end tests for the snapshot file server.

use std::net::SocketAddr;
use std::path::Path;

use cimeika_snapshot::listing::DescriptionTable;
use cimeika_snapshot::serve::ServeConfig;
use cimeika_snapshot::serve_cmd::serve;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start(root: &Path, descriptions: DescriptionTable) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        let config = ServeConfig {
            root: root.to_path_buf(),
            descriptions,
            ..ServeConfig::default()
        };

        let handle = tokio::spawn(async move {
            serve(listener, config, async {
                let _ = rx.await;
            })
            .await
            .expect("server failed");
        });

        TestServer {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap();
    }
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_root_renders_curated_listing() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("out2.html"), "<p>two</p>").unwrap();
    std::fs::write(temp.path().join("out1.html"), "<p>one</p>").unwrap();
    std::fs::write(temp.path().join("notes.txt"), "n").unwrap();
    let server = TestServer::start(temp.path(), DescriptionTable::new()).await;

    let resp = client().get(server.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "text/html; charset=utf-8"
    );
    assert_eq!(
        resp.headers()["cache-control"].to_str().unwrap(),
        "no-cache, no-store, must-revalidate"
    );
    let body = resp.text().await.unwrap();
    assert!(body.contains("Cimeika Chat Snapshots"));
    assert!(body.find("out1.html").unwrap() < body.find("out2.html").unwrap());
    assert!(!body.contains("notes.txt"));

    server.stop().await;
}

#[tokio::test]
async fn test_listing_uses_loaded_descriptions() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("weekly.html"), "w").unwrap();
    let mut descriptions = DescriptionTable::new();
    descriptions.insert("weekly.html", "Weekly sync");
    let server = TestServer::start(temp.path(), descriptions).await;

    let body = client().get(server.url("/")).send().await.unwrap().text().await.unwrap();
    assert!(body.contains("Weekly sync"));

    server.stop().await;
}

#[tokio::test]
async fn test_directory_without_html_uses_default_listing() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("notes.txt"), "n").unwrap();
    std::fs::create_dir(temp.path().join("sub")).unwrap();
    let server = TestServer::start(temp.path(), DescriptionTable::new()).await;

    let resp = client().get(server.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Directory listing for /"));
    assert!(body.contains("notes.txt"));
    assert!(body.contains("sub/"));

    server.stop().await;
}

#[tokio::test]
async fn test_serves_files_verbatim() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("out1.html"), "<p>one</p>").unwrap();
    let server = TestServer::start(temp.path(), DescriptionTable::new()).await;

    let resp = client().get(server.url("/out1.html")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["pragma"].to_str().unwrap(), "no-cache");
    assert_eq!(resp.headers()["expires"].to_str().unwrap(), "0");
    assert_eq!(resp.text().await.unwrap(), "<p>one</p>");

    server.stop().await;
}

#[tokio::test]
async fn test_subdirectory_redirects_then_lists() {
    let temp = TempDir::new().unwrap();
    let sub = temp.path().join("archive");
    std::fs::create_dir(&sub).unwrap();
    std::fs::write(sub.join("old.html"), "old").unwrap();
    let server = TestServer::start(temp.path(), DescriptionTable::new()).await;

    let resp = client().get(server.url("/archive")).send().await.unwrap();
    assert_eq!(resp.status(), 301);
    assert_eq!(resp.headers()["location"].to_str().unwrap(), "/archive/");

    let body = client()
        .get(server.url("/archive/"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("<a href=\"old.html\""));

    server.stop().await;
}

#[tokio::test]
async fn test_index_html_takes_precedence() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("index.html"), "custom index").unwrap();
    std::fs::write(temp.path().join("out1.html"), "one").unwrap();
    let server = TestServer::start(temp.path(), DescriptionTable::new()).await;

    let body = client().get(server.url("/")).send().await.unwrap().text().await.unwrap();
    assert_eq!(body, "custom index");

    server.stop().await;
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let server = TestServer::start(temp.path(), DescriptionTable::new()).await;

    let resp = client().get(server.url("/nope.html")).send().await.unwrap();
    assert_eq!(resp.status(), 404);

    server.stop().await;
}

#[tokio::test]
async fn test_card_links_resolve_for_unusual_names() {
    let temp = TempDir::new().unwrap();
    for name in ["chat #1.html", "100%.html", "q?.html", "plain.html"] {
        std::fs::write(temp.path().join(name), name).unwrap();
    }
    let server = TestServer::start(temp.path(), DescriptionTable::new()).await;

    let body = client().get(server.url("/")).send().await.unwrap().text().await.unwrap();
    let hrefs: Vec<&str> = body
        .split("<a href=\"")
        .skip(1)
        .map(|rest| &rest[..rest.find('"').unwrap()])
        .collect();
    assert_eq!(hrefs.len(), 4);

    for href in hrefs {
        let resp = client().get(server.url(&format!("/{href}"))).send().await.unwrap();
        assert_eq!(resp.status(), 200, "href {href}");
    }

    server.stop().await;
}

/// Send a request line as-is, bypassing client-side URL normalization.
async fn raw_get(addr: SocketAddr, target: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {target} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8_lossy(&response).into_owned()
}

#[tokio::test]
async fn test_traversal_is_rejected() {
    let outer = TempDir::new().unwrap();
    std::fs::write(outer.path().join("secret.txt"), "top secret").unwrap();
    let root = outer.path().join("public");
    std::fs::create_dir(&root).unwrap();
    let server = TestServer::start(&root, DescriptionTable::new()).await;

    for target in ["/%2e%2e/secret.txt", "/../secret.txt", "/%2E%2E%2Fsecret.txt"] {
        let response = raw_get(server.addr, target).await;
        let status_line = response.lines().next().unwrap_or_default();
        assert!(status_line.starts_with("HTTP/1.1 "), "{target}: {status_line}");
        assert!(!status_line.contains(" 200 "), "{target}: {status_line}");
        assert!(!response.contains("top secret"), "{target}");
    }

    server.stop().await;
}
