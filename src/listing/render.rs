//! Listing page renderer.
//!
//! Builds the index page shown for a directory of snapshots: one card per
//! `.html` file, sorted by filename. Filenames and descriptions are
//! HTML-escaped before they are embedded.

use std::collections::BTreeSet;

use crate::html::html_escape;

/// Description used for files without a curated entry.
pub const FALLBACK_DESCRIPTION: &str = "HTML snapshot of a chat";

/// Only names ending with this suffix are listed (case-sensitive).
pub const HTML_SUFFIX: &str = ".html";

/// One card on the listing page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListingEntry {
    pub filename: String,
    pub description: String,
}

/// Select the `.html` names, sort them and attach descriptions.
pub fn listing_entries<I, S, F>(filenames: I, describe: F) -> Vec<ListingEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> Option<String>,
{
    let names: BTreeSet<String> = filenames
        .into_iter()
        .filter(|name| name.as_ref().ends_with(HTML_SUFFIX))
        .map(|name| name.as_ref().to_string())
        .collect();

    names
        .into_iter()
        .map(|filename| {
            let description =
                describe(&filename).unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string());
            ListingEntry {
                filename,
                description,
            }
        })
        .collect()
}

fn render_card(entry: &ListingEntry) -> String {
    format!(
        r#"
      <div class="file-card">
        <div class="file-name">{filename}</div>
        <div class="description">{description}</div>
        <a href="{href}" class="file-link" target="_blank">Переглянути →</a>
      </div>"#,
        filename = html_escape(&entry.filename),
        description = html_escape(&entry.description),
        href = html_escape(&urlencoding::encode(&entry.filename)),
    )
}

/// Render the listing page, or `None` when there is no `.html` file to list.
pub fn render_listing<I, S, F>(filenames: I, describe: F) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: Fn(&str) -> Option<String>,
{
    let entries = listing_entries(filenames, describe);
    if entries.is_empty() {
        return None;
    }

    let mut html = String::with_capacity(4 * 1024 + entries.len() * 512);
    html.push_str(PAGE_HEAD);
    for entry in &entries {
        html.push_str(&render_card(entry));
    }
    html.push_str(PAGE_TAIL);

    Some(html)
}

const PAGE_HEAD: &str = r#"<!doctype html>
<html lang="uk">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1"/>
<title>Cimeika Snapshots Demo</title>
<style>
:root {
    --gold1: #FFC34D;
    --gold2: #FFA72B;
    --bg1: #0A1022;
    --bg2: #0E1833;
    --ink: #EAF0FF;
    --muted: #9FB3C8;
}

body {
    margin: 0;
    padding: 20px;
    background: linear-gradient(180deg, var(--bg1), var(--bg2));
    color: var(--ink);
    font: 16px/1.6 system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
    min-height: 100vh;
}

.container {
    max-width: 800px;
    margin: 0 auto;
}

h1 {
    text-align: center;
    margin-bottom: 30px;
    background: linear-gradient(45deg, var(--gold1), var(--gold2));
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
}

.file-grid {
    display: grid;
    gap: 20px;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
}

.file-card {
    background: linear-gradient(180deg, #131A36, #0C1228);
    border: 1px solid rgba(255, 255, 255, 0.06);
    border-radius: 12px;
    padding: 20px;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
    box-shadow:
        0 10px 22px rgba(6, 10, 26, 0.45),
        0 2px 6px rgba(255, 195, 77, 0.18),
        inset 0 1px 0 rgba(255, 255, 255, 0.06);
}

.file-card:hover {
    transform: translateY(-2px);
    box-shadow:
        0 15px 30px rgba(6, 10, 26, 0.6),
        0 5px 10px rgba(255, 195, 77, 0.25),
        inset 0 1px 0 rgba(255, 255, 255, 0.1);
}

.file-name {
    font-size: 18px;
    font-weight: bold;
    margin-bottom: 10px;
    color: var(--gold1);
}

.file-link {
    display: inline-block;
    padding: 10px 20px;
    background: linear-gradient(45deg, var(--gold1), var(--gold2));
    color: var(--bg1);
    text-decoration: none;
    border-radius: 8px;
    font-weight: bold;
    transition: transform 0.2s ease;
}

.file-link:hover {
    transform: scale(1.05);
}

.description {
    color: var(--muted);
    font-size: 14px;
    margin-bottom: 15px;
}
</style>
</head>
<body>
  <div class="container">
    <h1>🎨 Cimeika Chat Snapshots</h1>
    <div class="file-grid">"#;

const PAGE_TAIL: &str = r#"
    </div>
  </div>
</body>
</html>
"#;
