//! Fixed document skeleton for chat snapshots.
//!
//! The skeleton is split into static fragments and filled by [`fill`] in a
//! single pass: each field is appended once and never rescanned, so text
//! inside a field can never be taken for a placeholder.

use crate::html::Escaped;

/// The seven CIMEIKA tag labels, in display order.
pub const TAG_LABELS: [&str; 7] = [
    "ci", "ПоДія", "Настрій", "Маля", "Казкар", "Календар", "Галерея",
];

/// Markup rendered above the transcript when tags are enabled.
pub const TAGS_BLOCK: &str = concat!(
    "<h3>7 тегів CIMEIKA</h3>",
    "<ul class=\"tags\">",
    "<li>ci</li><li>ПоДія</li><li>Настрій</li><li>Маля</li>",
    "<li>Казкар</li><li>Календар</li><li>Галерея</li>",
    "</ul><div class='goldline'></div>",
);

const STYLE: &str = r#"
:root {
    --gold1: #FFC34D;
    --gold2: #FFA72B;
    --bg1: #0A1022;
    --bg2: #0E1833;
    --ink: #EAF0FF;
    --muted: #9FB3C8;
}

html, body {
    margin: 0;
    padding: 0;
    background: linear-gradient(180deg, var(--bg1), var(--bg2));
    color: var(--ink);
    font: 16px/1.6 system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
}

.wrap {
    max-width: 860px;
    margin: 0 auto;
    padding: 22px 20px 90px;
}

h1 {
    margin: 0 0 6px;
    font-weight: 700;
    letter-spacing: 0.2px;
}

.time {
    color: var(--muted);
    font-size: 12px;
    margin-bottom: 16px;
}

.goldline {
    height: 2px;
    background: linear-gradient(90deg, var(--gold1), var(--gold2), transparent);
    filter: blur(0.3px);
    opacity: 0.95;
    margin: 12px 0 18px;
}

.note {
    background: rgba(255, 255, 255, 0.03);
    border: 1px solid rgba(255, 255, 255, 0.06);
    border-radius: 14px;
    padding: 14px 16px;
    margin: 12px 0;
}

pre {
    white-space: pre-wrap;
    word-wrap: break-word;
    background: linear-gradient(180deg, #131A36, #0C1228);
    border: 1px solid rgba(255, 255, 255, 0.06);
    border-radius: 12px;
    padding: 14px 16px;
    box-shadow:
        0 10px 22px rgba(6, 10, 26, 0.45),
        0 2px 6px rgba(255, 195, 77, 0.18),
        inset 0 1px 0 rgba(255, 255, 255, 0.06);
}

.tags {
    list-style: none;
    padding: 0;
    margin: 10px 0;
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 10px;
}

.tags li {
    background: linear-gradient(180deg, #131A36, #0C1228);
    border: 1px solid rgba(255, 255, 255, 0.06);
    border-radius: 12px;
    padding: 10px 12px;
    box-shadow:
        0 10px 22px rgba(6, 10, 26, 0.45),
        0 2px 6px rgba(255, 195, 77, 0.18),
        inset 0 1px 0 rgba(255, 255, 255, 0.06);
}

footer {
    position: fixed;
    left: 0;
    right: 0;
    bottom: 0;
    height: 90px;
    pointer-events: none;
    background: linear-gradient(0deg, rgba(255, 195, 77, 0.18), rgba(255, 195, 77, 0));
}

/* Bottom gold glow */
body::after {
    content: "";
    position: fixed;
    left: -20%;
    right: -20%;
    bottom: -18%;
    height: 50%;
    border-radius: 50%;
    background: radial-gradient(60% 80% at 60% 100%, rgba(255, 195, 77, 0.22), rgba(255, 195, 77, 0));
    filter: blur(20px);
    opacity: 0.55;
    pointer-events: none;
}

@media (max-width: 768px) {
    .wrap {
        padding: 16px 12px 90px;
    }

    .tags {
        grid-template-columns: 1fr;
    }

    pre {
        font-size: 14px;
        padding: 12px;
    }
}
"#;

const HEAD_OPEN: &str = r#"<!doctype html>
<html lang="uk">
<head>
<meta charset="utf-8"/>
<meta name="viewport" content="width=device-width, initial-scale=1"/>
<title>"#;

const HEAD_CLOSE: &str = r#"</title>
<style>"#;

const BODY_OPEN: &str = r#"</style>
</head>
<body>
  <div class="wrap">
    <h1>"#;

const TIME_OPEN: &str = r#"</h1>
    <div class="time">Створено: "#;

const TIME_CLOSE: &str = r#"</div>
    <div class="goldline"></div>
    "#;

const NOTE: &str = r#"
    <div class="note">Снапшот чату (офлайн-версія для перегляду у браузері).</div>
    <pre>"#;

const TAIL: &str = r#"</pre>
  </div>
  <footer></footer>
</body>
</html>"#;

/// Every value the skeleton accepts.
///
/// `tags_block` is fixed page markup; all other fields are escaped text.
#[derive(Debug)]
pub struct SnapshotFields<'a> {
    pub title: &'a Escaped,
    pub timestamp: &'a Escaped,
    pub tags_block: &'static str,
    pub content: &'a Escaped,
}

/// Substitute the fields into the skeleton.
pub fn fill(fields: &SnapshotFields<'_>) -> String {
    let mut html = String::with_capacity(
        8 * 1024 + 2 * fields.title.as_str().len() + fields.content.as_str().len(),
    );

    html.push_str(HEAD_OPEN);
    html.push_str(fields.title.as_str());
    html.push_str(HEAD_CLOSE);
    html.push_str(STYLE);
    html.push_str(BODY_OPEN);
    html.push_str(fields.title.as_str());
    html.push_str(TIME_OPEN);
    html.push_str(fields.timestamp.as_str());
    html.push_str(TIME_CLOSE);
    html.push_str(fields.tags_block);
    html.push_str(NOTE);
    html.push_str(fields.content.as_str());
    html.push_str(TAIL);

    html
}
