//! Plain directory listing used when the curated page does not apply.

use crate::html::html_escape;

/// A directory member as shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirItem {
    pub name: String,
    pub is_dir: bool,
}

/// Render a minimal `Directory listing for ...` page.
///
/// Entries are sorted case-insensitively; directories get a trailing `/`.
pub fn render_default_listing(request_path: &str, items: &[DirItem]) -> String {
    let mut items: Vec<&DirItem> = items.iter().collect();
    items.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    let title = html_escape(&format!("Directory listing for {request_path}"));
    let mut html = format!(
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n<ul>\n"
    );
    for item in items {
        let suffix = if item.is_dir { "/" } else { "" };
        html.push_str(&format!(
            "<li><a href=\"{href}{suffix}\">{text}{suffix}</a></li>\n",
            href = urlencoding::encode(&item.name),
            text = html_escape(&item.name),
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}
