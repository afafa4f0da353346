//! HTML escaping shared by the snapshot and listing renderers.
//!
//! Every untrusted string that ends up in a rendered page goes through
//! [`html_escape`]. Template fields that carry such strings take [`Escaped`]
//! rather than `&str`, so an unescaped value cannot be passed by accident.

use std::fmt;

/// HTML-escape a string for safe insertion into HTML content or attributes.
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Text that is safe to embed in an HTML document as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Escaped(String);

impl Escaped {
    /// Escape untrusted text.
    pub fn new(raw: &str) -> Self {
        Escaped(html_escape(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
