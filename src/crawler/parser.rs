//! HTML parser for extracting page content and links
//!
//! This module handles parsing HTML content to extract:
//! - The page title (or a placeholder when the document has none)
//! - The visible paragraph text, joined in document order
//! - Outbound links whose href starts with `http`
//!
//! Documents are parsed with html5ever through `scraper`, which builds a
//! best-effort tree for malformed or truncated markup instead of failing.

use scraper::{Html, Selector};

/// Title used when a document has no `<title>` element
pub const NO_TITLE: &str = "No Title";

/// Prefix an href must start with to be followed
const LINK_PREFIX: &str = "http";

/// Title and body text extracted from one HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Text of the first `<title>` element, or [`NO_TITLE`]
    pub title: String,

    /// Paragraph text, one space between paragraphs, trimmed
    pub text: String,
}

/// Extracts the title and paragraph text from an HTML document
///
/// # Text Extraction
///
/// Every `<p>` element's text content is appended in document order,
/// each followed by a single space, and the whole string is then trimmed.
/// A document without paragraphs yields an empty string.
///
/// # Example
///
/// ```
/// use page_gleaner::crawler::extract_info;
///
/// let html = r#"<html><head><title>Home</title></head><body><p>Hello</p><p>there</p></body></html>"#;
/// let info = extract_info(html);
/// assert_eq!(info.title, "Home");
/// assert_eq!(info.text, "Hello there");
/// ```
pub fn extract_info(html: &str) -> PageInfo {
    let document = Html::parse_document(html);

    PageInfo {
        title: extract_title(&document).unwrap_or_else(|| NO_TITLE.to_string()),
        text: extract_paragraph_text(&document),
    }
}

/// Extracts every followable link from an HTML document
///
/// # Link Extraction Rules
///
/// **Include:**
/// - `<a href="...">` whose raw href starts with `http`
///
/// **Exclude:**
/// - Relative paths, fragments, `mailto:`, `javascript:` and anything else
///   not starting with `http`
///
/// The check is a plain prefix match on the attribute value, so
/// `https://` links pass and so does something like `httpfoo:bar`. Links
/// keep their document order and duplicates are kept.
///
/// # Example
///
/// ```
/// use page_gleaner::crawler::extract_links;
///
/// let html = r#"<a href="http://a.test">A</a><a href="/relative">R</a>"#;
/// assert_eq!(extract_links(html), vec!["http://a.test".to_string()]);
/// ```
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| href.starts_with(LINK_PREFIX))
        .map(str::to_string)
        .collect()
}

/// Extracts the text of the first `<title>` element
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Joins the text of all `<p>` elements
fn extract_paragraph_text(document: &Html) -> String {
    let Ok(p_selector) = Selector::parse("p") else {
        return String::new();
    };

    let mut text = String::new();
    for paragraph in document.select(&p_selector) {
        text.extend(paragraph.text());
        text.push(' ');
    }

    text.trim().to_string()
}
