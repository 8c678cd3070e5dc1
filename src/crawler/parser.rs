//! HTML link extraction
//!
//! Pulls candidate outbound links out of a fetched page. Anchors without a
//! usable href are skipped individually; only a broken selector fails the
//! whole page, and the engine treats that the same as a failed fetch.

use crate::url::extract_netloc;
use scraper::{Html, Selector};
use thiserror::Error;
use url::Url;

/// Page-level extraction failure
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid link selector: {0}")]
    Selector(String),
}

/// Extracts candidate links from a page's HTML
///
/// Every `<a href>` is resolved against `page_url` (relative hrefs become
/// absolute) and stripped to `scheme://netloc/path`. Query strings and
/// fragments are discarded here, so distinct query variants of one path
/// collapse to a single candidate downstream.
///
/// # Example
///
/// ```
/// use url::Url;
/// use linkharvest::crawler::extract_links;
///
/// let page = Url::parse("https://example.com/docs").unwrap();
/// let html = r#"<a href="/about?ref=nav#team">About</a>"#;
/// let links = extract_links(&page, html).unwrap();
/// assert_eq!(links, vec!["https://example.com/about".to_string()]);
/// ```
pub fn extract_links(page_url: &Url, html: &str) -> Result<Vec<String>, ParseError> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("a[href]").map_err(|e| ParseError::Selector(e.to_string()))?;

    let mut links = Vec::new();
    for anchor in document.select(&selector) {
        let href = match anchor.value().attr("href") {
            Some(href) if !href.is_empty() => href,
            _ => continue,
        };

        if let Some(candidate) = resolve_and_strip(page_url, href) {
            links.push(candidate);
        }
    }

    Ok(links)
}

/// Relative-to-absolute resolution, then query and fragment stripped
///
/// Returns None for hrefs that cannot be resolved or that resolve to a
/// hostless URL (mailto:, data:, javascript: and friends).
fn resolve_and_strip(page_url: &Url, href: &str) -> Option<String> {
    let resolved = page_url.join(href).ok()?;
    let netloc = extract_netloc(&resolved)?;
    Some(format!("{}://{}{}", resolved.scheme(), netloc, resolved.path()))
}
