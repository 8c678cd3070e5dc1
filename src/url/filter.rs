use url::Url;

/// Path extensions that are served as documents rather than assets
const WEBPAGE_EXTENSIONS: &[&str] = &[
    ".html", ".htm", ".php", ".asp", ".aspx", ".jsp", ".jspx", ".cfm", ".cgi", ".pl", ".shtml",
    ".xhtml",
];

/// Checks whether a candidate is a well-formed absolute URL
///
/// True iff the string parses with both a scheme and a non-empty host.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => !url.scheme().is_empty() && url.host_str().map_or(false, |h| !h.is_empty()),
        Err(_) => false,
    }
}

/// Checks whether a URL points to a webpage rather than a binary asset
///
/// A candidate passes when its case-folded path ends with one of the known
/// document extensions, or when the path contains no `.` at all
/// (extensionless paths like `/about` are assumed to be pages). Everything
/// else, images and PDFs and stylesheets included, is rejected.
pub fn is_webpage(candidate: &str) -> bool {
    let path = match Url::parse(candidate) {
        Ok(url) => url.path().to_lowercase(),
        Err(_) => return false,
    };

    WEBPAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) || !path.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_absolute_url() {
        assert!(is_valid_url("https://example.com/page"));
        assert!(is_valid_url("http://127.0.0.1:8080/"));
    }

    #[test]
    fn test_invalid_relative_url() {
        assert!(!is_valid_url("/just/a/path"));
        assert!(!is_valid_url("page.html"));
    }

    #[test]
    fn test_invalid_hostless_url() {
        assert!(!is_valid_url("mailto:user@example.com"));
        assert!(!is_valid_url("data:text/html,hello"));
    }

    #[test]
    fn test_invalid_garbage() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_webpage_extensions_accepted() {
        for ext in WEBPAGE_EXTENSIONS {
            let url = format!("https://example.com/page{}", ext);
            assert!(is_webpage(&url), "rejected {}", ext);
        }
    }

    #[test]
    fn test_extensionless_path_accepted() {
        assert!(is_webpage("https://example.com/about"));
        assert!(is_webpage("https://example.com/"));
        assert!(is_webpage("https://example.com/a/b/c"));
    }

    #[test]
    fn test_asset_extensions_rejected() {
        assert!(!is_webpage("https://example.com/logo.png"));
        assert!(!is_webpage("https://example.com/paper.pdf"));
        assert!(!is_webpage("https://example.com/style.css"));
        assert!(!is_webpage("https://example.com/app.js"));
        assert!(!is_webpage("https://example.com/archive.tar.gz"));
    }

    #[test]
    fn test_extension_case_folded() {
        assert!(is_webpage("https://example.com/PAGE.HTML"));
        assert!(!is_webpage("https://example.com/LOGO.PNG"));
    }

    #[test]
    fn test_dot_in_directory_rejected() {
        // Any dot anywhere in the path disqualifies an extensionless leaf
        assert!(!is_webpage("https://example.com/v1.2/about"));
    }

    #[test]
    fn test_unparseable_rejected() {
        assert!(!is_webpage("not a url"));
    }
}
