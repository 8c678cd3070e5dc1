use crate::UrlError;
use url::Url;

/// A canonicalized URL plus the components it was assembled from.
///
/// Guarantees: the scheme is `https`, the netloc is non-empty and lowercase,
/// and a bare two-label host carries a `www.` prefix. The string form is the
/// deduplication and scope-comparison key for a whole crawl.
///
/// The path is kept exactly as entered (an empty path stays empty), which is
/// why this type holds a string assembled by hand rather than a [`Url`]: the
/// `url` crate always renders an empty path as `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl {
    full: String,
    netloc: String,
    path: String,
}

impl NormalizedUrl {
    /// The canonical string form
    pub fn as_str(&self) -> &str {
        &self.full
    }

    /// Host plus optional port
    pub fn netloc(&self) -> &str {
        &self.netloc
    }

    /// Path component, possibly empty
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Consumes self, returning the canonical string
    pub fn into_string(self) -> String {
        self.full
    }
}

impl std::fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Normalizes a user-entered URL string into its canonical crawl form
///
/// # Normalization Steps
///
/// 1. Treat scheme-less input as scheme-relative so the host parses as a
///    netloc instead of a path
/// 2. Force the scheme to `https` regardless of input scheme
/// 3. Lowercase the netloc
/// 4. Prepend `www.` when the host does not already start with it and
///    contains exactly one `.` (an apex two-label domain; existing
///    subdomains are left alone)
/// 5. Reassemble with exactly one `://`; path, query, and fragment are
///    carried over verbatim
///
/// No network access; pure string transform. Input that cannot be parsed
/// into a well-formed host is rejected.
///
/// # Examples
///
/// ```
/// use linkharvest::url::normalize_url;
///
/// let url = normalize_url("example.com").unwrap();
/// assert_eq!(url.as_str(), "https://www.example.com");
///
/// let url = normalize_url("http://sub.example.com/path").unwrap();
/// assert_eq!(url.as_str(), "https://sub.example.com/path");
/// ```
pub fn normalize_url(input: &str) -> Result<NormalizedUrl, UrlError> {
    // Step 1: Strip any scheme; a scheme-less input is read as "//input"
    let rest = match input.split_once("://") {
        Some((_, rest)) => rest,
        None => input.strip_prefix("//").unwrap_or(input),
    };

    // Netloc runs up to the first path, query, or fragment delimiter
    let netloc_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (netloc, tail) = rest.split_at(netloc_end);

    if netloc.is_empty() {
        return Err(UrlError::MissingNetloc(input.to_string()));
    }

    // Steps 3 & 4: lowercase, then the www. rule
    let netloc = netloc.to_lowercase();
    let netloc = if !netloc.starts_with("www.") && netloc.matches('.').count() == 1 {
        format!("www.{}", netloc)
    } else {
        netloc
    };

    // Step 5: reassemble
    let full = format!("https://{}{}", netloc, tail);

    // The assembled string must survive a real URL parse with a host; this
    // is what rejects garbage like "not a url"
    let parsed = Url::parse(&full).map_err(|e| UrlError::Invalid {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingNetloc(input.to_string()));
    }

    let path_end = tail.find(['?', '#']).unwrap_or(tail.len());
    let path = tail[..path_end].to_string();

    Ok(NormalizedUrl {
        full,
        netloc,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_scheme_and_www() {
        let result = normalize_url("example.com").unwrap();
        assert_eq!(result.as_str(), "https://www.example.com");
    }

    #[test]
    fn test_bare_domain_with_path() {
        let result = normalize_url("example.com/about").unwrap();
        assert_eq!(result.as_str(), "https://www.example.com/about");
    }

    #[test]
    fn test_http_forced_to_https() {
        let result = normalize_url("http://example.com/page").unwrap();
        assert_eq!(result.as_str(), "https://www.example.com/page");
    }

    #[test]
    fn test_subdomain_left_alone() {
        let result = normalize_url("http://sub.example.com/path").unwrap();
        assert_eq!(result.as_str(), "https://sub.example.com/path");
    }

    #[test]
    fn test_existing_www_not_doubled() {
        let result = normalize_url("www.example.com").unwrap();
        assert_eq!(result.as_str(), "https://www.example.com");
    }

    #[test]
    fn test_scheme_relative_input() {
        let result = normalize_url("//example.com/page").unwrap();
        assert_eq!(result.as_str(), "https://www.example.com/page");
    }

    #[test]
    fn test_query_and_fragment_preserved() {
        let result = normalize_url("example.com/page?a=1&b=2#top").unwrap();
        assert_eq!(result.as_str(), "https://www.example.com/page?a=1&b=2#top");
    }

    #[test]
    fn test_host_lowercased() {
        let result = normalize_url("HTTPS://WWW.EXAMPLE.COM/Page").unwrap();
        assert_eq!(result.as_str(), "https://www.example.com/Page");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "example.com",
            "www.example.com/a/b",
            "http://sub.example.com/path?q=1",
            "blog.example.co.uk",
        ];
        for input in inputs {
            let once = normalize_url(input).unwrap();
            let twice = normalize_url(once.as_str()).unwrap();
            assert_eq!(once, twice, "not idempotent for {}", input);
        }
    }

    #[test]
    fn test_netloc_and_path_components() {
        let result = normalize_url("example.com/docs/intro?x=1").unwrap();
        assert_eq!(result.netloc(), "www.example.com");
        assert_eq!(result.path(), "/docs/intro");
    }

    #[test]
    fn test_empty_path_component() {
        let result = normalize_url("example.com").unwrap();
        assert_eq!(result.path(), "");
    }

    #[test]
    fn test_port_kept_in_netloc() {
        let result = normalize_url("localhost:8080/admin").unwrap();
        assert_eq!(result.as_str(), "https://localhost:8080/admin");
        assert_eq!(result.netloc(), "localhost:8080");
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = normalize_url("");
        assert!(matches!(result, Err(UrlError::MissingNetloc(_))));
    }

    #[test]
    fn test_path_only_input_rejected() {
        let result = normalize_url("/just/a/path");
        assert!(matches!(result, Err(UrlError::MissingNetloc(_))));
    }

    #[test]
    fn test_garbage_input_rejected() {
        let result = normalize_url("not a url");
        assert!(matches!(result, Err(UrlError::Invalid { .. })));
    }

    #[test]
    fn test_three_label_domain_no_www() {
        let result = normalize_url("deep.sub.example.com").unwrap();
        assert_eq!(result.as_str(), "https://deep.sub.example.com");
    }
}
