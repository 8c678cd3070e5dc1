use url::Url;

/// Extracts the netloc (lowercase host plus optional port) from a parsed URL
///
/// Default ports are elided by the `url` crate, so `https://example.com:443`
/// yields `example.com` while `http://127.0.0.1:8080` keeps its port.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use linkharvest::url::extract_netloc;
///
/// let url = Url::parse("https://Example.COM/path").unwrap();
/// assert_eq!(extract_netloc(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(extract_netloc(&url), Some("127.0.0.1:8080".to_string()));
/// ```
pub fn extract_netloc(url: &Url) -> Option<String> {
    url.host_str().map(|host| {
        let host = host.to_lowercase();
        match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host,
        }
    })
}
