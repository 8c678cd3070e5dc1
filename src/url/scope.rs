use crate::url::{extract_netloc, NormalizedUrl};
use url::Url;

/// Which part of a site a crawl is allowed to wander
///
/// Each variant carries exactly the fields its membership check needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlScope {
    /// Follow links anywhere on the seed's domain
    WholeDomain {
        /// The seed's netloc
        netloc: String,
    },

    /// Follow links only under the seed's netloc and path prefix
    SubdomainPrefix {
        /// The seed's netloc
        netloc: String,

        /// The seed's path
        path: String,
    },
}

impl CrawlScope {
    /// Whole-domain scope for a normalized seed
    pub fn whole_domain(seed: &NormalizedUrl) -> Self {
        CrawlScope::WholeDomain {
            netloc: seed.netloc().to_string(),
        }
    }

    /// Subdomain-and-path-prefix scope for a normalized seed
    pub fn subdomain_prefix(seed: &NormalizedUrl) -> Self {
        CrawlScope::SubdomainPrefix {
            netloc: seed.netloc().to_string(),
            path: seed.path().to_string(),
        }
    }

    /// The string a candidate's netloc+path must contain to be in scope
    fn match_key(&self) -> String {
        match self {
            CrawlScope::WholeDomain { netloc } => netloc.clone(),
            CrawlScope::SubdomainPrefix { netloc, path } => format!("{}{}", netloc, path),
        }
    }

    /// Scope membership: substring containment of the match key in the
    /// candidate's netloc+path.
    ///
    /// The containment is deliberately loose: `example.com` also matches
    /// `sub.example.com` and any host string that embeds the domain. This
    /// mirrors the upstream behavior the result sets are compared against;
    /// tightening it would silently change which pages are collected.
    pub fn contains(&self, candidate: &str) -> bool {
        let parsed = match Url::parse(candidate) {
            Ok(url) => url,
            Err(_) => return false,
        };
        let netloc = match extract_netloc(&parsed) {
            Some(netloc) => netloc,
            None => return false,
        };

        format!("{}{}", netloc, parsed.path()).contains(&self.match_key())
    }
}
