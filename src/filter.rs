use regex::Regex;
use url::Url;

/// Asset extensions that are never worth fetching for link discovery
const DEFAULT_EXCLUDE_PATTERN: &str =
    r"\.(jpg|jpeg|png|gif|css|js|ico|svg|woff|woff2|ttf|eot|pdf)$";

/// Resolves a possibly-relative href against a base URL into canonical form.
///
/// Fragments are always dropped, so two links that differ only in fragment
/// compare equal. Malformed input yields `None`, never an error.
pub fn normalize(href: &str, base: &Url) -> Option<Url> {
    let mut url = base.join(href).ok()?;
    url.set_fragment(None);
    Some(url)
}

/// Scope rules for one crawl: the host to stay on plus exclude patterns
#[derive(Debug, Clone)]
pub struct UrlFilterConfig {
    /// Host the crawl is pinned to (byte-compared, no subdomain matching)
    pub required_host: String,

    /// Regex patterns for URLs to exclude
    pub exclude_patterns: Vec<String>,
}

impl UrlFilterConfig {
    /// Scope config for a seed host with the stock asset exclusions
    pub fn for_host(host: &str) -> Self {
        Self {
            required_host: host.to_string(),
            exclude_patterns: vec![DEFAULT_EXCLUDE_PATTERN.to_string()],
        }
    }
}

/// URL filter that decides which discovered links are eligible for crawling
#[derive(Debug)]
pub struct UrlFilter {
    config: UrlFilterConfig,
    exclude_regexes: Vec<Regex>,
}

impl UrlFilter {
    /// Create a new URL filter from configuration
    pub fn new(config: UrlFilterConfig) -> Result<Self, regex::Error> {
        let mut exclude_regexes = Vec::with_capacity(config.exclude_patterns.len());
        for pattern in &config.exclude_patterns {
            exclude_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            config,
            exclude_regexes,
        })
    }

    /// True iff the URL's host is byte-equal to the seed's host.
    ///
    /// Subdomains do not match and the scheme is not compared.
    pub fn same_origin(&self, url: &Url) -> bool {
        url.host_str() == Some(self.config.required_host.as_str())
    }

    /// Determine if a URL should be crawled based on all filtering rules
    pub fn should_crawl(&self, url: &Url) -> bool {
        // Only web pages are fetchable
        if !matches!(url.scheme(), "http" | "https") {
            return false;
        }

        if !self.same_origin(url) {
            return false;
        }

        let url_str = url.as_str();
        for regex in &self.exclude_regexes {
            if regex.is_match(url_str) {
                return false;
            }
        }

        true
    }
}
