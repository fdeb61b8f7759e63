use std::fmt;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Why a fetch produced no page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The request did not complete within the configured timeout
    Timeout,
    /// The server answered with a non-2xx status
    Status(u16),
    /// Transport-level failure (DNS, connection, TLS, body read)
    Network(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Timeout => write!(f, "request timed out"),
            FetchFailure::Status(code) => write!(f, "HTTP {}", code),
            FetchFailure::Network(msg) => write!(f, "network error: {}", msg),
        }
    }
}

/// Result of fetching one page.
///
/// Failure is data here, never an error: the scheduler treats a `Failed`
/// outcome as "zero links found" and moves on.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// A 2xx response with its raw body
    Page { url: Url, body: String },
    /// Anything else: timeout, non-2xx status, or transport failure
    Failed { url: Url, reason: FetchFailure },
}

/// Fetches pages for the scheduler.
///
/// Abstracted behind a trait so tests can drive the crawl with an
/// instrumented fake instead of the network.
pub trait Fetch {
    fn fetch(&self, url: Url) -> impl Future<Output = FetchOutcome> + Send;
}

/// HTTP fetcher backed by a pooled reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with a per-request timeout and User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    fn classify(error: reqwest::Error) -> FetchFailure {
        if error.is_timeout() {
            FetchFailure::Timeout
        } else {
            FetchFailure::Network(error.to_string())
        }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: Url) -> impl Future<Output = FetchOutcome> + Send {
        let client = self.client.clone();

        async move {
            let response = match client.get(url.clone()).send().await {
                Ok(response) => response,
                Err(e) => {
                    return FetchOutcome::Failed {
                        url,
                        reason: Self::classify(e),
                    };
                }
            };

            let status = response.status();
            if !status.is_success() {
                return FetchOutcome::Failed {
                    url,
                    reason: FetchFailure::Status(status.as_u16()),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Page { url, body },
                Err(e) => FetchOutcome::Failed {
                    url,
                    reason: Self::classify(e),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        assert_eq!(FetchFailure::Timeout.to_string(), "request timed out");
        assert_eq!(FetchFailure::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            FetchFailure::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
    }
}
