use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("reachability check timed out after {0:?}")]
    Timeout(Duration),

    #[error("URL is not reachable: {0}")]
    Unreachable(String),
}

/// Decides whether a resource URL currently resolves. Implementations should
/// honour `timeout` themselves; the aggregator enforces it as well.
#[async_trait]
pub trait UrlReachabilityChecker: Send + Sync {
    async fn check(&self, url: &str, timeout: Duration) -> bool;
}

/// HEAD request, redirects followed; any status below 400 counts as reachable.
pub struct HttpReachabilityChecker {
    client: Client,
}

impl HttpReachabilityChecker {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UrlReachabilityChecker for HttpReachabilityChecker {
    async fn check(&self, url: &str, timeout: Duration) -> bool {
        match self.client.head(url).timeout(timeout).send().await {
            Ok(response) => {
                let status = response.status();
                debug!("HEAD {url} -> {status}");
                status.as_u16() < 400
            }
            Err(e) => {
                debug!("HEAD {url} failed: {e}");
                false
            }
        }
    }
}

/// Runs one check under a hard deadline.
pub async fn verify_url(
    checker: &dyn UrlReachabilityChecker,
    url: &str,
    timeout: Duration,
) -> Result<(), ValidationError> {
    match tokio::time::timeout(timeout, checker.check(url, timeout)).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(ValidationError::Unreachable(url.to_string())),
        Err(_) => Err(ValidationError::Timeout(timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedChecker(bool);

    #[async_trait]
    impl UrlReachabilityChecker for FixedChecker {
        async fn check(&self, _url: &str, _timeout: Duration) -> bool {
            self.0
        }
    }

    struct HangingChecker;

    #[async_trait]
    impl UrlReachabilityChecker for HangingChecker {
        async fn check(&self, _url: &str, _timeout: Duration) -> bool {
            std::future::pending::<bool>().await
        }
    }

    #[tokio::test]
    async fn test_verify_url_reachable() {
        let result = verify_url(&FixedChecker(true), "https://a.test", Duration::from_secs(1)).await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_verify_url_unreachable() {
        let result = verify_url(&FixedChecker(false), "https://a.test", Duration::from_secs(1)).await;
        assert_eq!(
            result,
            Err(ValidationError::Unreachable("https://a.test".to_string()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_url_times_out() {
        let timeout = Duration::from_secs(5);
        let result = verify_url(&HangingChecker, "https://slow.test", timeout).await;
        assert_eq!(result, Err(ValidationError::Timeout(timeout)));
    }
}
