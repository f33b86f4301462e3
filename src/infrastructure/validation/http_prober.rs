//! HTTP HEAD reachability probe.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::domain::validator::ReachabilityValidator;

/// Probes target URLs with an HTTP HEAD request.
///
/// A URL passes when it parses as absolute HTTP(S) and the probe receives a
/// 2xx or 3xx status within the configured timeout. Everything else,
/// including connect errors and timeouts, fails the probe. The timeout bounds
/// both connect and total request time, independent of the caller.
pub struct HttpReachabilityValidator {
    client: reqwest::Client,
}

impl HttpReachabilityValidator {
    /// Builds the probe with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ReachabilityValidator for HttpReachabilityValidator {
    async fn is_reachable(&self, url: &str) -> bool {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("Rejecting malformed URL {:?}: {}", url, e);
                return false;
            }
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            debug!("Rejecting non-HTTP(S) URL {:?}", url);
            return false;
        }

        match self.client.head(parsed).send().await {
            Ok(response) => {
                let status = response.status();
                status.is_success() || status.is_redirection()
            }
            Err(e) => {
                debug!("Probe failed for {}: {}", url, e);
                false
            }
        }
    }
}
