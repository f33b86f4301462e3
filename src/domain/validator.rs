//! Outbound URL reachability validation.

use async_trait::async_trait;

/// Pluggable probe deciding whether a URL may be shortened.
///
/// Returns a plain boolean: malformed input, unsupported schemes, network
/// failures, and error status codes are all reported the same way. The write
/// path turns `false` into a validation error without distinguishing the
/// cause.
///
/// # Implementations
///
/// - [`crate::infrastructure::validation::HttpReachabilityValidator`] -
///   HTTP HEAD probe with a bounded timeout
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReachabilityValidator: Send + Sync {
    /// Returns true if `url` is well-formed, absolute HTTP(S), and live.
    async fn is_reachable(&self, url: &str) -> bool;
}
