//! Outbound reachability probing.

mod http_prober;

pub use http_prober::HttpReachabilityValidator;
