//! Error types for the networking module.

use std::net::IpAddr;

/// Network-specific errors.
///
/// None of these reach callers of the reachability queries; the monitor
/// recovers from each of them locally by reporting `NotReachable`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The platform could not produce a route probe or its flags.
    #[error("Route probe unavailable: {0}")]
    ProbeUnavailable(String),

    /// The probe could not be registered for asynchronous updates.
    #[error("Failed to register route probe for updates: {0}")]
    Registration(String),

    /// The probe target is not a default-route (unspecified) address.
    #[error("Unsupported probe target {0}: only the default route can be probed")]
    UnsupportedTarget(IpAddr),
}

/// A specialized Result type for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;
