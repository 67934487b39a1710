//! Logging facilities for Waypoint.
//!
//! Waypoint uses the `tracing` crate for instrumentation. Library code never
//! installs a subscriber; applications do that themselves:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("waypoint_net::reachability=debug")
//!     .init();
//! ```
//!
//! Every event is emitted with one of the [`targets`] below, so each
//! subsystem can be filtered independently.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "waypoint_core::signal";
    /// Reachability monitor and route probes.
    pub const REACHABILITY: &str = "waypoint_net::reachability";
    /// Item models (route list adapter).
    pub const MODEL: &str = "waypoint::model";
    /// Settings loading.
    pub const SETTINGS: &str = "waypoint::settings";
}
