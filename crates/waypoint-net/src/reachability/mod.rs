//! Default-route reachability for Waypoint.
//!
//! This module decides whether the device has a usable outbound route and
//! which class of transport carries it.
//!
//! # Pieces
//!
//! - [`ReachabilityFlags`]: the hints a platform probe reports for a route
//! - [`classify`]: pure mapping from flags to [`ReachabilityStatus`]
//! - [`RouteProbe`]: the platform seam (create, register, fetch flags)
//! - [`SystemRouteProbe`]: `netdev` snapshots plus `netwatcher` updates
//! - [`ReachabilityMonitor`]: owns one default-route handle and answers
//!   [`is_network_available`](ReachabilityMonitor::is_network_available) /
//!   [`current_status`](ReachabilityMonitor::current_status)
//!
//! # Classification
//!
//! | reachable | connection required | wide area | status |
//! |-----------|---------------------|-----------|--------|
//! | no        | any                 | any       | `NotReachable` |
//! | yes       | no                  | no        | `ReachableViaWiFi` |
//! | yes       | yes                 | no        | `NotReachable` |
//! | yes       | any                 | yes       | `ReachableViaCarrier` |
//!
//! # Example
//!
//! ```ignore
//! use waypoint_net::reachability::{ReachabilityMonitor, ReachabilityStatus};
//!
//! let monitor = ReachabilityMonitor::system();
//! match monitor.current_status() {
//!     ReachabilityStatus::NotReachable => println!("offline"),
//!     ReachabilityStatus::ReachableViaWiFi => println!("online"),
//!     ReachabilityStatus::ReachableViaCarrier => println!("online (metered)"),
//! }
//! ```

mod flags;
mod monitor;
mod probe;
mod route;
mod system;

pub use flags::{ReachabilityFlags, ReachabilityStatus, classify};
pub use monitor::ReachabilityMonitor;
pub use probe::{DEFAULT_ROUTE, RouteProbe, UpdateContext};
pub use route::{DefaultRoute, TransportClass, has_cellular_prefix};
pub use system::{SystemProbeHandle, SystemRouteProbe};
