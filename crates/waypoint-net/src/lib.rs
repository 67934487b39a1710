//! Networking module for Waypoint.
//!
//! This crate answers one question for the rest of the application: is there a
//! usable default route right now, and if so, over which class of transport?
//!
//! - **Reachability Monitor**: owns a single probe bound to the default route
//!   and classifies its flags into a [`ReachabilityStatus`]
//! - **Route probes**: the [`RouteProbe`] trait is the platform seam;
//!   [`SystemRouteProbe`] implements it with `netdev` and `netwatcher`
//!
//! # Example
//!
//! ```ignore
//! use waypoint_net::{ReachabilityMonitor, ReachabilityStatus};
//!
//! let monitor = ReachabilityMonitor::system();
//!
//! if !monitor.is_network_available() {
//!     println!("offline: disabling online basemaps");
//! }
//!
//! monitor.status_changed.connect(|status| {
//!     println!("reachability is now {status}");
//! });
//! ```

mod error;
pub mod reachability;

pub use error::{NetworkError, Result};

pub use reachability::{
    DEFAULT_ROUTE, DefaultRoute, ReachabilityFlags, ReachabilityMonitor, ReachabilityStatus,
    RouteProbe, SystemProbeHandle, SystemRouteProbe, TransportClass, UpdateContext, classify,
};
