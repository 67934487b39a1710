//! Waypoint: indoor routing support.
//!
//! - **Reachability** (feature `networking`, on by default): decide whether
//!   a default route is usable and whether it is metered, to gate online
//!   basemaps and routing services. See [`ReachabilityMonitor`].
//! - **Route lists**: [`model::RouteListModel`] turns route stops into row
//!   labels with fail-safe fallbacks.
//! - **Settings**: [`RouteSettings`], the read-only configuration both use.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use waypoint::{ReachabilityMonitor, RouteSettings};
//! use waypoint::model::RouteListModel;
//!
//! let monitor = Arc::new(ReachabilityMonitor::system());
//! let settings = Arc::new(RouteSettings::load("settings.toml")?);
//!
//! if !monitor.is_network_available() {
//!     println!("offline: using the local mobile map package");
//! }
//!
//! let route = RouteListModel::new(Some(vec![None, None]), settings);
//! println!("{}", route.row_content(0).primary_text);
//! ```

pub mod model;
pub mod settings;

pub use settings::{RouteSettings, SettingsError, SettingsResult};
pub use waypoint_core::{ConnectionId, Signal};

#[cfg(feature = "networking")]
pub use waypoint_net as net;

#[cfg(feature = "networking")]
pub use waypoint_net::{ReachabilityMonitor, ReachabilityStatus};
