//! Core systems for Waypoint.
//!
//! This crate provides the foundational pieces shared by the other Waypoint
//! crates:
//!
//! - **Signal/Slot System**: type-safe change notifications
//! - **Logging**: `tracing` target names for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use waypoint_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
