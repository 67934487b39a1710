//! Signal/slot notifications for Waypoint.
//!
//! A [`Signal<Args>`] holds any number of connected slots (closures). Emitting
//! the signal invokes every slot on the emitting thread, in connection order.
//! Monitors use signals to publish state changes (for example a reachability
//! status change) without knowing who listens.
//!
//! # Example
//!
//! ```
//! use waypoint_core::Signal;
//!
//! let status_changed = Signal::<bool>::new();
//!
//! let id = status_changed.connect(|online| {
//!     println!("online: {online}");
//! });
//!
//! status_changed.emit(true);
//! status_changed.disconnect(id);
//! ```
//!
//! Slots run synchronously inside `emit`. A slot may connect or disconnect
//! slots on the same signal; the change applies to the next emission.

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Identifies one signal-slot connection.
    ///
    /// Pass it to [`Signal::disconnect`] to remove the slot again.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal with any number of connected slots.
///
/// `Signal<Args>` is `Send + Sync`; it is usually shared behind an `Arc` so
/// that background watchers can emit while consumers connect.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// Returns a [`ConnectionId`] that can later be passed to
    /// [`disconnect`](Self::disconnect).
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a slot. Returns `false` if the id was unknown.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect every slot.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Emit the signal, invoking every connected slot with `args`.
    #[tracing::instrument(skip_all, target = "waypoint_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        // Snapshot the slots so they run without the lock held.
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(&args);
        }
    }
}
