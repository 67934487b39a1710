//! The platform seam for reachability probes.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use waypoint_core::Signal;

use super::flags::ReachabilityFlags;
use crate::error::Result;

/// The wildcard target that stands for "any outbound default route".
pub const DEFAULT_ROUTE: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Platform connectivity probe.
///
/// A probe hands out handles bound to a target address. Once a handle is
/// registered with an [`UpdateContext`], the platform refreshes its flags in
/// the background and [`try_get_flags`](Self::try_get_flags) becomes a cheap
/// cache read. Without registration, `try_get_flags` has to query the
/// platform synchronously.
///
/// Implementations must be safe for concurrent `try_get_flags` calls: the
/// monitor does not serialize queries.
pub trait RouteProbe: Send + Sync + 'static {
    /// The platform handle for one probed target.
    type Handle: Send + Sync + 'static;

    /// Creates a probe handle for `target`.
    fn create_route_probe(&self, target: IpAddr) -> Result<Self::Handle>;

    /// Starts delivering asynchronous flag updates for `handle` to `context`.
    fn register_for_updates(&self, handle: &Self::Handle, context: &UpdateContext) -> Result<()>;

    /// Returns the current flags, or `None` if the platform has none yet.
    fn try_get_flags(&self, handle: &Self::Handle) -> Option<ReachabilityFlags>;
}

/// Where a registered probe delivers flag updates.
///
/// Cloning the context shares the underlying signal.
#[derive(Clone, Default)]
pub struct UpdateContext {
    flags_changed: Arc<Signal<ReachabilityFlags>>,
}

impl UpdateContext {
    /// Creates a context with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers a fresh flag snapshot to every listener.
    pub fn notify(&self, flags: ReachabilityFlags) {
        self.flags_changed.emit(flags);
    }

    /// The signal emitted by [`notify`](Self::notify).
    pub fn flags_changed(&self) -> &Signal<ReachabilityFlags> {
        &self.flags_changed
    }
}

impl std::fmt::Debug for UpdateContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateContext")
            .field("listeners", &self.flags_changed.connection_count())
            .finish()
    }
}
