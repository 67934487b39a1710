//! The reachability monitor.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};
use waypoint_core::Signal;
use waypoint_core::logging::targets;

use super::flags::{ReachabilityFlags, ReachabilityStatus, classify};
use super::probe::{DEFAULT_ROUTE, RouteProbe, UpdateContext};
use super::system::SystemRouteProbe;
use crate::error::Result;

enum ProbeState<H> {
    /// No handle yet, or the last creation attempt failed.
    Pending,
    Open(Arc<H>),
    Closed,
}

/// Tracks whether the default route is usable, and over which transport.
///
/// The monitor owns exactly one probe handle bound to [`DEFAULT_ROUTE`]. The
/// handle is opened by [`new`](Self::new) and registered for background
/// updates; queries then read the probe's cached flags and classify them.
/// Queries never block on the network and never fail: whenever the probe
/// cannot give a definitive answer the monitor reports
/// [`ReachabilityStatus::NotReachable`].
///
/// Create one monitor at startup and share it (for example behind an `Arc`).
///
/// # Example
///
/// ```ignore
/// use waypoint_net::ReachabilityMonitor;
///
/// let monitor = ReachabilityMonitor::system();
///
/// monitor.status_changed.connect(|status| {
///     println!("reachability changed: {status}");
/// });
///
/// if monitor.is_network_available() {
///     println!("online via {}", monitor.current_status());
/// }
/// ```
pub struct ReachabilityMonitor<P: RouteProbe = SystemRouteProbe> {
    /// Signal emitted when a background update changes the status.
    pub status_changed: Arc<Signal<ReachabilityStatus>>,

    probe: P,
    state: RwLock<ProbeState<P::Handle>>,
    context: UpdateContext,
    registered: AtomicBool,
    creation_failures: AtomicUsize,
    last_status: Arc<Mutex<Option<ReachabilityStatus>>>,
}

impl ReachabilityMonitor<SystemRouteProbe> {
    /// Create a monitor over the operating system's default route.
    pub fn system() -> Self {
        Self::new(SystemRouteProbe)
    }
}

impl<P: RouteProbe> ReachabilityMonitor<P> {
    /// Create a monitor over `probe` and open its default-route handle.
    ///
    /// Failing to open the handle is logged, not returned; the next query
    /// tries again.
    pub fn new(probe: P) -> Self {
        let status_changed = Arc::new(Signal::new());
        let last_status = Arc::new(Mutex::new(None));
        let context = UpdateContext::new();

        let signal = Arc::clone(&status_changed);
        let last = Arc::clone(&last_status);
        context.flags_changed().connect(move |flags| {
            let status = classify(*flags);
            let previous = last.lock().replace(status);
            if previous.is_some_and(|previous| previous != status) {
                tracing::debug!(
                    target: targets::REACHABILITY,
                    %status,
                    "reachability changed"
                );
                signal.emit(status);
            }
        });

        let monitor = Self {
            status_changed,
            probe,
            state: RwLock::new(ProbeState::Pending),
            context,
            registered: AtomicBool::new(false),
            creation_failures: AtomicUsize::new(0),
            last_status,
        };
        let _ = monitor.handle();
        monitor
    }

    /// Returns `true` if the default route is usable right now.
    pub fn is_network_available(&self) -> bool {
        self.current_status().is_reachable()
    }

    /// Classify the current default-route flags.
    pub fn current_status(&self) -> ReachabilityStatus {
        let status = self
            .flags()
            .map(classify)
            .unwrap_or(ReachabilityStatus::NotReachable);
        tracing::trace!(target: targets::REACHABILITY, %status, "reachability query");
        status
    }

    /// The raw flags behind [`current_status`](Self::current_status).
    ///
    /// `None` when the probe is closed, could not be created, or has not
    /// resolved the route yet.
    pub fn flags(&self) -> Option<ReachabilityFlags> {
        let handle = self.handle()?;
        let flags = self.probe.try_get_flags(&handle);
        if flags.is_none() {
            tracing::debug!(
                target: targets::REACHABILITY,
                "route probe returned no flags, treating as not reachable"
            );
        }
        flags
    }

    /// Whether the probe handle is open.
    pub fn is_open(&self) -> bool {
        matches!(*self.state.read(), ProbeState::Open(_))
    }

    /// Whether the handle receives background updates. When `false`, every
    /// query asks the platform synchronously.
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::SeqCst)
    }

    /// The probe this monitor queries.
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Release the probe handle.
    ///
    /// Queries made after closing report `NotReachable`; the handle is never
    /// reopened. Updates the probe still delivers are ignored.
    pub fn close(&self) {
        let previous = std::mem::replace(&mut *self.state.write(), ProbeState::Closed);
        self.registered.store(false, Ordering::SeqCst);
        self.context.flags_changed().disconnect_all();
        if matches!(previous, ProbeState::Open(_)) {
            tracing::debug!(target: targets::REACHABILITY, "closed default route probe");
        }
    }

    /// Returns the open handle, creating it on first use.
    fn handle(&self) -> Option<Arc<P::Handle>> {
        if let ProbeState::Open(handle) = &*self.state.read() {
            return Some(Arc::clone(handle));
        }

        let mut state = self.state.write();
        match &*state {
            ProbeState::Open(handle) => Some(Arc::clone(handle)),
            ProbeState::Closed => None,
            ProbeState::Pending => match self.open() {
                Ok(handle) => {
                    self.creation_failures.store(0, Ordering::SeqCst);
                    *state = ProbeState::Open(Arc::clone(&handle));
                    Some(handle)
                }
                Err(err) => {
                    let failures = self.creation_failures.fetch_add(1, Ordering::SeqCst) + 1;
                    if failures == 1 {
                        tracing::warn!(
                            target: targets::REACHABILITY,
                            error = %err,
                            "failed to create default route probe"
                        );
                    } else {
                        tracing::debug!(
                            target: targets::REACHABILITY,
                            error = %err,
                            failures,
                            "default route probe still unavailable"
                        );
                    }
                    None
                }
            },
        }
    }

    fn open(&self) -> Result<Arc<P::Handle>> {
        let handle = Arc::new(self.probe.create_route_probe(DEFAULT_ROUTE)?);
        tracing::debug!(target: targets::REACHABILITY, target_addr = %DEFAULT_ROUTE, "created route probe");

        match self.probe.register_for_updates(&handle, &self.context) {
            Ok(()) => {
                self.registered.store(true, Ordering::SeqCst);
                tracing::debug!(target: targets::REACHABILITY, "route probe registered for updates");
            }
            Err(err) => {
                tracing::warn!(
                    target: targets::REACHABILITY,
                    error = %err,
                    "route probe registration failed, falling back to synchronous queries"
                );
            }
        }

        let initial = self
            .probe
            .try_get_flags(&handle)
            .map(classify)
            .unwrap_or(ReachabilityStatus::NotReachable);
        self.last_status.lock().get_or_insert(initial);

        Ok(handle)
    }
}

impl<P: RouteProbe> Drop for ReachabilityMonitor<P> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<P: RouteProbe> std::fmt::Debug for ReachabilityMonitor<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReachabilityMonitor")
            .field("open", &self.is_open())
            .field("registered", &self.is_registered())
            .finish()
    }
}
