//! Reachability flags and the transport classifier.

use std::fmt;

/// Reachability of the default route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReachabilityStatus {
    /// No usable route.
    #[default]
    NotReachable,
    /// Reachable over a local-area (WiFi/Ethernet, unmetered) transport.
    ReachableViaWiFi,
    /// Reachable over a wide-area (cellular, metered) transport.
    ReachableViaCarrier,
}

impl ReachabilityStatus {
    /// Returns `true` for either reachable variant.
    pub fn is_reachable(&self) -> bool {
        !matches!(self, ReachabilityStatus::NotReachable)
    }

    /// Returns `true` if traffic would go over a metered transport.
    pub fn is_metered(&self) -> bool {
        matches!(self, ReachabilityStatus::ReachableViaCarrier)
    }
}

impl fmt::Display for ReachabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReachabilityStatus::NotReachable => write!(f, "not reachable"),
            ReachabilityStatus::ReachableViaWiFi => write!(f, "reachable via WiFi"),
            ReachabilityStatus::ReachableViaCarrier => write!(f, "reachable via carrier"),
        }
    }
}

/// The hints a route probe reports for its target.
///
/// Platforms hand these out as a bitset; [`from_bits`](Self::from_bits) maps
/// the bits the classifier cares about and ignores the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReachabilityFlags {
    /// A route exists under the current network configuration.
    pub is_reachable: bool,
    /// A connection must be established first (e.g. on-demand dial-up).
    pub requires_connection: bool,
    /// The route goes over a wide-area (cellular) transport.
    pub is_wide_area: bool,
}

impl ReachabilityFlags {
    /// Bit set when the target is reachable with the current configuration.
    pub const REACHABLE: u32 = 1 << 1;
    /// Bit set when a connection has to be brought up first.
    pub const CONNECTION_REQUIRED: u32 = 1 << 2;
    /// Bit set when the route uses a WWAN interface.
    pub const IS_WWAN: u32 = 1 << 18;

    /// Creates flags from the three hints.
    pub const fn new(is_reachable: bool, requires_connection: bool, is_wide_area: bool) -> Self {
        Self {
            is_reachable,
            requires_connection,
            is_wide_area,
        }
    }

    /// Flags describing a route that does not exist.
    pub const fn unreachable() -> Self {
        Self::new(false, false, false)
    }

    /// Maps a platform reachability bitset.
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            is_reachable: bits & Self::REACHABLE != 0,
            requires_connection: bits & Self::CONNECTION_REQUIRED != 0,
            is_wide_area: bits & Self::IS_WWAN != 0,
        }
    }

    /// The bitset equivalent of these flags.
    pub const fn bits(&self) -> u32 {
        let mut bits = 0;
        if self.is_reachable {
            bits |= Self::REACHABLE;
        }
        if self.requires_connection {
            bits |= Self::CONNECTION_REQUIRED;
        }
        if self.is_wide_area {
            bits |= Self::IS_WWAN;
        }
        bits
    }
}

/// Classifies route flags into a [`ReachabilityStatus`].
///
/// A wide-area route counts as connected even when the platform reports that
/// a connection is still required: the network stack brings the WAN up on its
/// own as soon as traffic is sent.
pub fn classify(flags: ReachabilityFlags) -> ReachabilityStatus {
    if !flags.is_reachable {
        return ReachabilityStatus::NotReachable;
    }

    let connection_available = !flags.requires_connection || flags.is_wide_area;
    if !connection_available {
        return ReachabilityStatus::NotReachable;
    }

    if flags.is_wide_area {
        ReachabilityStatus::ReachableViaCarrier
    } else {
        ReachabilityStatus::ReachableViaWiFi
    }
}
