//! Default route snapshots.

use std::fmt;

use netdev::interface::InterfaceType;

use super::flags::ReachabilityFlags;

/// Interface name prefixes used by cellular modems across platforms
/// (Linux/Windows `wwan`, Android `rmnet`/`ccmni`, iOS `pdp_ip`).
const CELLULAR_PREFIXES: &[&str] = &["wwan", "rmnet", "pdp_ip", "ccmni"];

/// Transport class of the interface carrying the default route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportClass {
    /// Local-area link (Ethernet, WiFi).
    Local,
    /// Wide-area cellular link.
    WideArea,
    /// Dial-up class link (PPP, modem) that is brought up on demand.
    DialUp,
    /// Loopback interface.
    Loopback,
    /// Tunnel or other virtual interface.
    Virtual,
}

impl TransportClass {
    fn of(iface: &netdev::Interface) -> Self {
        if iface.is_loopback() {
            TransportClass::Loopback
        } else if matches!(iface.if_type, InterfaceType::Wwanpp | InterfaceType::Wwanpp2)
            || has_cellular_prefix(&iface.name)
        {
            TransportClass::WideArea
        } else if matches!(iface.if_type, InterfaceType::Ppp | InterfaceType::GenericModem) {
            TransportClass::DialUp
        } else if iface.is_tun() {
            TransportClass::Virtual
        } else {
            TransportClass::Local
        }
    }
}

impl fmt::Display for TransportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportClass::Local => write!(f, "Local"),
            TransportClass::WideArea => write!(f, "WideArea"),
            TransportClass::DialUp => write!(f, "DialUp"),
            TransportClass::Loopback => write!(f, "Loopback"),
            TransportClass::Virtual => write!(f, "Virtual"),
        }
    }
}

/// Returns `true` if `name` looks like a cellular modem interface.
pub fn has_cellular_prefix(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    CELLULAR_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// What the system currently uses as its default route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultRoute {
    /// Interface name (e.g., "eth0", "en0", "wwan0").
    pub interface_name: String,
    /// Transport class of the interface.
    pub transport: TransportClass,
    /// Whether the interface is up.
    pub is_up: bool,
    /// Whether the interface has at least one address assigned.
    pub has_addresses: bool,
    /// Whether a default gateway is configured.
    pub has_gateway: bool,
    /// Whether the link is point-to-point (no gateway needed).
    pub point_to_point: bool,
}

impl DefaultRoute {
    /// Snapshot the default route from the operating system.
    ///
    /// Returns `None` if the platform reports no default interface.
    pub fn current() -> Option<Self> {
        let iface = netdev::get_default_interface().ok()?;
        let has_gateway = netdev::get_default_gateway().is_ok();

        Some(DefaultRoute {
            interface_name: iface.name.clone(),
            transport: TransportClass::of(&iface),
            is_up: iface.is_up(),
            has_addresses: !iface.ipv4.is_empty() || !iface.ipv6.is_empty(),
            has_gateway,
            point_to_point: iface.is_point_to_point(),
        })
    }

    /// Maps this route onto reachability flags.
    ///
    /// A dial-up link that is configured but not yet up is reported as
    /// reachable with a connection required.
    pub fn flags(&self) -> ReachabilityFlags {
        let routed = self.transport != TransportClass::Loopback
            && (self.has_gateway || self.point_to_point);
        let connected = self.is_up && self.has_addresses;
        let dial_up = self.transport == TransportClass::DialUp;

        ReachabilityFlags {
            is_reachable: routed && (connected || dial_up),
            requires_connection: dial_up && !connected,
            is_wide_area: self.transport == TransportClass::WideArea,
        }
    }
}
