//! Transport filters
//!
//! Several registry rows can share a transport kind (every Shearwater speaks
//! Bluetooth, the Uwatec Smart line shares one IrDA stack). A filter looks at
//! the identity the transport layer observed and says whether a row applies.
//!
//! Filters only ever narrow the transport gate already applied by
//! [`DeviceDescriptor::matches`](super::DeviceDescriptor::matches): any
//! transport kind a filter does not special-case is accepted, whatever the
//! identity token.

use super::Transport;
use std::fmt;

/// USB vendor/product id pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UsbId {
    pub vid: u16,
    pub pid: u16,
}

impl UsbId {
    pub const fn new(vid: u16, pid: u16) -> Self {
        Self { vid, pid }
    }
}

impl fmt::Display for UsbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vid, self.pid)
    }
}

/// Identity token observed on a transport endpoint
///
/// IrDA and Bluetooth report an adapter name, serial ports a device path,
/// USB flavours a vendor/product pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity<'a> {
    None,
    Name(&'a str),
    Usb(UsbId),
}

/// Per-family predicate over (transport kind, identity)
pub type TransportFilter = fn(Transport, Identity<'_>) -> bool;

/// Device path prefixes of serial ports created by the Bluetooth stack
#[cfg(target_os = "linux")]
const RFCOMM_PREFIXES: &[&str] = &["/dev/rfcomm"];

#[cfg(not(target_os = "linux"))]
const RFCOMM_PREFIXES: &[&str] = &[];

const UWATEC_IRDA: &[&str] = &[
    "Aladin Smart Com",
    "Aladin Smart Pro",
    "Aladin Smart Tec",
    "Aladin Smart Z",
    "Uwatec Aladin",
    "UWATEC Galileo",
    "UWATEC Galileo Sol",
];

const UWATEC_USBHID: &[UsbId] = &[
    UsbId::new(0x2e6c, 0x3201), // G2
    UsbId::new(0x2e6c, 0x3211), // G2 Console
    UsbId::new(0xc251, 0x2006), // Aladin Square
];

const SUUNTO_USBHID: &[UsbId] = &[
    UsbId::new(0x1493, 0x0030), // Eon Steel
    UsbId::new(0x1493, 0x0033), // Eon Core
];

const SHEARWATER_BLUETOOTH: &[&str] = &["Predator", "Petrel", "Nerd", "Perdix"];

const TECDIVING_BLUETOOTH: &[&str] = &["DiveComputer"];

const GARMIN_USBSTORAGE: &[UsbId] = &[
    UsbId::new(0x091e, 0x2b2b), // Descent Mk1
];

/// Case-insensitive exact match against an allow-list
fn match_name(identity: Identity<'_>, values: &[&str]) -> bool {
    match identity {
        Identity::Name(name) => values.iter().any(|v| v.eq_ignore_ascii_case(name)),
        _ => false,
    }
}

fn match_usb(identity: Identity<'_>, values: &[UsbId]) -> bool {
    match identity {
        Identity::Usb(id) => values.contains(&id),
        _ => false,
    }
}

/// Case-insensitive prefix match
fn match_name_prefix(identity: Identity<'_>, prefixes: &[&str]) -> bool {
    match identity {
        Identity::Name(name) => prefixes.iter().any(|prefix| {
            name.len() >= prefix.len()
                && name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
        }),
        _ => false,
    }
}

/// Serial device path created by a Bluetooth stack
///
/// Without a known prefix on this platform every named endpoint passes.
fn match_rfcomm(identity: Identity<'_>) -> bool {
    match identity {
        Identity::Name(name) => {
            RFCOMM_PREFIXES.is_empty() || RFCOMM_PREFIXES.iter().any(|p| name.starts_with(p))
        }
        _ => false,
    }
}

pub(crate) fn uwatec(transport: Transport, identity: Identity<'_>) -> bool {
    if transport == Transport::IRDA {
        match_name(identity, UWATEC_IRDA)
    } else if transport == Transport::USBHID {
        match_usb(identity, UWATEC_USBHID)
    } else {
        true
    }
}

pub(crate) fn suunto(transport: Transport, identity: Identity<'_>) -> bool {
    if transport == Transport::USBHID {
        match_usb(identity, SUUNTO_USBHID)
    } else {
        true
    }
}

pub(crate) fn hw(transport: Transport, identity: Identity<'_>) -> bool {
    if transport == Transport::BLUETOOTH {
        match_name_prefix(identity, &["OSTC", "FROG"])
    } else if transport == Transport::SERIAL {
        match_rfcomm(identity)
    } else {
        true
    }
}

pub(crate) fn shearwater(transport: Transport, identity: Identity<'_>) -> bool {
    if transport == Transport::BLUETOOTH {
        match_name(identity, SHEARWATER_BLUETOOTH)
    } else if transport == Transport::SERIAL {
        match_rfcomm(identity)
    } else {
        true
    }
}

pub(crate) fn tecdiving(transport: Transport, identity: Identity<'_>) -> bool {
    if transport == Transport::BLUETOOTH {
        match_name(identity, TECDIVING_BLUETOOTH)
    } else if transport == Transport::SERIAL {
        match_rfcomm(identity)
    } else {
        true
    }
}

pub(crate) fn garmin(transport: Transport, identity: Identity<'_>) -> bool {
    if transport == Transport::USBSTORAGE {
        match_usb(identity, GARMIN_USBSTORAGE)
    } else {
        true
    }
}
