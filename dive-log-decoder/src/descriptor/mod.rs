//! Device descriptor registry
//!
//! A fixed, process-wide table of every supported dive computer. Each row
//! names a vendor/product pair, the protocol family that speaks to it, the
//! model number, the transports it can be reached over and an optional
//! filter that narrows identification when several rows share a transport.
//!
//! The table is only reachable through [`iter`]; rows are never copied or
//! mutated, callers hold `&'static` references into it.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;

pub mod filter;
mod table;

pub use filter::{Identity, TransportFilter, UsbId};

bitflags! {
    /// Set of physical/link transports a device can be reached over
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Transport: u32 {
        const SERIAL = 1 << 0;
        const USB = 1 << 1;
        const USBHID = 1 << 2;
        const IRDA = 1 << 3;
        const BLUETOOTH = 1 << 4;
        const BLE = 1 << 5;
        const USBSTORAGE = 1 << 6;
    }
}

/// Protocol family: selects the download protocol and the log parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// No family (neutral value for an absent descriptor)
    Null,
    SuuntoSolution,
    SuuntoEon,
    SuuntoVyper,
    SuuntoVyper2,
    SuuntoD9,
    SuuntoEonSteel,
    UwatecAladin,
    UwatecMemomouse,
    UwatecSmart,
    ReefnetSensus,
    ReefnetSensusPro,
    ReefnetSensusUltra,
    OceanicVtPro,
    OceanicVeo250,
    OceanicAtom2,
    MaresNemo,
    MaresPuck,
    MaresDarwin,
    MaresIconHd,
    HwOstc,
    HwFrog,
    HwOstc3,
    CressiEdy,
    CressiLeonardo,
    ZeagleN2ition3,
    AtomicsCobalt,
    ShearwaterPredator,
    ShearwaterPetrel,
    DiveriteNitekQ,
    CitizenAqualand,
    DivesystemIdive,
    CochranCommander,
    TecdivingDivecomputereu,
    Garmin,
}

impl Family {
    /// Stable lower-case tag for the family
    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Null => "null",
            Family::SuuntoSolution => "suunto-solution",
            Family::SuuntoEon => "suunto-eon",
            Family::SuuntoVyper => "suunto-vyper",
            Family::SuuntoVyper2 => "suunto-vyper2",
            Family::SuuntoD9 => "suunto-d9",
            Family::SuuntoEonSteel => "suunto-eonsteel",
            Family::UwatecAladin => "uwatec-aladin",
            Family::UwatecMemomouse => "uwatec-memomouse",
            Family::UwatecSmart => "uwatec-smart",
            Family::ReefnetSensus => "reefnet-sensus",
            Family::ReefnetSensusPro => "reefnet-sensuspro",
            Family::ReefnetSensusUltra => "reefnet-sensusultra",
            Family::OceanicVtPro => "oceanic-vtpro",
            Family::OceanicVeo250 => "oceanic-veo250",
            Family::OceanicAtom2 => "oceanic-atom2",
            Family::MaresNemo => "mares-nemo",
            Family::MaresPuck => "mares-puck",
            Family::MaresDarwin => "mares-darwin",
            Family::MaresIconHd => "mares-iconhd",
            Family::HwOstc => "hw-ostc",
            Family::HwFrog => "hw-frog",
            Family::HwOstc3 => "hw-ostc3",
            Family::CressiEdy => "cressi-edy",
            Family::CressiLeonardo => "cressi-leonardo",
            Family::ZeagleN2ition3 => "zeagle-n2ition3",
            Family::AtomicsCobalt => "atomics-cobalt",
            Family::ShearwaterPredator => "shearwater-predator",
            Family::ShearwaterPetrel => "shearwater-petrel",
            Family::DiveriteNitekQ => "diverite-nitekq",
            Family::CitizenAqualand => "citizen-aqualand",
            Family::DivesystemIdive => "divesystem-idive",
            Family::CochranCommander => "cochran-commander",
            Family::TecdivingDivecomputereu => "tecdiving-divecomputereu",
            Family::Garmin => "garmin",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the registry: a vendor/product/model combination
#[derive(Clone, Copy)]
pub struct DeviceDescriptor {
    vendor: &'static str,
    product: &'static str,
    family: Family,
    model: u32,
    transports: Transport,
    filter: Option<TransportFilter>,
}

impl DeviceDescriptor {
    pub(crate) const fn new(
        vendor: &'static str,
        product: &'static str,
        family: Family,
        model: u32,
        transports: Transport,
        filter: Option<TransportFilter>,
    ) -> Self {
        Self {
            vendor,
            product,
            family,
            model,
            transports,
            filter,
        }
    }

    pub fn vendor(&self) -> &'static str {
        self.vendor
    }

    pub fn product(&self) -> &'static str {
        self.product
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Vendor model number, or a synthetic id when the vendor has none
    pub fn model(&self) -> u32 {
        self.model
    }

    pub fn transports(&self) -> Transport {
        self.transports
    }

    pub fn filter(&self) -> Option<TransportFilter> {
        self.filter
    }

    /// Check whether this row accepts an endpoint seen on `transport`
    ///
    /// `transport` names the single transport the endpoint was seen on and
    /// must be one the row supports; then the row's filter (if any) decides
    /// on the identity token. Rows without a filter accept every identity.
    pub fn matches(&self, transport: Transport, identity: Identity<'_>) -> bool {
        if transport.bits().count_ones() != 1 || !self.transports.contains(transport) {
            return false;
        }

        match self.filter {
            Some(filter) => filter(transport, identity),
            None => true,
        }
    }
}

impl fmt::Debug for DeviceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceDescriptor")
            .field("vendor", &self.vendor)
            .field("product", &self.product)
            .field("family", &self.family)
            .field("model", &self.model)
            .field("transports", &self.transports)
            .field("filtered", &self.filter.is_some())
            .finish()
    }
}

impl fmt::Display for DeviceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vendor, self.product)
    }
}

/// Null-tolerant accessors for an optional descriptor
///
/// An absent descriptor reports neutral values (empty strings, no family,
/// zero transports). Those are "nothing to report", not a successful lookup.
pub trait DescriptorExt {
    fn vendor(&self) -> &'static str;
    fn product(&self) -> &'static str;
    fn family(&self) -> Family;
    fn model(&self) -> u32;
    fn transports(&self) -> Transport;
    fn transport_filter(&self) -> Option<TransportFilter>;
}

impl DescriptorExt for Option<&DeviceDescriptor> {
    fn vendor(&self) -> &'static str {
        self.map_or("", |d| d.vendor())
    }

    fn product(&self) -> &'static str {
        self.map_or("", |d| d.product())
    }

    fn family(&self) -> Family {
        self.map_or(Family::Null, |d| d.family())
    }

    fn model(&self) -> u32 {
        self.map_or(0, |d| d.model())
    }

    fn transports(&self) -> Transport {
        self.map_or(Transport::empty(), |d| d.transports())
    }

    fn transport_filter(&self) -> Option<TransportFilter> {
        self.and_then(|d| d.filter())
    }
}

/// Cursor over the descriptor table
///
/// Holds nothing but a position, so independent cursors never affect each
/// other. Once exhausted it keeps returning `None`.
#[derive(Debug, Clone, Default)]
pub struct DescriptorIterator {
    current: usize,
}

impl DescriptorIterator {
    pub fn new() -> Self {
        Self { current: 0 }
    }
}

impl Iterator for DescriptorIterator {
    type Item = &'static DeviceDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let descriptor = table::DESCRIPTORS.get(self.current)?;
        self.current += 1;
        Some(descriptor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = table::DESCRIPTORS.len().saturating_sub(self.current);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DescriptorIterator {}

impl FusedIterator for DescriptorIterator {}

/// Open a new iterator over the registry
pub fn iter() -> DescriptorIterator {
    DescriptorIterator::new()
}

/// All rows accepting an endpoint seen on `transport` with the given identity
///
/// Rows are yielded in table order. More than one match is possible; picking
/// between them is up to the caller.
pub fn candidates(
    transport: Transport,
    identity: Identity<'_>,
) -> impl Iterator<Item = &'static DeviceDescriptor> + '_ {
    iter().filter(move |descriptor| descriptor.matches(transport, identity))
}
