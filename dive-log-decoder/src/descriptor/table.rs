//! Static device table
//!
//! Model numbers are the ones the device reports. Where a device reports
//! none, a synthetic number starting at zero is used; models the protocol
//! does not tell apart share one number.

use super::filter;
use super::{DeviceDescriptor, Family, Transport};

const SERIAL: Transport = Transport::SERIAL;
const USB: Transport = Transport::USB;
const USBHID: Transport = Transport::USBHID;
const IRDA: Transport = Transport::IRDA;
const BLUETOOTH: Transport = Transport::BLUETOOTH;
const BLE: Transport = Transport::BLE;
const USBSTORAGE: Transport = Transport::USBSTORAGE;

const fn row(
    vendor: &'static str,
    product: &'static str,
    family: Family,
    model: u32,
    transports: Transport,
) -> DeviceDescriptor {
    DeviceDescriptor::new(vendor, product, family, model, transports, None)
}

const fn filtered(
    vendor: &'static str,
    product: &'static str,
    family: Family,
    model: u32,
    transports: Transport,
    filter: super::TransportFilter,
) -> DeviceDescriptor {
    DeviceDescriptor::new(vendor, product, family, model, transports, Some(filter))
}

pub(super) static DESCRIPTORS: &[DeviceDescriptor] = &[
    // Suunto Solution
    row("Suunto", "Solution", Family::SuuntoSolution, 0, SERIAL),
    // Suunto Eon
    row("Suunto", "Eon", Family::SuuntoEon, 0, SERIAL),
    row("Suunto", "Solution Alpha", Family::SuuntoEon, 0, SERIAL),
    row("Suunto", "Solution Nitrox", Family::SuuntoEon, 0, SERIAL),
    // Suunto Vyper
    row("Suunto", "Spyder", Family::SuuntoVyper, 0x01, SERIAL),
    row("Suunto", "Stinger", Family::SuuntoVyper, 0x03, SERIAL),
    row("Suunto", "Mosquito", Family::SuuntoVyper, 0x04, SERIAL),
    row("Suunto", "D3", Family::SuuntoVyper, 0x05, SERIAL),
    row("Suunto", "Vyper", Family::SuuntoVyper, 0x0A, SERIAL),
    row("Suunto", "Vytec", Family::SuuntoVyper, 0x0B, SERIAL),
    row("Suunto", "Cobra", Family::SuuntoVyper, 0x0C, SERIAL),
    row("Suunto", "Gekko", Family::SuuntoVyper, 0x0D, SERIAL),
    row("Suunto", "Zoop", Family::SuuntoVyper, 0x16, SERIAL),
    // Suunto Vyper 2
    row("Suunto", "Vyper 2", Family::SuuntoVyper2, 0x10, SERIAL),
    row("Suunto", "Cobra 2", Family::SuuntoVyper2, 0x11, SERIAL),
    row("Suunto", "Vyper Air", Family::SuuntoVyper2, 0x13, SERIAL),
    row("Suunto", "Cobra 3", Family::SuuntoVyper2, 0x14, SERIAL),
    row("Suunto", "HelO2", Family::SuuntoVyper2, 0x15, SERIAL),
    // Suunto D9
    row("Suunto", "D9", Family::SuuntoD9, 0x0E, SERIAL),
    row("Suunto", "D6", Family::SuuntoD9, 0x0F, SERIAL),
    row("Suunto", "D4", Family::SuuntoD9, 0x12, SERIAL),
    row("Suunto", "D4i", Family::SuuntoD9, 0x19, SERIAL),
    row("Suunto", "D6i", Family::SuuntoD9, 0x1A, SERIAL),
    row("Suunto", "D9tx", Family::SuuntoD9, 0x1B, SERIAL),
    row("Suunto", "DX", Family::SuuntoD9, 0x1C, SERIAL),
    row("Suunto", "Vyper Novo", Family::SuuntoD9, 0x1D, SERIAL),
    row("Suunto", "Zoop Novo", Family::SuuntoD9, 0x1E, SERIAL),
    row("Suunto", "D4f", Family::SuuntoD9, 0x20, SERIAL),
    // Suunto EON Steel
    filtered("Suunto", "EON Steel", Family::SuuntoEonSteel, 0, USBHID.union(BLE), filter::suunto),
    filtered("Suunto", "EON Core", Family::SuuntoEonSteel, 1, USBHID.union(BLE), filter::suunto),
    // Uwatec Aladin
    row("Uwatec", "Aladin Air Twin", Family::UwatecAladin, 0x1C, SERIAL),
    row("Uwatec", "Aladin Sport Plus", Family::UwatecAladin, 0x3E, SERIAL),
    row("Uwatec", "Aladin Pro", Family::UwatecAladin, 0x3F, SERIAL),
    row("Uwatec", "Aladin Air Z", Family::UwatecAladin, 0x44, SERIAL),
    row("Uwatec", "Aladin Air Z O2", Family::UwatecAladin, 0xA4, SERIAL),
    row("Uwatec", "Aladin Air Z Nitrox", Family::UwatecAladin, 0xF4, SERIAL),
    row("Uwatec", "Aladin Pro Ultra", Family::UwatecAladin, 0xFF, SERIAL),
    // Uwatec Memomouse
    row("Uwatec", "Memomouse", Family::UwatecMemomouse, 0, SERIAL),
    // Uwatec Smart
    filtered("Uwatec", "Smart Pro", Family::UwatecSmart, 0x10, IRDA, filter::uwatec),
    filtered("Uwatec", "Galileo Sol", Family::UwatecSmart, 0x11, IRDA, filter::uwatec),
    filtered("Uwatec", "Galileo Luna", Family::UwatecSmart, 0x11, IRDA, filter::uwatec),
    filtered("Uwatec", "Galileo Terra", Family::UwatecSmart, 0x11, IRDA, filter::uwatec),
    filtered("Uwatec", "Aladin Tec", Family::UwatecSmart, 0x12, IRDA, filter::uwatec),
    filtered("Uwatec", "Aladin Prime", Family::UwatecSmart, 0x12, IRDA, filter::uwatec),
    filtered("Uwatec", "Aladin Tec 2G", Family::UwatecSmart, 0x13, IRDA, filter::uwatec),
    filtered("Uwatec", "Aladin 2G", Family::UwatecSmart, 0x13, IRDA, filter::uwatec),
    filtered("Subgear", "XP-10", Family::UwatecSmart, 0x13, IRDA, filter::uwatec),
    filtered("Uwatec", "Smart Com", Family::UwatecSmart, 0x14, IRDA, filter::uwatec),
    filtered("Uwatec", "Aladin 2G", Family::UwatecSmart, 0x15, IRDA, filter::uwatec),
    filtered("Uwatec", "Aladin Tec 3G", Family::UwatecSmart, 0x15, IRDA, filter::uwatec),
    filtered("Uwatec", "Aladin Sport", Family::UwatecSmart, 0x15, IRDA, filter::uwatec),
    filtered("Subgear", "XP-3G", Family::UwatecSmart, 0x15, IRDA, filter::uwatec),
    filtered("Scubapro", "Aladin Sport Matrix", Family::UwatecSmart, 0x17, BLE, filter::uwatec),
    filtered("Uwatec", "Smart Tec", Family::UwatecSmart, 0x18, IRDA, filter::uwatec),
    filtered("Uwatec", "Galileo Trimix", Family::UwatecSmart, 0x19, IRDA, filter::uwatec),
    filtered("Uwatec", "Smart Z", Family::UwatecSmart, 0x1C, IRDA, filter::uwatec),
    filtered("Subgear", "XP Air", Family::UwatecSmart, 0x1C, IRDA, filter::uwatec),
    row("Scubapro", "Meridian", Family::UwatecSmart, 0x20, SERIAL),
    row("Scubapro", "Mantis", Family::UwatecSmart, 0x20, SERIAL),
    filtered("Scubapro", "Aladin Square", Family::UwatecSmart, 0x22, USBHID, filter::uwatec),
    row("Scubapro", "Chromis", Family::UwatecSmart, 0x24, SERIAL),
    row("Scubapro", "Mantis 2", Family::UwatecSmart, 0x26, SERIAL),
    filtered("Scubapro", "G2", Family::UwatecSmart, 0x32, USBHID.union(BLE), filter::uwatec),
    filtered("Scubapro", "G2 Console", Family::UwatecSmart, 0x32, USBHID.union(BLE), filter::uwatec),
    // Reefnet
    row("Reefnet", "Sensus", Family::ReefnetSensus, 1, SERIAL),
    row("Reefnet", "Sensus Pro", Family::ReefnetSensusPro, 2, SERIAL),
    row("Reefnet", "Sensus Ultra", Family::ReefnetSensusUltra, 3, SERIAL),
    // Oceanic VT Pro
    row("Aeris", "500 AI", Family::OceanicVtPro, 0x4151, SERIAL),
    row("Oceanic", "Versa Pro", Family::OceanicVtPro, 0x4155, SERIAL),
    row("Aeris", "Atmos 2", Family::OceanicVtPro, 0x4158, SERIAL),
    row("Oceanic", "Pro Plus 2", Family::OceanicVtPro, 0x4159, SERIAL),
    row("Aeris", "Atmos AI", Family::OceanicVtPro, 0x4244, SERIAL),
    row("Oceanic", "VT Pro", Family::OceanicVtPro, 0x4245, SERIAL),
    row("Sherwood", "Wisdom", Family::OceanicVtPro, 0x4246, SERIAL),
    row("Aeris", "Elite", Family::OceanicVtPro, 0x424F, SERIAL),
    // Oceanic Veo 250
    row("Genesis", "React Pro", Family::OceanicVeo250, 0x4247, SERIAL),
    row("Oceanic", "Veo 200", Family::OceanicVeo250, 0x424B, SERIAL),
    row("Oceanic", "Veo 250", Family::OceanicVeo250, 0x424C, SERIAL),
    row("Seemann", "XP5", Family::OceanicVeo250, 0x4251, SERIAL),
    row("Oceanic", "Veo 180", Family::OceanicVeo250, 0x4252, SERIAL),
    row("Aeris", "XR-2", Family::OceanicVeo250, 0x4255, SERIAL),
    row("Sherwood", "Insight", Family::OceanicVeo250, 0x425A, SERIAL),
    row("Hollis", "DG02", Family::OceanicVeo250, 0x4352, SERIAL),
    // Oceanic Atom 2.0
    row("Oceanic", "Atom 1.0", Family::OceanicAtom2, 0x4250, SERIAL),
    row("Aeris", "Epic", Family::OceanicAtom2, 0x4257, SERIAL),
    row("Oceanic", "VT3", Family::OceanicAtom2, 0x4258, SERIAL),
    row("Aeris", "Elite T3", Family::OceanicAtom2, 0x4259, SERIAL),
    row("Oceanic", "Atom 2.0", Family::OceanicAtom2, 0x4342, SERIAL),
    row("Oceanic", "Geo", Family::OceanicAtom2, 0x4344, SERIAL),
    row("Aeris", "Manta", Family::OceanicAtom2, 0x4345, SERIAL),
    row("Aeris", "XR-1 NX", Family::OceanicAtom2, 0x4346, SERIAL),
    row("Oceanic", "Datamask", Family::OceanicAtom2, 0x4347, SERIAL),
    row("Aeris", "Compumask", Family::OceanicAtom2, 0x4348, SERIAL),
    row("Aeris", "F10", Family::OceanicAtom2, 0x434D, SERIAL),
    row("Oceanic", "OC1", Family::OceanicAtom2, 0x434E, SERIAL),
    row("Sherwood", "Wisdom 2", Family::OceanicAtom2, 0x4350, SERIAL),
    row("Sherwood", "Insight 2", Family::OceanicAtom2, 0x4353, SERIAL),
    row("Genesis", "React Pro White", Family::OceanicAtom2, 0x4354, SERIAL),
    row("Tusa", "Element II (IQ-750)", Family::OceanicAtom2, 0x4357, SERIAL),
    row("Oceanic", "Veo 1.0", Family::OceanicAtom2, 0x4358, SERIAL),
    row("Oceanic", "Veo 2.0", Family::OceanicAtom2, 0x4359, SERIAL),
    row("Oceanic", "Veo 3.0", Family::OceanicAtom2, 0x435A, SERIAL),
    row("Tusa", "Zen (IQ-900)", Family::OceanicAtom2, 0x4441, SERIAL),
    row("Tusa", "Zen Air (IQ-950)", Family::OceanicAtom2, 0x4442, SERIAL),
    row("Aeris", "Atmos AI 2", Family::OceanicAtom2, 0x4443, SERIAL),
    row("Oceanic", "Pro Plus 2.1", Family::OceanicAtom2, 0x4444, SERIAL),
    row("Oceanic", "Geo 2.0", Family::OceanicAtom2, 0x4446, SERIAL),
    row("Oceanic", "VT4", Family::OceanicAtom2, 0x4447, SERIAL),
    row("Oceanic", "OC1", Family::OceanicAtom2, 0x4449, SERIAL),
    row("Beuchat", "Voyager 2G", Family::OceanicAtom2, 0x444B, SERIAL),
    row("Oceanic", "Atom 3.0", Family::OceanicAtom2, 0x444C, SERIAL),
    row("Hollis", "DG03", Family::OceanicAtom2, 0x444D, SERIAL),
    row("Oceanic", "OCS", Family::OceanicAtom2, 0x4450, SERIAL),
    row("Oceanic", "OC1", Family::OceanicAtom2, 0x4451, SERIAL),
    row("Oceanic", "VT 4.1", Family::OceanicAtom2, 0x4452, SERIAL),
    row("Aeris", "Epic", Family::OceanicAtom2, 0x4453, SERIAL),
    row("Aeris", "Elite T3", Family::OceanicAtom2, 0x4455, SERIAL),
    row("Oceanic", "Atom 3.1", Family::OceanicAtom2, 0x4456, SERIAL),
    row("Aeris", "A300 AI", Family::OceanicAtom2, 0x4457, SERIAL),
    row("Sherwood", "Wisdom 3", Family::OceanicAtom2, 0x4458, SERIAL),
    row("Aeris", "A300", Family::OceanicAtom2, 0x445A, SERIAL),
    row("Hollis", "TX1", Family::OceanicAtom2, 0x4542, SERIAL),
    row("Beuchat", "Mundial 2", Family::OceanicAtom2, 0x4543, SERIAL),
    row("Sherwood", "Amphos", Family::OceanicAtom2, 0x4545, SERIAL),
    row("Sherwood", "Amphos Air", Family::OceanicAtom2, 0x4546, SERIAL),
    row("Oceanic", "Pro Plus 3", Family::OceanicAtom2, 0x4548, SERIAL),
    row("Aeris", "F11", Family::OceanicAtom2, 0x4549, SERIAL),
    row("Oceanic", "OCi", Family::OceanicAtom2, 0x454B, SERIAL),
    row("Aeris", "A300CS", Family::OceanicAtom2, 0x454C, SERIAL),
    row("Beuchat", "Mundial 3", Family::OceanicAtom2, 0x4550, SERIAL),
    row("Oceanic", "Pro Plus X", Family::OceanicAtom2, 0x4552, SERIAL),
    row("Oceanic", "F10", Family::OceanicAtom2, 0x4553, SERIAL),
    row("Oceanic", "F11", Family::OceanicAtom2, 0x4554, SERIAL),
    row("Subgear", "XP-Air", Family::OceanicAtom2, 0x4555, SERIAL),
    row("Sherwood", "Vision", Family::OceanicAtom2, 0x4556, SERIAL),
    row("Oceanic", "VTX", Family::OceanicAtom2, 0x4557, SERIAL),
    row("Aqualung", "i300", Family::OceanicAtom2, 0x4559, SERIAL),
    row("Aqualung", "i750TC", Family::OceanicAtom2, 0x455A, SERIAL.union(BLUETOOTH)),
    row("Aqualung", "i450T", Family::OceanicAtom2, 0x4641, SERIAL),
    row("Aqualung", "i550", Family::OceanicAtom2, 0x4642, SERIAL),
    row("Aqualung", "i200", Family::OceanicAtom2, 0x4646, SERIAL),
    // Mares Nemo
    row("Mares", "Nemo", Family::MaresNemo, 0, SERIAL),
    row("Mares", "Nemo Steel", Family::MaresNemo, 0, SERIAL),
    row("Mares", "Nemo Titanium", Family::MaresNemo, 0, SERIAL),
    row("Mares", "Nemo Excel", Family::MaresNemo, 17, SERIAL),
    row("Mares", "Nemo Apneist", Family::MaresNemo, 18, SERIAL),
    // Mares Puck
    row("Mares", "Puck", Family::MaresPuck, 7, SERIAL),
    row("Mares", "Puck Air", Family::MaresPuck, 19, SERIAL),
    row("Mares", "Nemo Air", Family::MaresPuck, 4, SERIAL),
    row("Mares", "Nemo Wide", Family::MaresPuck, 1, SERIAL),
    // Mares Darwin
    row("Mares", "Darwin", Family::MaresDarwin, 0, SERIAL),
    row("Mares", "M1", Family::MaresDarwin, 0, SERIAL),
    row("Mares", "M2", Family::MaresDarwin, 0, SERIAL),
    row("Mares", "Darwin Air", Family::MaresDarwin, 1, SERIAL),
    row("Mares", "Airlab", Family::MaresDarwin, 1, SERIAL),
    // Mares Icon HD
    row("Mares", "Matrix", Family::MaresIconHd, 0x0F, SERIAL),
    row("Mares", "Smart", Family::MaresIconHd, 0x10, SERIAL.union(BLE)),
    row("Mares", "Smart Apnea", Family::MaresIconHd, 0x010010, SERIAL),
    row("Mares", "Icon HD", Family::MaresIconHd, 0x14, SERIAL),
    row("Mares", "Icon HD Net Ready", Family::MaresIconHd, 0x15, SERIAL),
    row("Mares", "Puck Pro", Family::MaresIconHd, 0x18, SERIAL.union(BLE)),
    row("Mares", "Nemo Wide 2", Family::MaresIconHd, 0x19, SERIAL),
    row("Mares", "Puck 2", Family::MaresIconHd, 0x1F, SERIAL),
    row("Mares", "Quad Air", Family::MaresIconHd, 0x23, SERIAL.union(BLE)),
    row("Mares", "Smart Air", Family::MaresIconHd, 0x24, SERIAL.union(BLE)),
    row("Mares", "Quad", Family::MaresIconHd, 0x29, SERIAL.union(BLE)),
    // Heinrichs Weikamp
    row("Heinrichs Weikamp", "OSTC", Family::HwOstc, 0, SERIAL),
    row("Heinrichs Weikamp", "OSTC Mk2", Family::HwOstc, 1, SERIAL),
    row("Heinrichs Weikamp", "OSTC 2N", Family::HwOstc, 2, SERIAL),
    row("Heinrichs Weikamp", "OSTC 2C", Family::HwOstc, 3, SERIAL),
    filtered("Heinrichs Weikamp", "Frog", Family::HwFrog, 0, SERIAL.union(BLUETOOTH), filter::hw),
    filtered("Heinrichs Weikamp", "OSTC 2", Family::HwOstc3, 0x11, SERIAL.union(BLUETOOTH).union(BLE), filter::hw),
    filtered("Heinrichs Weikamp", "OSTC 2", Family::HwOstc3, 0x13, SERIAL.union(BLUETOOTH).union(BLE), filter::hw),
    filtered("Heinrichs Weikamp", "OSTC 2", Family::HwOstc3, 0x1B, SERIAL.union(BLUETOOTH).union(BLE), filter::hw),
    row("Heinrichs Weikamp", "OSTC 3", Family::HwOstc3, 0x0A, SERIAL),
    filtered("Heinrichs Weikamp", "OSTC Plus", Family::HwOstc3, 0x13, SERIAL.union(BLUETOOTH).union(BLE), filter::hw),
    filtered("Heinrichs Weikamp", "OSTC Plus", Family::HwOstc3, 0x1A, SERIAL.union(BLUETOOTH).union(BLE), filter::hw),
    filtered("Heinrichs Weikamp", "OSTC 4", Family::HwOstc3, 0x3B, SERIAL.union(BLUETOOTH).union(BLE), filter::hw),
    row("Heinrichs Weikamp", "OSTC cR", Family::HwOstc3, 0x05, SERIAL),
    row("Heinrichs Weikamp", "OSTC cR", Family::HwOstc3, 0x07, SERIAL),
    filtered("Heinrichs Weikamp", "OSTC Sport", Family::HwOstc3, 0x12, SERIAL.union(BLUETOOTH).union(BLE), filter::hw),
    filtered("Heinrichs Weikamp", "OSTC Sport", Family::HwOstc3, 0x13, SERIAL.union(BLUETOOTH).union(BLE), filter::hw),
    filtered("Heinrichs Weikamp", "OSTC 2 TR", Family::HwOstc3, 0x33, SERIAL.union(BLUETOOTH).union(BLE), filter::hw),
    // Cressi Edy
    row("Tusa", "IQ-700", Family::CressiEdy, 0x05, SERIAL),
    row("Cressi", "Edy", Family::CressiEdy, 0x08, SERIAL),
    // Cressi Leonardo
    row("Cressi", "Leonardo", Family::CressiLeonardo, 1, SERIAL),
    row("Cressi", "Giotto", Family::CressiLeonardo, 4, SERIAL),
    row("Cressi", "Newton", Family::CressiLeonardo, 5, SERIAL),
    row("Cressi", "Drake", Family::CressiLeonardo, 6, SERIAL),
    // Zeagle N2iTiON3
    row("Zeagle", "N2iTiON3", Family::ZeagleN2ition3, 0, SERIAL),
    row("Apeks", "Quantum X", Family::ZeagleN2ition3, 0, SERIAL),
    row("Dive Rite", "NiTek Trio", Family::ZeagleN2ition3, 0, SERIAL),
    row("Scubapro", "XTender 5", Family::ZeagleN2ition3, 0, SERIAL),
    // Atomic Aquatics Cobalt
    row("Atomic Aquatics", "Cobalt", Family::AtomicsCobalt, 0, USB),
    row("Atomic Aquatics", "Cobalt 2", Family::AtomicsCobalt, 2, USB),
    // Shearwater Predator
    filtered("Shearwater", "Predator", Family::ShearwaterPredator, 2, SERIAL.union(BLUETOOTH), filter::shearwater),
    // Shearwater Petrel
    filtered("Shearwater", "Petrel", Family::ShearwaterPetrel, 3, SERIAL.union(BLUETOOTH), filter::shearwater),
    filtered("Shearwater", "Petrel 2", Family::ShearwaterPetrel, 3, SERIAL.union(BLUETOOTH).union(BLE), filter::shearwater),
    filtered("Shearwater", "Nerd", Family::ShearwaterPetrel, 4, SERIAL.union(BLUETOOTH), filter::shearwater),
    filtered("Shearwater", "Perdix", Family::ShearwaterPetrel, 5, SERIAL.union(BLUETOOTH).union(BLE), filter::shearwater),
    filtered("Shearwater", "Perdix AI", Family::ShearwaterPetrel, 6, BLE, filter::shearwater),
    filtered("Shearwater", "Nerd 2", Family::ShearwaterPetrel, 7, BLE, filter::shearwater),
    // Dive Rite NiTek Q
    row("Dive Rite", "NiTek Q", Family::DiveriteNitekQ, 0, SERIAL),
    // Citizen Hyper Aqualand
    row("Citizen", "Hyper Aqualand", Family::CitizenAqualand, 0, SERIAL),
    // DiveSystem/Ratio iDive
    row("DiveSystem", "Orca", Family::DivesystemIdive, 0x02, SERIAL),
    row("DiveSystem", "iDive Pro", Family::DivesystemIdive, 0x03, SERIAL),
    row("DiveSystem", "iDive DAN", Family::DivesystemIdive, 0x04, SERIAL),
    row("DiveSystem", "iDive Tech", Family::DivesystemIdive, 0x05, SERIAL),
    row("DiveSystem", "iDive Reb", Family::DivesystemIdive, 0x06, SERIAL),
    row("DiveSystem", "iDive Stealth", Family::DivesystemIdive, 0x07, SERIAL),
    row("DiveSystem", "iDive Free", Family::DivesystemIdive, 0x08, SERIAL),
    row("DiveSystem", "iDive Easy", Family::DivesystemIdive, 0x09, SERIAL),
    row("DiveSystem", "iDive X3M", Family::DivesystemIdive, 0x0A, SERIAL),
    row("DiveSystem", "iDive Deep", Family::DivesystemIdive, 0x0B, SERIAL),
    row("Ratio", "iX3M Easy", Family::DivesystemIdive, 0x22, SERIAL),
    row("Ratio", "iX3M Deep", Family::DivesystemIdive, 0x23, SERIAL),
    row("Ratio", "iX3M Tech+", Family::DivesystemIdive, 0x24, SERIAL),
    row("Ratio", "iX3M Reb", Family::DivesystemIdive, 0x25, SERIAL),
    row("Ratio", "iX3M Pro Easy", Family::DivesystemIdive, 0x32, SERIAL),
    row("Ratio", "iX3M Pro Deep", Family::DivesystemIdive, 0x34, SERIAL),
    row("Ratio", "iX3M Pro Tech+", Family::DivesystemIdive, 0x35, SERIAL),
    row("Ratio", "iDive Free", Family::DivesystemIdive, 0x40, SERIAL),
    row("Ratio", "iDive Easy", Family::DivesystemIdive, 0x42, SERIAL),
    row("Ratio", "iDive Deep", Family::DivesystemIdive, 0x44, SERIAL),
    row("Ratio", "iDive Tech+", Family::DivesystemIdive, 0x45, SERIAL),
    row("Seac", "Jack", Family::DivesystemIdive, 0x1000, SERIAL),
    row("Seac", "Guru", Family::DivesystemIdive, 0x1002, SERIAL),
    // Cochran Commander
    row("Cochran", "Commander TM", Family::CochranCommander, 0, SERIAL),
    row("Cochran", "Commander I", Family::CochranCommander, 1, SERIAL),
    row("Cochran", "Commander II", Family::CochranCommander, 2, SERIAL),
    row("Cochran", "EMC-14", Family::CochranCommander, 3, SERIAL),
    row("Cochran", "EMC-16", Family::CochranCommander, 4, SERIAL),
    row("Cochran", "EMC-20H", Family::CochranCommander, 5, SERIAL),
    // Tecdiving DiveComputer.eu
    filtered("Tecdiving", "DiveComputer.eu", Family::TecdivingDivecomputereu, 0, SERIAL.union(BLUETOOTH), filter::tecdiving),
    // Garmin
    filtered("Garmin", "Descent Mk1", Family::Garmin, 2859, USBSTORAGE, filter::garmin),
];
