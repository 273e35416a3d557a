// Device registry lookups through the public API
use dive_log_decoder::descriptor::{self, DescriptorExt};
use dive_log_decoder::{DeviceDescriptor, Family, Identity, Transport, UsbId};

fn families(rows: &[&DeviceDescriptor]) -> Vec<Family> {
    rows.iter().map(|d| d.family()).collect()
}

#[test]
fn garmin_usb_storage_resolves_to_descent() {
    let rows: Vec<_> = descriptor::candidates(
        Transport::USBSTORAGE,
        Identity::Usb(UsbId::new(0x091e, 0x2b2b)),
    )
    .collect();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].to_string(), "Garmin Descent Mk1");
    assert_eq!(rows[0].model(), 2859);

    // Unknown stick: nothing claims it
    let none = descriptor::candidates(
        Transport::USBSTORAGE,
        Identity::Usb(UsbId::new(0x1234, 0x5678)),
    )
    .count();
    assert_eq!(none, 0);
}

#[test]
fn bluetooth_name_narrows_filtered_rows() {
    let rows: Vec<_> =
        descriptor::candidates(Transport::BLUETOOTH, Identity::Name("OSTC 4-12345")).collect();
    assert!(!rows.is_empty());

    // HW rows pass on the name prefix; Shearwater and Tecdiving rows reject it
    let found = families(&rows);
    assert!(found.contains(&Family::HwOstc3));
    assert!(!found.contains(&Family::ShearwaterPetrel));
    assert!(!found.contains(&Family::TecdivingDivecomputereu));

    // Rows without a filter accept any Bluetooth identity
    assert!(rows.iter().all(|d| d.filter().is_none() || d.vendor() == "Heinrichs Weikamp"));
}

#[test]
fn shearwater_ble_only_models() {
    let rows: Vec<_> =
        descriptor::candidates(Transport::BLE, Identity::Name("Perdix")).collect();
    let products: Vec<&str> = rows
        .iter()
        .filter(|d| d.vendor() == "Shearwater")
        .map(|d| d.product())
        .collect();

    assert_eq!(products, vec!["Petrel 2", "Perdix", "Perdix AI", "Nerd 2"]);
}

#[test]
fn empty_transport_matches_nothing() {
    assert_eq!(
        descriptor::candidates(Transport::empty(), Identity::None).count(),
        0
    );
}

#[test]
fn iteration_covers_whole_table() {
    let total = descriptor::iter().len();
    assert_eq!(descriptor::iter().count(), total);

    let mut cursor = descriptor::iter();
    cursor.nth(total - 1).unwrap();
    assert!(cursor.next().is_none());
    assert!(cursor.next().is_none());

    // Every row names a vendor, a product and at least one transport
    for row in descriptor::iter() {
        assert!(!row.vendor().is_empty());
        assert!(!row.product().is_empty());
        assert!(!row.transports().is_empty(), "{}", row);
        assert_ne!(row.family(), Family::Null);
    }
}

#[test]
fn absent_descriptor_reads_as_neutral() {
    let missing: Option<&DeviceDescriptor> = None;
    assert_eq!(missing.vendor(), "");
    assert_eq!(missing.family(), Family::Null);
    assert_eq!(missing.model(), 0);
    assert_eq!(missing.transports(), Transport::empty());
    assert!(missing.transport_filter().is_none());

    let present = descriptor::iter().next();
    assert_eq!(present.vendor(), "Suunto");
}
