#![cfg(feature = "serde")]
mod common;

use std::io::Write;

use enocean::{Error, Registry};

use common::fixture_path;

#[test]
fn load_device_file() {
    let registry = Registry::with_file(fixture_path("devices.json"), true).unwrap();
    assert_eq!(registry.len(), 5);

    let device = registry.get_device_info("04-01-31-95").unwrap();
    assert_eq!(device.id, "000004013195");
    assert_eq!(device.eep, "A5-02-05");
    assert_eq!(device.name, "Office temperature");
    assert_eq!(device.manufacturer, "ENOCEAN_GMBH");

    let devices = registry.learned_devices();
    let ids: Vec<_> = devices.keys().map(String::as_str).collect();
    assert_eq!(
        ids,
        vec![
            "00000001814D",
            "0000002C865C",
            "000004008FE0",
            "000004013195",
            "000004018639"
        ]
    );
    assert_eq!(devices["000004008FE0"].manufacturer, "");
}

#[test]
fn invalid_entries() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": "002C865C", "eep": "F6-02-04"}},
            {{"id": "2C865", "eep": "F6-02-04"}},
            {{"id": "04008FE0", "eep": "D5-00"}}
        ]"#
    )
    .unwrap();

    let err = Registry::with_file(file.path(), true).unwrap_err();
    assert!(matches!(err, Error::InvalidDeviceId(_)), "{err:?}");

    let registry = Registry::with_file(file.path(), false).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.get_device_info("002C865C").is_some());
}

#[test]
fn malformed_device_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"eep": "F6-02-04"}}]"#).unwrap();
    let err = Registry::with_file(file.path(), false).unwrap_err();
    assert!(matches!(err, Error::Json(_)), "{err:?}");

    let err = Registry::with_file(fixture_path("missing.json"), false).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{err:?}");
}
