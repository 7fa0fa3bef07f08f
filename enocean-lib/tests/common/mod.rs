#![allow(dead_code)]

use std::path::PathBuf;

use enocean::{parse_hex, DeviceSpec, Registry};

pub fn fixture_path(name: &str) -> PathBuf {
    let mut path =
        PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    path.push("tests/fixtures");
    path.push(name);
    path
}

/// ERP1 4BS teach-in from 04 01 31 95.
pub const A5_TEACH_IN: &str = "55 00 0a 00 01 80 a5 08 28 0b 80 04 01 31 95 00 84";
/// ERP1 A5-02-05 data from 04 01 31 95, with optional data (-64 dBm).
pub const A5_02_05: &str = "55 00 0a 07 01 eb a5 00 00 80 08 04 01 31 95 00 01 ff ff ff ff 40 00 f7";
/// ERP2 A5-09-04 data from 01 81 4D, with optional data (-60 dBm).
pub const ERP2_A5_09_04: &str = "55 00 09 02 0a 26 02 01 81 4d 50 28 64 0e 65 01 3c a1";
/// ERP2 4BS teach-in announcing A5-02-05 from 01 31 95.
pub const ERP2_TEACH_IN: &str = "55 00 09 02 0a 26 02 01 31 95 08 28 0b 80 81 01 3c a1";
/// ERP2 RPS from 00 2C 86 5C with a 32 bit originator.
pub const ERP2_RPS: &str = "55 00 07 02 0a 0a 20 00 2c 86 5c 81 15 00 48 ff";
/// ERP1 D5-00-01, contact closed, from 04 00 8F E0.
pub const D5_00_01: &str = "55 00 07 00 01 11 d5 09 04 00 8f e0 00 50";
/// ERP1 D2-32-02 from 04 01 86 39.
pub const D2_32_02: &str = "55 00 0c 00 01 fd d2 40 01 20 0f 00 7b 04 01 86 39 00 03";
/// ERP1 UTE teach-in query announcing D2-32-02 from 04 01 86 39.
pub const UTE: &str = "55 00 0d 00 01 96 d4 20 ff 46 00 02 32 d2 04 01 86 39 00 58";
/// COMMON_COMMAND, not a radio telegram.
pub const COMMON_COMMAND: &str = "55 00 01 00 05 70 03 09";

pub fn frame(hex: &str) -> Vec<u8> {
    parse_hex(hex).unwrap()
}

/// The devices in `fixtures/devices.json`.
pub fn registry() -> Registry {
    let registry = Registry::default();
    for (id, eep) in [
        ("04 01 31 95", "A5-02-05"),
        ("01 81 4D", "A5-09-04"),
        ("00 2C 86 5C", "F6-02-04"),
        ("04 00 8F E0", "D5-00-01"),
        ("04 01 86 39", "D2-32-02"),
    ] {
        registry
            .teach(DeviceSpec::builder().id(id).eep(eep).build())
            .unwrap();
    }
    registry
}
