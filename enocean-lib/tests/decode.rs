mod common;

use enocean::{decode_telegram, Category, Registry, Value};

use common::*;

#[test]
fn erp1_4bs_data() {
    let telegram = decode_telegram(&frame(A5_02_05), &registry());
    let message = &telegram.message;

    assert_eq!(telegram.category(), Category::Known);
    assert!(message.crc);
    assert_eq!(message.oid.as_deref(), Some("04 01 31 95"));
    assert_eq!(message.eep, "A5-02-05");
    assert_eq!(message.eep_desc.rorg, "A5");
    assert_eq!(message.eep_desc.func_desc, "Temperature Sensors");
    assert_eq!(message.payload.desc, "19.9℃");
    assert_eq!(
        message.payload.value.as_ref().unwrap()["temperature"],
        Value::Float(19.9)
    );
    assert!(!message.learn());
    assert_eq!(message.dbm, Some(-64));
    assert_eq!(message.data_dl_buffer, vec![0x00, 0x00, 0x80, 0x08]);

    let device = message.device.as_ref().unwrap();
    assert_eq!(device.id, "000004013195");
    assert!(device.learned);

    assert_eq!(
        telegram.find("LRNB").unwrap().desc.as_deref(),
        Some("Data telegram")
    );
    assert_eq!(
        telegram.find("Status").unwrap().desc.as_deref(),
        Some("Original sender, 0")
    );
}

#[test]
fn erp1_4bs_teach_in_is_learn_regardless_of_registry() {
    for registry in [registry(), Registry::default()] {
        let telegram = decode_telegram(&frame(A5_TEACH_IN), &registry);
        assert_eq!(telegram.category(), Category::Learn);
        assert!(telegram.message.crc);
        assert!(telegram.message.payload.value.is_none());
    }
}

#[test]
fn erp2_data() {
    let telegram = decode_telegram(&frame(ERP2_A5_09_04), &registry());
    let message = &telegram.message;

    assert_eq!(telegram.category(), Category::Known);
    assert!(message.crc);
    assert_eq!(message.oid.as_deref(), Some("01 81 4D"));
    assert_eq!(message.payload.desc, "40 %/400 ppm/20 ℃");
    assert_eq!(message.dbm_desc.as_deref(), Some("-60 dBm"));

    let data = telegram.node("Data").unwrap();
    let header = data.child("Header").unwrap();
    assert_eq!(
        header.child("TT").unwrap().desc.as_deref(),
        Some("4BS telegram (0xA5)")
    );
    assert_eq!(data.child("CRC").unwrap().desc.as_deref(), Some("valid"));
}

#[test]
fn erp2_teach_in_from_unknown_device() {
    let registry = registry();
    let telegram = decode_telegram(&frame(ERP2_TEACH_IN), &registry);
    let message = &telegram.message;

    assert_eq!(telegram.category(), Category::Learn);
    assert_eq!(message.eep, "A5-02-05");
    assert!(message.known);
    assert_eq!(message.payload.mid, Some(0x00b));
    assert_eq!(
        message.payload.manufacturer_desc.as_deref(),
        Some("ENOCEAN_GMBH")
    );

    let device = message.device.as_ref().unwrap();
    assert_eq!(device.id, "000000013195");
    assert!(!device.learned);
    assert!(registry.get_device_info("01 31 95").is_none());
}

#[test]
fn erp2_rps_with_32_bit_originator() {
    let telegram = decode_telegram(&frame(ERP2_RPS), &registry());
    let message = &telegram.message;
    assert_eq!(message.oid.as_deref(), Some("00 2C 86 5C"));
    assert_eq!(message.eep, "F6-02-04");
    assert_eq!(message.payload.desc, "A0 pressed");
    assert_eq!(message.dbm, Some(-72));
}

#[test]
fn erp1_1bs_and_vld() {
    let registry = registry();

    let telegram = decode_telegram(&frame(D5_00_01), &registry);
    assert_eq!(telegram.message.payload.desc, "closed");
    assert_eq!(
        telegram.message.payload.value.as_ref().unwrap()["contact"],
        Value::Int(1)
    );

    let telegram = decode_telegram(&frame(D2_32_02), &registry);
    assert_eq!(telegram.category(), Category::Known);
    assert_eq!(telegram.message.payload.desc, "1.8A/1.5A/0.7A");
}

#[test]
fn ute_teach_in() {
    let telegram = decode_telegram(&frame(UTE), &Registry::default());
    let message = &telegram.message;
    assert_eq!(telegram.category(), Category::Learn);
    assert_eq!(message.eep, "D2-32-02");
    let ute = message.payload.ute.as_ref().unwrap();
    assert_eq!(ute.cmd_desc, "EEP Teach-In Query");
    assert_eq!(
        telegram.find("CHA").unwrap().desc.as_deref(),
        Some("Teach-in of all channels supported by the device")
    );
}

#[test]
fn unregistered_profile_is_unknown() {
    let telegram = decode_telegram(&frame(A5_02_05), &Registry::default());
    let message = &telegram.message;
    assert_eq!(telegram.category(), Category::Unknown);
    assert_eq!(message.eep, "");
    assert!(!message.known);
    assert!(message.payload.value.is_none());
    assert_eq!(message.device.as_ref().unwrap().id, "000004013195");
}

#[test]
fn non_radio_packet() {
    let telegram = decode_telegram(&frame(COMMON_COMMAND), &registry());
    assert_eq!(telegram.category(), Category::Unknown);
    assert!(telegram.message.crc);
    assert!(telegram.message.oid.is_none());
    assert_eq!(telegram.hex, vec!["55", "00", "01", "00", "05", "70", "03", "09"]);
}

#[test]
fn corrupted_header_crc() {
    let mut dat = frame(D5_00_01);
    dat[5] ^= 0x01;
    let telegram = decode_telegram(&dat, &registry());
    assert!(!telegram.message.crc);
    assert_eq!(
        telegram.node("CRC8H").unwrap().desc.as_deref(),
        Some("invalid")
    );
    // decoding carries on
    assert_eq!(telegram.message.payload.desc, "closed");
}
