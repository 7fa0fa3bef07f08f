//! A5-02: temperature sensors.
use crate::field::{Field, ValueMap};
use crate::telegram::PayloadMessage;

use super::{fixed, lrn_bit_with_bin, Report};

/// A5-02-05, 0℃ to +40℃. DB1 is inverted: 0 reads 40℃ and 255 reads 0℃.
pub(super) fn decode_05(eep: &str, payload: &[u8]) -> Report {
    let db1 = payload[2];
    let db0 = payload[3];

    let (temperature, temperature_str) = fixed(40.0 * (1.0 - f64::from(db1) / 255.0), 1);
    let desc = format!("{temperature_str}℃");
    let (lrnb, lrnb_field) = lrn_bit_with_bin(db0);

    let message = PayloadMessage {
        value: Some(ValueMap::from([("temperature", temperature.into())])),
        desc: desc.clone(),
        learn: lrnb == 0,
        ..Default::default()
    };
    let structure = vec![Field::item("TMP", "Temperature", db1, desc), lrnb_field];
    Report::new(eep, payload, message, structure)
}

#[cfg(test)]
mod tests {
    use super::super::decode;
    use crate::field::Value;

    #[test]
    fn data_telegram() {
        let report = decode("A5-02-05", &[0x00, 0x00, 0x80, 0x08]);
        assert_eq!(report.eep.as_deref(), Some("A5-02-05"));
        assert_eq!(report.message.desc, "19.9℃");
        assert!(!report.message.learn);
        let value = report.message.value.unwrap();
        assert_eq!(value["temperature"], Value::Float(19.9));

        let tmp = report.field.child("TMP").unwrap();
        assert_eq!(tmp.value, Some(Value::Int(0x80)));
        assert_eq!(tmp.hex, vec!["80"]);
        let lrnb = report.field.child("LRNB").unwrap();
        assert_eq!(lrnb.bin.as_deref(), Some("1"));
        assert_eq!(lrnb.desc.as_deref(), Some("Data telegram"));
    }

    #[test]
    fn range_ends() {
        assert_eq!(decode("A5-02-05", &[0, 0, 0x00, 0x08]).message.desc, "40.0℃");
        assert_eq!(decode("A5-02-05", &[0, 0, 0xff, 0x08]).message.desc, "0.0℃");
    }

    #[test]
    fn teach_in_bit() {
        let report = decode("A5-02-05", &[0x00, 0x00, 0x80, 0x00]);
        assert!(report.message.learn);
        assert_eq!(
            report.field.child("LRN Bit").unwrap().desc.as_deref(),
            Some("Teach-in telegram")
        );
    }
}
