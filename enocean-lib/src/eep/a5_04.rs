//! A5-04: temperature and humidity sensors.
use crate::field::{Field, Value, ValueMap};
use crate::telegram::PayloadMessage;

use super::{fixed, lrn_bit, round_to, Report};

fn tsn_desc(tsn: u8) -> &'static str {
    if tsn == 0 {
        "Temperature Sensor not available"
    } else {
        "Temperature Sensor available"
    }
}

fn ttp_desc(ttp: u8) -> &'static str {
    if ttp == 0 {
        "Heartbeat"
    } else {
        "Event triggered"
    }
}

/// A5-04-01, 0℃ to +40℃ and 0% to 100%.
pub(super) fn decode_01(eep: &str, payload: &[u8]) -> Report {
    let db2 = payload[1];
    let db1 = payload[2];
    let db0 = payload[3];

    let (humidity, humidity_str) = fixed(f64::from(db2) * 100.0 / 250.0, 1);
    let hum_desc = format!("{humidity_str} %");
    let (temperature, temperature_str) = fixed(f64::from(db1) * 40.0 / 250.0, 1);
    let tmp_desc = format!("{temperature_str} ℃");
    let (lrnb, lrnb_field) = lrn_bit(db0);
    let tsn = (db0 & 0b0000_0010) >> 1;

    let desc = if tsn == 1 {
        format!("{hum_desc}/{tmp_desc}")
    } else {
        hum_desc.clone()
    };
    let temperature = if tsn == 1 {
        Value::Float(temperature)
    } else {
        Value::Null
    };
    let message = PayloadMessage {
        value: Some(ValueMap::from([
            ("humidity", humidity.into()),
            ("temperature", temperature),
        ])),
        desc,
        learn: lrnb == 0,
        ..Default::default()
    };
    let structure = vec![
        Field::item("HUM", "Humidity", db2, hum_desc),
        Field::item("TMP", "Temperature", db1, tmp_desc),
        lrnb_field,
        Field::item("TSN", "Temperature Sensor availability", tsn, tsn_desc(tsn)),
    ];
    Report::new(eep, payload, message, structure)
}

/// A5-04-03, -20℃ to +60℃ with a 10 bit temperature and 0% to 100%.
pub(super) fn decode_03(eep: &str, payload: &[u8]) -> Report {
    let db3 = payload[0];
    let db2 = payload[1];
    let db1 = payload[2];
    let db0 = payload[3];

    let humidity = round_to(f64::from(db3) * 100.0 / 255.0, 1);
    let hum_desc = format!("{humidity} %");
    let tmp = (u16::from(db2 & 0b0000_0011) << 8) + u16::from(db1);
    let temperature = round_to(-20.0 + f64::from(tmp) * 80.0 / 1023.0, 2);
    let tmp_desc = format!("{temperature} ℃");
    let (lrnb, lrnb_field) = lrn_bit(db0);
    let ttp = (db0 & 0b0000_0010) >> 1;

    let message = PayloadMessage {
        value: Some(ValueMap::from([
            ("humidity", humidity.into()),
            ("temperature", temperature.into()),
            ("ttp", ttp.into()),
        ])),
        desc: format!("{hum_desc}/{tmp_desc}"),
        learn: lrnb == 0,
        ..Default::default()
    };
    let structure = vec![
        Field::item("HUM", "Humidity", db3, hum_desc),
        Field::wide("TMP", "Temperature", tmp, tmp_desc),
        lrnb_field,
        Field::item("TTP", "Telegram Type", ttp, ttp_desc(ttp)),
    ];
    Report::new(eep, payload, message, structure)
}

#[cfg(test)]
mod tests {
    use super::super::decode;
    use crate::field::Value;

    #[test]
    fn a5_04_01_with_temperature() {
        // hum 125 -> 50 %, tmp 125 -> 20 ℃, LRN data, TSN available
        let report = decode("A5-04-01", &[0x00, 125, 125, 0x0a]);
        assert_eq!(report.message.desc, "50.0 %/20.0 ℃");
        assert!(!report.message.learn);
        let value = report.message.value.unwrap();
        assert_eq!(value["humidity"], Value::Float(50.0));
        assert_eq!(value["temperature"], Value::Float(20.0));
        assert_eq!(
            report.field.child("TSN").unwrap().desc.as_deref(),
            Some("Temperature Sensor available")
        );
    }

    #[test]
    fn a5_04_01_without_temperature() {
        let report = decode("A5-04-01", &[0x00, 125, 125, 0x08]);
        assert_eq!(report.message.desc, "50.0 %");
        assert!(report.message.value.unwrap()["temperature"].is_null());
    }

    #[test]
    fn a5_04_03() {
        // hum 255 -> 100, tmp 0x3ff -> 60, event triggered
        let report = decode("A5-04-03", &[0xff, 0x03, 0xff, 0x0a]);
        assert_eq!(report.message.desc, "100 %/60 ℃");
        let value = report.message.value.unwrap();
        assert_eq!(value["humidity"], Value::Float(100.0));
        assert_eq!(value["temperature"], Value::Float(60.0));
        assert_eq!(value["ttp"], Value::Int(1));

        let tmp = report.field.child("TMP").unwrap();
        assert_eq!(tmp.value, Some(Value::Int(0x3ff)));
        assert_eq!(tmp.hex, vec!["03FF"]);
    }

    #[test]
    fn a5_04_03_minimum() {
        let report = decode("A5-04-03", &[0x00, 0x00, 0x00, 0x00]);
        assert_eq!(report.message.desc, "0 %/-20 ℃");
        assert!(report.message.learn);
        assert_eq!(
            report.field.child("TTP").unwrap().desc.as_deref(),
            Some("Heartbeat")
        );
    }
}
