//! A5-09: gas sensors.
use crate::field::{Field, Value, ValueMap};
use crate::telegram::PayloadMessage;

use super::{lrn_bit, Report};

/// A5-09-04, CO2 concentration with optional humidity and temperature.
pub(super) fn decode_04(eep: &str, payload: &[u8]) -> Report {
    let db3 = payload[0];
    let db2 = payload[1];
    let db1 = payload[2];
    let db0 = payload[3];

    let humidity = f64::from(db3) * 5.0 / 10.0;
    let hum_desc = format!("{humidity} %");
    let concentration = u16::from(db2) * 10;
    let conc_desc = format!("{concentration} ppm");
    let temperature = f64::from(db1) * 2.0 / 10.0;
    let tmp_desc = format!("{temperature} ℃");
    let (lrnb, lrnb_field) = lrn_bit(db0);
    let hsn = (db0 & 0b0000_0100) >> 2;
    let tsn = (db0 & 0b0000_0010) >> 1;

    let mut parts = Vec::with_capacity(3);
    if hsn == 1 {
        parts.push(hum_desc.as_str());
    }
    parts.push(conc_desc.as_str());
    if tsn == 1 {
        parts.push(tmp_desc.as_str());
    }
    let available = |flag: u8, v: f64| if flag == 1 { Value::Float(v) } else { Value::Null };

    let message = PayloadMessage {
        value: Some(ValueMap::from([
            ("humidity", available(hsn, humidity)),
            ("concentration", concentration.into()),
            ("temperature", available(tsn, temperature)),
        ])),
        desc: parts.join("/"),
        learn: lrnb == 0,
        ..Default::default()
    };
    let hsn_desc = if hsn == 0 {
        "Humidity Sensor not available"
    } else {
        "Humidity Sensor available"
    };
    let tsn_desc = if tsn == 0 {
        "Temperature Sensor not available"
    } else {
        "Temperature Sensor available"
    };
    let structure = vec![
        Field::item("HUM", "Humidity", db3, hum_desc),
        Field::item("Conc", "Concentration", db2, conc_desc),
        Field::item("TMP", "Temperature", db1, tmp_desc),
        lrnb_field,
        Field::item("HSN", "Humidity Sensor availability", hsn, hsn_desc),
        Field::item("TSN", "Temperature Sensor availability", tsn, tsn_desc),
    ];
    Report::new(eep, payload, message, structure)
}
