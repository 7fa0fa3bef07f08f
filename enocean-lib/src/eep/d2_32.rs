//! D2-32: A.C. current clamps.
use crate::bytes::bin_slice;
use crate::field::{Field, ValueMap};
use crate::telegram::PayloadMessage;

use super::Report;

/// D2-32-02, three 12 bit current channels.
pub(super) fn decode_02(eep: &str, payload: &[u8]) -> Report {
    let db5 = payload[0];
    let pf = (db5 & 0b1000_0000) >> 7;
    let div = (db5 & 0b0100_0000) >> 6;
    let divisor = if div == 1 { 10.0 } else { 1.0 };

    let word = |i: usize| u16::from_be_bytes([payload[i], payload[i + 1]]);
    let raw = [
        (word(1) & 0xfff0) >> 4,
        word(2) & 0x0fff,
        (word(4) & 0xfff0) >> 4,
    ];
    let amps = raw.map(|ch| f64::from(ch) / divisor);
    let descs = amps.map(|a| format!("{a}A"));

    let message = PayloadMessage {
        value: Some(ValueMap::from([
            ("fail", (pf == 1).into()),
            ("ch1", amps[0].into()),
            ("ch2", amps[1].into()),
            ("ch3", amps[2].into()),
        ])),
        desc: descs.join("/"),
        learn: false,
        ..Default::default()
    };
    let [d1, d2, d3] = descs;
    let structure = vec![
        Field::item("PF", "Power Fail", pf, if pf == 1 { "True" } else { "False" })
            .with_bin(bin_slice(db5, 0, 1)),
        Field::item("DIV", "Divisor", div, if div == 1 { "x/10" } else { "x/1" })
            .with_bin(bin_slice(db5, 1, 1)),
        Field::wide("CH1", "Channel 1", raw[0], d1),
        Field::wide("CH2", "Channel 2", raw[1], d2),
        Field::wide("CH3", "Channel 3", raw[2], d3),
    ];
    Report::new(eep, payload, message, structure)
}
