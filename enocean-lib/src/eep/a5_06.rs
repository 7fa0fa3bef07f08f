//! A5-06: light sensors.
//!
//! Both types report two illumination ranges and a range select bit choosing
//! which one is the reading.
use crate::bytes::bin_slice;
use crate::field::{Field, ValueMap};
use crate::telegram::PayloadMessage;

use super::{lrn_bit_with_bin, round_to, Report};

/// Full scale values of (ILL2, ILL1) in lux.
fn decode_ranges(eep: &str, payload: &[u8], ill2_max: f64, ill1_max: f64) -> Report {
    let db3 = payload[0];
    let db2 = payload[1];
    let db1 = payload[2];
    let db0 = payload[3];

    let svc = round_to(f64::from(db3) * 5.1 / 255.0, 2);
    let svc_desc = format!("{svc} V");
    let ill2 = f64::from(db2) * ill2_max / 255.0;
    let ill2_desc = format!("{ill2} lx");
    let ill1 = f64::from(db1) * ill1_max / 255.0;
    let ill1_desc = format!("{ill1} lx");
    let (lrnb, lrnb_field) = lrn_bit_with_bin(db0);
    let rs = db0 & 0b0000_0001;
    let (rs_desc, ill, ill_desc) = if rs == 0 {
        ("Range acc. to DB_1 (ILL1)", ill1, ill1_desc.clone())
    } else {
        ("Range acc. to DB_2 (ILL2)", ill2, ill2_desc.clone())
    };

    let message = PayloadMessage {
        value: Some(ValueMap::from([("ill", ill.into()), ("svc", svc.into())])),
        desc: ill_desc,
        learn: lrnb == 0,
        ..Default::default()
    };
    let structure = vec![
        Field::item("SVC", "Supply voltage", db3, svc_desc),
        Field::item("ILL2", "Illumination 2", db2, ill2_desc),
        Field::item("ILL1", "Illumination 1", db1, ill1_desc),
        lrnb_field,
        Field::item("RS", "Range select", rs, rs_desc).with_bin(bin_slice(db0, 7, 1)),
    ];
    Report::new(eep, payload, message, structure)
}

/// A5-06-02, 0lx to 1020lx.
pub(super) fn decode_02(eep: &str, payload: &[u8]) -> Report {
    decode_ranges(eep, payload, 510.0, 1020.0)
}

/// A5-06-05, 0lx to 10200lx.
pub(super) fn decode_05(eep: &str, payload: &[u8]) -> Report {
    decode_ranges(eep, payload, 5100.0, 10200.0)
}
