//! A5-07: occupancy sensors.
use crate::field::{Field, ValueMap};
use crate::telegram::PayloadMessage;

use super::{lrn_bit, Report};

/// A5-07-01, PIR status with an optional supply voltage reading.
pub(super) fn decode_01(eep: &str, payload: &[u8]) -> Report {
    let db3 = payload[0];
    let db1 = payload[2];
    let db0 = payload[3];

    // 251..=255 are error codes
    let (svc, svc_desc) = if db3 <= 250 {
        let v = f64::from(db3) * 5.0 / 250.0;
        (v, format!("{v} V"))
    } else {
        (0.0, format!("error code: {db3}"))
    };
    let (pirs, pirs_desc) = if db1 >= 128 {
        (1u8, "PIR on")
    } else {
        (0u8, "PIR off")
    };
    let (lrnb, lrnb_field) = lrn_bit(db0);
    let sva = db0 & 0b0000_0001;
    let sva_desc = if sva == 0 {
        "Supply voltage is not supported"
    } else {
        "Supply voltage is supported"
    };

    let message = PayloadMessage {
        value: Some(ValueMap::from([("pirs", pirs.into()), ("svc", svc.into())])),
        desc: format!("{pirs_desc}/{svc_desc}"),
        learn: lrnb == 0,
        ..Default::default()
    };
    let structure = vec![
        Field::item("SVC", "Supply voltage", db3, svc_desc),
        Field::item("PIRS", "PIR Status", db1, pirs_desc),
        lrnb_field,
        Field::item("SVA", "Supply voltage availability", sva, sva_desc),
    ];
    Report::new(eep, payload, message, structure)
}
