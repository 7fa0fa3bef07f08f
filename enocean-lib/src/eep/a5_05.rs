//! A5-05: barometric sensor.
use crate::bytes::bin_slice;
use crate::field::{Field, ValueMap};
use crate::telegram::PayloadMessage;

use super::{lrn_bit_with_bin, round_to, Report};

/// A5-05-01, 500 to 1150 hPa in 10 bits spread over DB3 and DB2.
pub(super) fn decode_01(eep: &str, payload: &[u8]) -> Report {
    let db0 = payload[3];

    let bar = u16::from_be_bytes([payload[0], payload[1]]) & 0x03ff;
    let hpa = round_to(500.0 + f64::from(bar) * (1150.0 - 500.0) / 1023.0, 0) as i64;
    let desc = format!("{hpa} hPa");
    let (lrnb, lrnb_field) = lrn_bit_with_bin(db0);
    let ttp = db0 & 0b0000_0001;
    let ttp_desc = if ttp == 0 { "Heartbeat" } else { "Event triggered" };

    let message = PayloadMessage {
        value: Some(ValueMap::from([("bar", hpa.into()), ("ttp", ttp.into())])),
        desc: desc.clone(),
        learn: lrnb == 0,
        ..Default::default()
    };
    let structure = vec![
        Field::wide("BAR", "Barometer", bar, desc),
        lrnb_field,
        Field::item("TTP", "Telegram Type", ttp, ttp_desc).with_bin(bin_slice(db0, 7, 1)),
    ];
    Report::new(eep, payload, message, structure)
}
