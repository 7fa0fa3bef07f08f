//! D5-00: contacts and switches.
use crate::bytes::bin_slice;
use crate::field::{Field, ValueMap};
use crate::telegram::PayloadMessage;

use super::Report;

/// D5-00-01, single input contact.
pub(super) fn decode_01(eep: &str, payload: &[u8]) -> Report {
    let d = payload[0];
    let lrn = (d & 0b0000_1000) >> 3;
    let lrn_desc = if lrn == 0 { "pressed" } else { "not pressed" };
    let co = d & 0b0000_0001;
    let co_desc = if co == 0 { "open" } else { "closed" };

    let message = PayloadMessage {
        value: Some(ValueMap::from([("contact", co.into())])),
        desc: co_desc.to_string(),
        learn: lrn == 0,
        ..Default::default()
    };
    let structure = vec![
        Field::item("LRN", "Learn Button", lrn, lrn_desc).with_bin(bin_slice(d, 4, 1)),
        Field::item("CO", "Contact", co, co_desc).with_bin(bin_slice(d, 7, 1)),
    ];
    Report::new(eep, payload, message, structure)
}
