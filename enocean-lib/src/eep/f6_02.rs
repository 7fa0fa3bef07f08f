//! F6-02: two rocker light and blind switches.
use crate::bytes::bin_slice;
use crate::field::{Field, ValueMap};
use crate::telegram::PayloadMessage;

use super::Report;

fn rocker_name(action: u8) -> &'static str {
    match action {
        0 => "AI",
        1 => "A0",
        2 => "BI",
        3 => "B0",
        _ => "",
    }
}

fn pressed_desc(bit: u8) -> &'static str {
    if bit == 0 {
        "released"
    } else {
        "pressed"
    }
}

/// F6-02-01 and F6-02-02 share the same layout.
pub(super) fn decode_rocker(eep: &str, payload: &[u8]) -> Report {
    let d = payload[0];
    let r1 = d >> 5;
    let eb = (d & 0b0001_0000) >> 4;
    let r2 = (d & 0b0000_1110) >> 1;
    let sa = d & 0b0000_0001;
    let button = rocker_name(r1);
    let eb_desc = pressed_desc(eb);

    let message = PayloadMessage {
        value: Some(ValueMap::from([
            ("button", button.into()),
            ("pressed", eb.into()),
        ])),
        desc: format!("{button} {eb_desc}"),
        learn: false,
        ..Default::default()
    };
    let sa_desc = if sa == 0 {
        "No 2nd action"
    } else {
        "2nd action valid"
    };
    let structure = vec![
        Field::item("R1", "Rocker 1st action", r1, button).with_bin(bin_slice(d, 0, 3)),
        Field::item("EB", "Energy Bow", eb, eb_desc).with_bin(bin_slice(d, 3, 1)),
        Field::item("R2", "Rocker 2nd action", r2, rocker_name(r2)).with_bin(bin_slice(d, 4, 3)),
        Field::item("SA", "2nd Action", sa, sa_desc).with_bin(bin_slice(d, 7, 1)),
    ];
    Report::new(eep, payload, message, structure)
}

/// F6-02-04, one bit per rocker position.
pub(super) fn decode_04(eep: &str, payload: &[u8]) -> Report {
    let d = payload[0];
    let ebo = d >> 7;
    let ebo_desc = pressed_desc(ebo);
    let bc = (d & 0b0100_0000) >> 6;
    let bc_desc = if bc == 0 { "button" } else { "" };

    // (key, name, bit position); the last pressed position names the button
    let positions = [("RBI", "BI", 3), ("RB0", "B0", 2), ("RAI", "AI", 1), ("RA0", "A0", 0)];
    let mut button = "";
    let mut structure = vec![
        Field::item("EBO", "Energy Bow", ebo, ebo_desc).with_bin(bin_slice(d, 0, 1)),
        Field::item("BC", "Button coding", bc, bc_desc).with_bin(bin_slice(d, 1, 1)),
    ];
    for (key, name, bit) in positions {
        let state = (d >> bit) & 1;
        let desc = if state == 1 {
            button = name;
            "pressed"
        } else {
            "not pressed"
        };
        structure.push(Field::item(key, name, state, desc).with_bin(bin_slice(d, 7 - bit, 1)));
    }

    let desc = if button.is_empty() {
        ebo_desc.to_string()
    } else {
        format!("{button} {ebo_desc}")
    };
    let message = PayloadMessage {
        value: Some(ValueMap::from([
            ("button", button.into()),
            ("pressed", ebo.into()),
        ])),
        desc,
        learn: false,
        ..Default::default()
    };
    Report::new(eep, payload, message, structure)
}
