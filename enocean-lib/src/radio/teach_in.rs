//! Teach-in sub-formats carried in Data_DL.
//!
//! Each decoder returns `None` when the payload is not a teach-in telegram of
//! its kind, letting the caller fall back to normal profile decoding.
use crate::bytes::hex_byte;
use crate::desc::manufacturer_name;
use crate::eep::{lrn_bit, Report, DATA_DL};
use crate::field::Field;
use crate::telegram::{PayloadMessage, UteTeachIn};

fn learn_message(mid: Option<u16>, ute: Option<UteTeachIn>) -> PayloadMessage {
    PayloadMessage {
        value: None,
        desc: String::new(),
        learn: true,
        mid,
        manufacturer_desc: mid.map(|m| manufacturer_name(m).unwrap_or_default().to_string()),
        ute,
    }
}

fn mid_field(mid: u16) -> Field {
    Field::builder()
        .key("MID")
        .field("Manufacturer ID")
        .value(mid)
        .hex(vec![format!("{mid:04X}")])
        .desc(manufacturer_name(mid).unwrap_or_default())
        .build()
}

/// A code field whose description is its own hex value.
fn code_field(key: &str, raw: u8) -> Field {
    Field::item(key, key, raw, hex_byte(raw))
}

/// Teach-in report that carries no profile id.
fn anonymous(payload: &[u8], lrnb_field: Field) -> Report {
    Report {
        eep: None,
        message: learn_message(None, None),
        field: Field::block(DATA_DL, payload).with_structure(vec![lrnb_field]),
    }
}

fn profile_id(rorg: u8, func: u8, type_: u8) -> String {
    format!("{rorg:02X}-{func:02X}-{type_:02X}")
}

/// ERP2 4BS teach-in: the payload announces FUNC, TYPE and manufacturer.
pub(crate) fn erp2_4bs(payload: &[u8]) -> Option<Report> {
    let [db3, db2, db1, db0] = <[u8; 4]>::try_from(payload).ok()?;
    let (lrnb, lrnb_field) = lrn_bit(db0);
    if lrnb != 0 {
        return None;
    }

    let func = db3 >> 2;
    let type_ = ((u16::from_be_bytes([db3, db2]) >> 3) & 0x7f) as u8;
    let mid = u16::from_be_bytes([db2, db1]) & 0x07ff;
    let lrnt = (db0 & 0b1000_0000) >> 7;
    let eepr = (db0 & 0b0100_0000) >> 6;
    let lrnr = (db0 & 0b0010_0000) >> 5;
    let lrns = (db0 & 0b0001_0000) >> 4;

    let lrnt_desc = if lrnt == 0 {
        "telegram without EEP and Manufacturer ID"
    } else {
        "telegram with EEP number and Manufacturer ID"
    };
    let eepr_desc = if eepr == 0 {
        "EEP not supported"
    } else {
        "EEP supported"
    };
    let lrnr_desc = if lrnr == 0 {
        "Sender ID deleted/not stored"
    } else {
        "Sender ID stored"
    };
    let lrns_desc = if lrns == 0 { "Query" } else { "Response" };

    let structure = vec![
        code_field("FUNC", func),
        code_field("TYPE", type_),
        mid_field(mid),
        Field::item("LRNT", "LRN Type", lrnt, lrnt_desc),
        Field::item("EEPR", "EEP Result", eepr, eepr_desc),
        Field::item("LRNR", "LRN Result", lrnr, lrnr_desc),
        Field::item("LRNS", "LRN Status", lrns, lrns_desc),
        lrnb_field,
    ];
    let eep = profile_id(0xa5, func, type_);
    Some(Report::new(
        &eep,
        payload,
        learn_message(Some(mid), None),
        structure,
    ))
}

/// ERP2 1BS teach-in. The payload carries no profile id.
pub(crate) fn erp2_1bs(payload: &[u8]) -> Option<Report> {
    let [d] = <[u8; 1]>::try_from(payload).ok()?;
    let (lrnb, lrnb_field) = lrn_bit(d);
    if lrnb != 0 {
        return None;
    }
    Some(anonymous(payload, lrnb_field))
}

/// ERP1 4BS teach-in without profile information.
pub(crate) fn erp1_4bs(payload: &[u8]) -> Option<Report> {
    let [_, _, _, db0] = <[u8; 4]>::try_from(payload).ok()?;
    let (lrnb, lrnb_field) = lrn_bit(db0);
    if lrnb != 0 {
        return None;
    }
    Some(anonymous(payload, lrnb_field))
}

/// ERP1 universal teach-in (UTE) query or response.
pub(crate) fn erp1_ute(payload: &[u8]) -> Option<Report> {
    let [db6, db5, db4, db3, type_, func, rorg] = <[u8; 7]>::try_from(payload).ok()?;

    let dir = (db6 & 0b1000_0000) >> 7;
    let dir_desc = if dir == 0 {
        "Unidirectional communication (EEP operation)"
    } else {
        "Bidirectional communication (EEP operation)"
    };
    let expected = (db6 & 0b0100_0000) >> 6;
    let expected_desc = if expected == 0 {
        "EEP Teach-In Response message expected"
    } else {
        "No EEP Teach-In-Response message expected"
    };
    let accepted = (db6 & 0b0011_0000) >> 4;
    let accepted_desc = match accepted {
        0 => "Request not accepted, general reason",
        1 => "Request accepted, teach-in successful",
        2 => "Request accepted, deletion of teach-in successful",
        _ => "Request not accepted, EEP not supported",
    };
    let cmd = db6 & 0b0000_1111;
    let cmd_desc = match cmd {
        0 => "EEP Teach-In Query",
        1 => "EEP Teach-In Response",
        _ => "",
    };
    let channel_desc = if db5 == 0xff {
        "Teach-in of all channels supported by the device".to_string()
    } else {
        db5.to_string()
    };
    let mid = (u16::from(db3 & 0b0000_0111) << 8) + u16::from(db4);

    let structure = vec![
        Field::item(
            "DIR",
            "Uni-bi-directional communication (EEP operation)",
            dir,
            dir_desc,
        ),
        Field::item(
            "EXP",
            "EEP Teach-In-Response message expected y/n",
            expected,
            expected_desc,
        ),
        Field::item("ACC", "Request accepted", accepted, accepted_desc),
        Field::item("CMD", "Command identifier", cmd, cmd_desc),
        Field::item(
            "CHA",
            "No. of individual channel to be taught in",
            db5,
            channel_desc.clone(),
        ),
        mid_field(mid),
        code_field("TYPE", type_),
        code_field("FUNC", func),
        code_field("RORG", rorg),
    ];
    let ute = UteTeachIn {
        dir,
        dir_desc: dir_desc.to_string(),
        expected,
        expected_desc: expected_desc.to_string(),
        accepted,
        accepted_desc: accepted_desc.to_string(),
        cmd,
        cmd_desc: cmd_desc.to_string(),
        channel: db5,
        channel_desc,
    };
    let eep = profile_id(rorg, func, type_);
    Some(Report::new(
        &eep,
        payload,
        learn_message(Some(mid), Some(ute)),
        structure,
    ))
}
