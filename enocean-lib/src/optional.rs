//! Decoders for the optional data region that follows the data region of an
//! ESP3 packet. Its layout depends on the packet type.
use tracing::debug;

use crate::bytes::{hex_byte, hex_join, hex_list};
use crate::esp3::{RADIO_ERP1, RADIO_ERP2, RADIO_MESSAGE, RADIO_SUB_TEL, REMOTE_MAN_COMMAND};
use crate::field::Field;

/// Name of the top level node for the optional data region.
pub(crate) const OPTIONAL_DATA: &str = "Optional Data";

/// What the optional data region contributes to a telegram.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct OptionalData {
    pub field: Field,
    /// Signal strength, negative dBm.
    pub dbm: Option<i16>,
    pub dbm_desc: Option<String>,
}

impl OptionalData {
    fn unknown(opt: &[u8]) -> Self {
        Self {
            field: Field::block(OPTIONAL_DATA, opt),
            ..Default::default()
        }
    }

    fn with_dbm(opt: &[u8], dbm: u8, structure: Vec<Field>) -> Self {
        Self {
            field: Field::block(OPTIONAL_DATA, opt).with_structure(structure),
            dbm: Some(-i16::from(dbm)),
            dbm_desc: Some(dbm_desc(dbm)),
        }
    }
}

fn dbm_desc(dbm: u8) -> String {
    format!("-{dbm} dBm")
}

fn byte_field(name: &str, b: u8, desc: String) -> Field {
    Field::builder()
        .field(name)
        .value(b)
        .hex(vec![hex_byte(b)])
        .buffer(vec![b])
        .desc(desc)
        .build()
}

fn count_field(name: &str, b: u8) -> Field {
    byte_field(name, b, b.to_string())
}

fn dbm_field(b: u8) -> Field {
    byte_field("dBm", b, dbm_desc(b))
}

fn id_field(name: &str, id: &[u8]) -> Field {
    let desc = hex_join(id);
    Field::builder()
        .field(name)
        .value(desc.clone())
        .hex(hex_list(id))
        .buffer(id.to_vec())
        .desc(desc)
        .build()
}

/// RADIO_ERP1 and RADIO_SUB_TEL.
fn radio_sub_tel(opt: &[u8]) -> Option<OptionalData> {
    let &[sub_tel_num, d0, d1, d2, d3, dbm, security_level, ..] = opt else {
        return None;
    };
    let structure = vec![
        count_field("SubTelNum", sub_tel_num),
        id_field("Destination ID", &[d0, d1, d2, d3]),
        dbm_field(dbm),
        count_field("SecurityLevel", security_level),
    ];
    Some(OptionalData::with_dbm(opt, dbm, structure))
}

fn remote_man_command(opt: &[u8]) -> Option<OptionalData> {
    let &[_, _, _, _, _, _, _, _, dbm, send_with_delay, ..] = opt else {
        return None;
    };
    let structure = vec![
        id_field("Destination ID", &opt[..4]),
        id_field("Source ID", &opt[4..8]),
        dbm_field(dbm),
        count_field("Send With Delay", send_with_delay),
    ];
    Some(OptionalData::with_dbm(opt, dbm, structure))
}

fn radio_message(opt: &[u8]) -> Option<OptionalData> {
    let &[_, _, _, _, _, _, _, _, dbm, ..] = opt else {
        return None;
    };
    let structure = vec![
        id_field("Destination ID", &opt[..4]),
        id_field("Source ID", &opt[4..8]),
        dbm_field(dbm),
    ];
    Some(OptionalData::with_dbm(opt, dbm, structure))
}

fn radio_erp2(opt: &[u8]) -> Option<OptionalData> {
    let &[sub_tel_num, dbm, ..] = opt else {
        return None;
    };
    let structure = vec![count_field("SubTelNum", sub_tel_num), dbm_field(dbm)];
    Some(OptionalData::with_dbm(opt, dbm, structure))
}

/// Decode the optional data region of a packet of `packet_type`.
///
/// Unrecognized packet types and regions too short for their format are
/// returned as an opaque block with no signal strength.
pub(crate) fn decode(packet_type: u8, opt: &[u8]) -> OptionalData {
    let decoded = match packet_type {
        RADIO_ERP1 | RADIO_SUB_TEL => radio_sub_tel(opt),
        REMOTE_MAN_COMMAND => remote_man_command(opt),
        RADIO_MESSAGE => radio_message(opt),
        RADIO_ERP2 => radio_erp2(opt),
        _ => return OptionalData::unknown(opt),
    };
    decoded.unwrap_or_else(|| {
        debug!(packet_type, len = opt.len(), "optional data too short");
        OptionalData::unknown(opt)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Value;

    #[test]
    fn erp1() {
        let opt = [0x01, 0xff, 0xff, 0xff, 0xff, 0x40, 0x00];
        let decoded = decode(0x01, &opt);
        assert_eq!(decoded.dbm, Some(-64));
        assert_eq!(decoded.dbm_desc.as_deref(), Some("-64 dBm"));

        let names: Vec<_> = decoded
            .field
            .structure
            .iter()
            .map(|f| f.field.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["SubTelNum", "Destination ID", "dBm", "SecurityLevel"]
        );
        let did = decoded.field.child("Destination ID").unwrap();
        assert_eq!(did.desc.as_deref(), Some("FF FF FF FF"));
        assert_eq!(did.value, Some(Value::Text("FF FF FF FF".into())));
        assert_eq!(decoded.field.buffer, opt);
    }

    #[test]
    fn erp2() {
        let decoded = decode(0x0a, &[0x01, 0x3c]);
        assert_eq!(decoded.dbm, Some(-60));
        assert_eq!(
            decoded.field.child("SubTelNum").unwrap().desc.as_deref(),
            Some("1")
        );
    }

    #[test]
    fn remote_man() {
        let opt = [0xff, 0xff, 0xff, 0xff, 0x04, 0x01, 0x31, 0x95, 0x50, 0x00];
        let decoded = decode(0x07, &opt);
        assert_eq!(decoded.dbm, Some(-80));
        assert_eq!(
            decoded.field.child("Source ID").unwrap().desc.as_deref(),
            Some("04 01 31 95")
        );
        assert_eq!(
            decoded.field.child("Send With Delay").unwrap().value,
            Some(Value::Int(0))
        );
    }

    #[test]
    fn message() {
        let opt = [0xff, 0xff, 0xff, 0xff, 0x04, 0x01, 0x31, 0x95, 0x2d];
        let decoded = decode(0x09, &opt);
        assert_eq!(decoded.dbm_desc.as_deref(), Some("-45 dBm"));
        assert_eq!(decoded.field.structure.len(), 3);
    }

    #[test]
    fn short_or_unknown() {
        let short = decode(0x01, &[0x01, 0x3c]);
        assert!(short.dbm.is_none());
        assert!(short.field.structure.is_empty());
        assert_eq!(short.field.hex, vec!["01", "3C"]);

        let other = decode(0x05, &[0x01]);
        assert!(other.dbm.is_none());
        assert_eq!(other.field.field, OPTIONAL_DATA);
    }
}
