use tracing::debug;

use super::{resolve, rorg_desc, teach_in, RadioData, DATA};
use crate::bytes::hex_join;
use crate::eep::Report;
use crate::field::Field;
use crate::registry::Registry;

/// R-ORG byte, 4 byte originator and status byte.
const MIN_LEN: usize = 7;

fn status_desc(status: u8) -> &'static str {
    match status {
        0b0000 => "Original sender",
        0b0001 => "Subtelegram was repeated 1 time",
        0b0010 => "Subtelegram was repeated 2 times",
        0b1111 => "Telegram shall not be repeated",
        _ => "",
    }
}

fn teach_in(rorg: u8, payload: &[u8]) -> Option<Report> {
    match rorg {
        0xA5 => teach_in::erp1_4bs(payload),
        0xD4 => teach_in::erp1_ute(payload),
        // 1BS teach-in is not recognized, the payload is decoded as data
        _ => None,
    }
}

/// Decode the data region of a RADIO_ERP1 packet.
///
/// Layout: R-ORG, Data_DL, 4 byte originator id and a status byte. ERP1
/// carries no CRC of its own.
pub(crate) fn decode(data: &[u8], registry: &Registry) -> RadioData {
    if data.len() < MIN_LEN {
        debug!(len = data.len(), "ERP1 data too short");
        return RadioData::unknown(data);
    }
    let rorg = data[0];
    let oid_start = data.len() - 5;
    let status_offset = data.len() - 1;
    let data_dl = &data[1..oid_start];
    let oid = &data[oid_start..status_offset];

    let (dl_field, message) = resolve(registry, oid, data_dl, teach_in(rorg, data_dl));

    let status = data[status_offset] & 0b0000_1111;
    let structure = vec![
        Field::block("R-ORG", &data[..1]).with_desc(rorg_desc(rorg)),
        dl_field,
        Field::block("Originator-ID", oid).with_desc(hex_join(oid)),
        Field::block("Status", &data[status_offset..])
            .with_desc(format!("{}, {status}", status_desc(status))),
    ];

    RadioData {
        field: Field::block(DATA, data).with_structure(structure),
        message,
        crc: None,
    }
}
