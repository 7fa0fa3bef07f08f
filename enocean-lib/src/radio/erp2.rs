use tracing::debug;

use super::{resolve, rorg_desc, teach_in, RadioData, DATA};
use crate::bytes::{bin8, bin_slice, hex_byte, hex_join};
use crate::crc8;
use crate::eep::Report;
use crate::field::Field;
use crate::registry::Registry;

/// ERP2 address control modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddressControl {
    /// 24 bit originator.
    Oid24,
    /// 32 bit originator.
    Oid32,
    /// 32 bit originator and 32 bit destination.
    Oid32Did32,
    /// 48 bit originator.
    Oid48,
}

impl AddressControl {
    fn from_bits(ac: u8) -> Option<Self> {
        match ac {
            0b000 => Some(Self::Oid24),
            0b001 => Some(Self::Oid32),
            0b010 => Some(Self::Oid32Did32),
            0b011 => Some(Self::Oid48),
            _ => None,
        }
    }

    fn oid_len(self) -> usize {
        match self {
            Self::Oid24 => 3,
            Self::Oid32 | Self::Oid32Did32 => 4,
            Self::Oid48 => 6,
        }
    }

    fn did_len(self) -> usize {
        match self {
            Self::Oid32Did32 => 4,
            _ => 0,
        }
    }
}

fn ac_desc(ac: u8) -> &'static str {
    match ac {
        0b000 => "Originator-ID 24 bit; no Destination-ID",
        0b001 => "Originator-ID 32 bit; no Destination-ID",
        0b010 => "Originator-ID 32 bit, Destination-ID 32 bit",
        0b011 => "Originator-ID 48 bit, no Destination-ID",
        _ => "reserved",
    }
}

/// The R-ORG each telegram type stands for.
fn tt_rorg(tt: u8) -> Option<u8> {
    const RORGS: [u8; 11] = [
        0xF6, 0xD5, 0xA5, 0xD0, 0xD2, 0xD4, 0xD1, 0x30, 0x31, 0x35, 0xB3,
    ];
    RORGS.get(usize::from(tt)).copied()
}

fn tt_desc(tt: u8) -> &'static str {
    match tt_rorg(tt) {
        Some(rorg) => rorg_desc(rorg),
        None if tt == 0b1111 => "Extended Telegram type available",
        None => "reserved",
    }
}

fn header_field(header: u8, ac: u8, eha: u8, tt: u8) -> Field {
    let eha_desc = if eha == 0 {
        "No extended header"
    } else {
        "Extended header available"
    };
    Field::builder()
        .field("Header")
        .value(header)
        .bin(bin8(header))
        .hex(vec![hex_byte(header)])
        .buffer(vec![header])
        .structure(vec![
            Field::item("AC", "Address Control", ac, ac_desc(ac)).with_bin(bin_slice(header, 0, 3)),
            Field::item("EHA", "Extended header available", eha, eha_desc)
                .with_bin(bin_slice(header, 3, 1)),
            Field::item("TT", "Telegram type (R-ORG)", tt, tt_desc(tt))
                .with_bin(bin_slice(header, 4, 4)),
        ])
        .build()
}

fn id_field(name: &str, id: &[u8]) -> Field {
    Field::block(name, id).with_desc(hex_join(id))
}

fn teach_in(tt: u8, payload: &[u8]) -> Option<Report> {
    match tt {
        0b0010 => teach_in::erp2_4bs(payload),
        0b0001 => teach_in::erp2_1bs(payload),
        _ => None,
    }
}

/// Decode the data region of a RADIO_ERP2 packet.
///
/// Layout: header, originator id, optional destination id, Data_DL and a
/// trailing CRC8 over everything before it.
pub(crate) fn decode(data: &[u8], registry: &Registry) -> RadioData {
    let Some(&header) = data.first() else {
        return RadioData::unknown(data);
    };
    let ac = header >> 5;
    let eha = (header & 0b0001_0000) >> 4;
    let tt = header & 0b0000_1111;

    let Some(mode) = AddressControl::from_bits(ac) else {
        debug!(ac, "reserved ERP2 address control");
        return RadioData::unknown(data);
    };
    if eha == 1 {
        debug!("ERP2 extended header is not supported");
        return RadioData::unknown(data);
    }

    let oid_start = 1;
    let did_start = oid_start + mode.oid_len();
    let dl_start = did_start + mode.did_len();
    // at least the addresses and the CRC must be present
    if data.len() < dl_start + 1 {
        debug!(len = data.len(), "ERP2 data too short for its address control");
        return RadioData::unknown(data);
    }
    let crc_offset = data.len() - 1;

    let oid = &data[oid_start..did_start];
    let mut structure = vec![header_field(header, ac, eha, tt), id_field("Originator-ID", oid)];
    if mode.did_len() > 0 {
        structure.push(id_field("Destination-ID", &data[did_start..dl_start]));
    }

    let data_dl = &data[dl_start..crc_offset];
    let (dl_field, message) = resolve(registry, oid, data_dl, teach_in(tt, data_dl));
    structure.push(dl_field);

    let crc = data[crc_offset];
    let crc_valid = crc8::verify(crc, &data[..crc_offset]);
    if !crc_valid {
        debug!(crc, "ERP2 CRC mismatch");
    }
    structure.push(
        Field::builder()
            .field("CRC")
            .value(crc)
            .hex(vec![hex_byte(crc)])
            .buffer(vec![crc])
            .desc(if crc_valid { "valid" } else { "invalid" })
            .build(),
    );

    RadioData {
        field: Field::block(DATA, data).with_structure(structure),
        message,
        crc: Some(crc_valid),
    }
}
