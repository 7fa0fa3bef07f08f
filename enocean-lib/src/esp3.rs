//! ESP3 (EnOcean Serial Protocol 3) packet framing.
//!
//! ```text
//! +------+-------------+-----------------+-------------+-------+------+---------------+-------+
//! | 0x55 | data length | optional length | packet type | CRC8H | data | optional data | CRC8D |
//! |  1   |      2      |        1        |      1      |   1   |  dl  |      ol       |   1   |
//! +------+-------------+-----------------+-------------+-------+------+---------------+-------+
//! ```
use tracing::{debug, trace};

use crate::bytes::{hex_byte, hex_list};
use crate::crc8;
use crate::desc::packet_type_description;
use crate::field::Field;
use crate::optional;
use crate::radio::{self, RadioData};
use crate::registry::Registry;
use crate::telegram::{Message, Telegram};

/// Every ESP3 packet starts with this byte.
pub const SYNC: u8 = 0x55;

pub const RADIO_ERP1: u8 = 0x01;
pub const RADIO_SUB_TEL: u8 = 0x03;
pub const REMOTE_MAN_COMMAND: u8 = 0x07;
pub const RADIO_MESSAGE: u8 = 0x09;
pub const RADIO_ERP2: u8 = 0x0A;

/// ESP3 packet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub data_length: u16,
    pub optional_length: u8,
    pub packet_type: u8,
}

impl Header {
    /// Bytes before the data region: sync byte, header and CRC8H.
    pub const LEN: usize = 6;

    /// Decode the header from the start of a frame, i.e., `dat[0]` is the sync
    /// byte. Returns `None` if there are not enough bytes. The sync byte and CRC8H
    /// are not checked.
    #[must_use]
    pub fn decode(dat: &[u8]) -> Option<Header> {
        let &[_, dl_hi, dl_lo, optional_length, packet_type, ..] = dat else {
            return None;
        };
        Some(Header {
            data_length: u16::from_be_bytes([dl_hi, dl_lo]),
            optional_length,
            packet_type,
        })
    }

    /// Total length of the frame this header declares, including the trailing
    /// CRC8D.
    #[must_use]
    pub fn frame_len(&self) -> usize {
        Self::LEN + usize::from(self.data_length) + usize::from(self.optional_length) + 1
    }
}

fn crc_field(name: &str, crc: u8, valid: bool) -> Field {
    Field::builder()
        .field(name)
        .value(crc)
        .hex(vec![hex_byte(crc)])
        .buffer(vec![crc])
        .desc(if valid { "valid" } else { "invalid" })
        .build()
}

fn header_field(frame: &[u8], header: &Header) -> Field {
    let length = |name: &str, value: u16, buf: &[u8]| {
        Field::builder()
            .field(name)
            .value(value)
            .hex(hex_list(buf))
            .buffer(buf.to_vec())
            .desc(format!("{value} byte"))
            .build()
    };
    Field::block("Header", &frame[1..5]).with_structure(vec![
        length("Data Length", header.data_length, &frame[1..3]),
        length(
            "Optional Length",
            u16::from(header.optional_length),
            &frame[3..4],
        ),
        Field::builder()
            .field("Packet Type")
            .value(header.packet_type)
            .hex(vec![hex_byte(header.packet_type)])
            .buffer(vec![header.packet_type])
            .desc(packet_type_description(header.packet_type))
            .build(),
    ])
}

fn decode_data(packet_type: u8, data: &[u8], registry: &Registry) -> RadioData {
    match packet_type {
        RADIO_ERP1 => radio::decode_erp1(data, registry),
        RADIO_ERP2 => radio::decode_erp2(data, registry),
        _ => RadioData::unknown(data),
    }
}

/// A frame that cannot be split into its regions.
fn undecodable(frame: &[u8]) -> Telegram {
    Telegram {
        buffer: frame.to_vec(),
        hex: hex_list(frame),
        ..Default::default()
    }
}

/// Decode one complete ESP3 frame.
///
/// Originators are resolved against `registry`. CRC mismatches do not stop
/// decoding; they are reported as `invalid` in the structure and clear
/// [Message::crc]. A frame whose length does not match its header is returned
/// with only its bytes filled in.
#[must_use]
pub fn decode_telegram(frame: &[u8], registry: &Registry) -> Telegram {
    let Some(header) = Header::decode(frame) else {
        debug!(len = frame.len(), "frame too short for an ESP3 header");
        return undecodable(frame);
    };
    if frame.len() != header.frame_len() {
        debug!(
            len = frame.len(),
            expected = header.frame_len(),
            "frame length does not match its header"
        );
        return undecodable(frame);
    }
    trace!(?header, "decoding frame");

    let crc8h = frame[5];
    let crc8h_valid = crc8::verify(crc8h, &frame[1..5]);
    if !crc8h_valid {
        debug!(crc8h, "CRC8H mismatch");
    }

    let data_start = Header::LEN;
    let opt_start = data_start + usize::from(header.data_length);
    let crc8d_offset = opt_start + usize::from(header.optional_length);

    let radio = decode_data(
        header.packet_type,
        &frame[data_start..opt_start],
        registry,
    );
    let opt = (header.optional_length > 0)
        .then(|| optional::decode(header.packet_type, &frame[opt_start..crc8d_offset]));

    let crc8d = frame[crc8d_offset];
    let crc8d_valid = crc8::verify(crc8d, &frame[data_start..crc8d_offset]);
    if !crc8d_valid {
        debug!(crc8d, "CRC8D mismatch");
    }

    let mut structure = vec![
        Field::block("Sync. Byte", &frame[..1]).with_desc(hex_byte(frame[0])),
        header_field(frame, &header),
        crc_field("CRC8H", crc8h, crc8h_valid),
        radio.field,
    ];

    let mut message = Message {
        packet_type: header.packet_type,
        packet_type_desc: packet_type_description(header.packet_type).to_string(),
        crc: crc8h_valid && crc8d_valid && radio.crc.unwrap_or(true),
        ..radio.message
    };
    if let Some(opt) = opt {
        message.dbm = opt.dbm;
        message.dbm_desc = opt.dbm_desc;
        structure.push(opt.field);
    }
    structure.push(crc_field("CRC8D", crc8d, crc8d_valid));

    Telegram {
        message,
        buffer: frame.to_vec(),
        hex: hex_list(frame),
        structure,
    }
}
