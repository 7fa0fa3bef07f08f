//! EnOcean Equipment Profile payload decoding.
//!
//! A profile id (EEP) is a `RORG-FUNC-TYPE` triple written canonically as
//! `"RR-FF-TT"`. [decode] selects the [Profile] for an id and interprets the
//! Data_DL bytes of a telegram according to its bit layout. Anything that cannot
//! be decoded yields [Report::unknown] instead of an error.
//!
//! # Example
//! ```
//! use enocean::eep;
//!
//! // single input contact, LRN bit set (data telegram), contact closed
//! let report = eep::decode("d5 00 01", &[0x09]);
//! assert_eq!(report.eep.as_deref(), Some("D5-00-01"));
//! assert_eq!(report.message.desc, "closed");
//! assert!(!report.message.learn);
//! ```
mod a5_02;
mod a5_04;
mod a5_05;
mod a5_06;
mod a5_07;
mod a5_09;
mod d2_32;
mod d5_00;
mod f6_02;

use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::debug;

use crate::bytes::bin_slice;
use crate::field::Field;
use crate::telegram::PayloadMessage;

/// Field name of the innermost payload node.
pub const DATA_DL: &str = "Data_DL";

/// The result of decoding a Data_DL payload.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Report {
    /// The canonical profile id the payload was decoded with, if any.
    pub eep: Option<String>,
    pub message: PayloadMessage,
    /// `Data_DL` node with one child per decoded bit field.
    pub field: Field,
}

impl Report {
    /// Report for a payload that could not be interpreted. The raw bytes are kept
    /// and the message is empty.
    #[must_use]
    pub fn unknown(payload: &[u8]) -> Self {
        Self {
            eep: None,
            message: PayloadMessage::default(),
            field: Field::block(DATA_DL, payload),
        }
    }

    pub(crate) fn new(
        eep: &str,
        payload: &[u8],
        message: PayloadMessage,
        structure: Vec<Field>,
    ) -> Self {
        Self {
            eep: Some(eep.to_string()),
            message,
            field: Field::block(DATA_DL, payload).with_structure(structure),
        }
    }

    /// True when this report was produced by a profile decoder.
    pub fn is_decoded(&self) -> bool {
        self.eep.is_some()
    }
}

/// Profiles with a payload decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Profile {
    /// Rocker switch, 2 rocker, application style 1.
    F60201,
    /// Rocker switch, 2 rocker, application style 2.
    F60202,
    /// Rocker switch, 2 rocker, light and blind control ERP2.
    F60204,
    /// Single input contact.
    D50001,
    /// Temperature sensor, 0℃ to +40℃.
    A50205,
    /// Temperature and humidity, 0℃ to +40℃ and 0% to 100%.
    A50401,
    /// Temperature and humidity, -20℃ to +60℃ 10 bit and 0% to 100%.
    A50403,
    /// Barometric sensor, 500 to 1150 hPa.
    A50501,
    /// Light sensor, 0lx to 1.020lx.
    A50602,
    /// Light sensor, 0lx to 10.200lx.
    A50605,
    /// Occupancy with supply voltage monitor.
    A50701,
    /// CO2 sensor.
    A50904,
    /// A.C. current clamp, 3 channels.
    D23202,
}

impl Profile {
    pub const ALL: [Profile; 13] = [
        Self::F60201,
        Self::F60202,
        Self::F60204,
        Self::D50001,
        Self::A50205,
        Self::A50401,
        Self::A50403,
        Self::A50501,
        Self::A50602,
        Self::A50605,
        Self::A50701,
        Self::A50904,
        Self::D23202,
    ];

    /// The `[RORG, FUNC, TYPE]` bytes of this profile.
    #[must_use]
    pub fn code(&self) -> [u8; 3] {
        match self {
            Self::F60201 => [0xF6, 0x02, 0x01],
            Self::F60202 => [0xF6, 0x02, 0x02],
            Self::F60204 => [0xF6, 0x02, 0x04],
            Self::D50001 => [0xD5, 0x00, 0x01],
            Self::A50205 => [0xA5, 0x02, 0x05],
            Self::A50401 => [0xA5, 0x04, 0x01],
            Self::A50403 => [0xA5, 0x04, 0x03],
            Self::A50501 => [0xA5, 0x05, 0x01],
            Self::A50602 => [0xA5, 0x06, 0x02],
            Self::A50605 => [0xA5, 0x06, 0x05],
            Self::A50701 => [0xA5, 0x07, 0x01],
            Self::A50904 => [0xA5, 0x09, 0x04],
            Self::D23202 => [0xD2, 0x32, 0x02],
        }
    }

    #[must_use]
    pub fn from_code(code: [u8; 3]) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Canonical `RR-FF-TT` id.
    #[must_use]
    pub fn id(&self) -> String {
        let [rorg, func, type_] = self.code();
        format!("{rorg:02X}-{func:02X}-{type_:02X}")
    }

    /// Number of Data_DL bytes this profile requires.
    #[must_use]
    pub fn payload_len(&self) -> usize {
        match self {
            Self::F60201 | Self::F60202 | Self::F60204 | Self::D50001 => 1,
            Self::D23202 => 6,
            _ => 4,
        }
    }

    /// Decode `payload`, returning [Report::unknown] if it is not exactly
    /// [Self::payload_len] bytes.
    #[must_use]
    pub fn decode(&self, payload: &[u8]) -> Report {
        if payload.len() != self.payload_len() {
            debug!(
                eep = %self,
                expected = self.payload_len(),
                actual = payload.len(),
                "payload length mismatch"
            );
            return Report::unknown(payload);
        }
        let id = self.id();
        match self {
            Self::F60201 | Self::F60202 => f6_02::decode_rocker(&id, payload),
            Self::F60204 => f6_02::decode_04(&id, payload),
            Self::D50001 => d5_00::decode_01(&id, payload),
            Self::A50205 => a5_02::decode_05(&id, payload),
            Self::A50401 => a5_04::decode_01(&id, payload),
            Self::A50403 => a5_04::decode_03(&id, payload),
            Self::A50501 => a5_05::decode_01(&id, payload),
            Self::A50602 => a5_06::decode_02(&id, payload),
            Self::A50605 => a5_06::decode_05(&id, payload),
            Self::A50701 => a5_07::decode_01(&id, payload),
            Self::A50904 => a5_09::decode_04(&id, payload),
            Self::D23202 => d2_32::decode_02(&id, payload),
        }
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Profile {
    type Err = crate::Error;

    /// Parses any form accepted by [normalize].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::Error::InvalidEep(s.to_string());
        let canonical = normalize(s).ok_or_else(invalid)?;
        let mut code = [0u8; 3];
        for (dst, seg) in code.iter_mut().zip(canonical.split('-')) {
            *dst = u8::from_str_radix(seg, 16).map_err(|_| invalid())?;
        }
        Self::from_code(code).ok_or_else(invalid)
    }
}

/// Normalize a profile id to the canonical `RR-FF-TT` form.
///
/// The input is uppercased and every character that is not a hex digit is
/// dropped. Exactly 6 hex digits must remain.
///
/// # Example
/// ```
/// use enocean::eep::normalize;
///
/// assert_eq!(normalize("f6:02:04").as_deref(), Some("F6-02-04"));
/// assert_eq!(normalize("F602 04").as_deref(), Some("F6-02-04"));
/// assert_eq!(normalize("F6-02"), None);
/// ```
#[must_use]
pub fn normalize(eep: &str) -> Option<String> {
    let digits: Vec<char> = eep
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_hexdigit)
        .collect();
    if digits.len() != 6 {
        return None;
    }
    let pairs: Vec<String> = digits.chunks(2).map(|c| c.iter().collect()).collect();
    Some(pairs.join("-"))
}

/// Returns `true` if `eep`, exactly as given, is the canonical id of a profile
/// with a decoder. No normalization is applied.
#[must_use]
pub fn is_known(eep: &str) -> bool {
    Profile::ALL.iter().any(|p| p.id() == eep)
}

/// Decode `payload` with the profile identified by `eep`.
///
/// Malformed ids, unregistered profiles and payloads of the wrong length all
/// produce [Report::unknown].
#[must_use]
pub fn decode(eep: &str, payload: &[u8]) -> Report {
    let Some(canonical) = normalize(eep) else {
        if !eep.is_empty() {
            debug!(eep, "cannot normalize profile id");
        }
        return Report::unknown(payload);
    };
    match canonical.parse::<Profile>() {
        Ok(profile) => profile.decode(payload),
        Err(_) => {
            debug!(eep = canonical, "no decoder for profile");
            Report::unknown(payload)
        }
    }
}

pub(crate) fn lrn_desc(lrnb: u8) -> &'static str {
    if lrnb == 0 {
        "Teach-in telegram"
    } else {
        "Data telegram"
    }
}

/// The LRN bit (DB0.3) shared by the 4BS profiles.
pub(crate) fn lrn_bit(db0: u8) -> (u8, Field) {
    let lrnb = (db0 & 0b0000_1000) >> 3;
    (lrnb, Field::item("LRNB", "LRN Bit", lrnb, lrn_desc(lrnb)))
}

/// Like [lrn_bit] including the bit string.
pub(crate) fn lrn_bit_with_bin(db0: u8) -> (u8, Field) {
    let (lrnb, field) = lrn_bit(db0);
    (lrnb, field.with_bin(bin_slice(db0, 4, 1)))
}

/// Round half towards positive infinity at `digits` decimals.
pub(crate) fn round_to(v: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (v * scale + 0.5).floor() / scale
}

/// Round with [round_to] and format the result with a fixed number of decimals.
pub(crate) fn fixed(v: f64, digits: usize) -> (f64, String) {
    let rounded = round_to(v, digits as i32);
    (rounded, format!("{rounded:.digits$}"))
}
