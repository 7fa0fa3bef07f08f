//! The decoded form of one ESP3 frame.
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::desc::EepDescription;
use crate::field::{Field, ValueMap};
use crate::registry::Device;

/// Fields of a UTE (universal teach-in) query or response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UteTeachIn {
    pub dir: u8,
    pub dir_desc: String,
    pub expected: u8,
    pub expected_desc: String,
    pub accepted: u8,
    pub accepted_desc: String,
    pub cmd: u8,
    pub cmd_desc: String,
    pub channel: u8,
    pub channel_desc: String,
}

/// What a payload or teach-in decoder contributes to a [Message].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PayloadMessage {
    /// Engineering values, absent for teach-in telegrams.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub value: Option<ValueMap>,
    pub desc: String,
    pub learn: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub mid: Option<u16>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub manufacturer_desc: Option<String>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub ute: Option<UteTeachIn>,
}

/// The application level summary of a telegram.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Message {
    pub packet_type: u8,
    pub packet_type_desc: String,
    /// Registry entry for the originator, or a synthesized entry for an
    /// unknown originator. Absent for packet types without a radio payload.
    pub device: Option<Device>,
    /// Originator id as space separated hex, e.g. `"00 2C 86 5C"`.
    pub oid: Option<String>,
    /// All CRC checks performed on this frame passed.
    pub crc: bool,
    pub eep: String,
    /// `eep` has a payload decoder.
    pub known: bool,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub eep_desc: EepDescription,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub payload: PayloadMessage,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dbm: Option<i16>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dbm_desc: Option<String>,
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    pub data_dl_buffer: Vec<u8>,
}

impl Message {
    /// Shorthand for the payload's learn flag.
    pub fn learn(&self) -> bool {
        self.payload.learn
    }
}

/// How a telegram relates to the device registry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display,
)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum Category {
    /// A teach-in telegram.
    #[display("learn")]
    Learn,
    /// A data telegram whose profile has a payload decoder.
    #[display("known")]
    Known,
    /// Anything else.
    #[default]
    #[display("unknown")]
    Unknown,
}

/// A fully decoded ESP3 frame.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Telegram {
    pub message: Message,
    /// The frame exactly as received.
    #[cfg_attr(feature = "serde", serde(with = "serde_bytes"))]
    pub buffer: Vec<u8>,
    /// Hex of each byte of `buffer`.
    pub hex: Vec<String>,
    /// Diagnostic tree in frame order.
    pub structure: Vec<Field>,
}

impl Telegram {
    /// A teach-in telegram is [Category::Learn]. Otherwise a telegram is
    /// [Category::Known] when its resolved profile has a payload decoder.
    #[must_use]
    pub fn category(&self) -> Category {
        if self.message.payload.learn {
            Category::Learn
        } else if self.message.known {
            Category::Known
        } else {
            Category::Unknown
        }
    }

    /// Top level node by field name, e.g. `"Header"` or `"Data"`.
    pub fn node(&self, name: &str) -> Option<&Field> {
        self.structure.iter().find(|f| f.field == name)
    }

    /// Search the whole diagnostic tree by key or field name.
    pub fn find(&self, name: &str) -> Option<&Field> {
        self.structure.iter().find_map(|f| {
            if f.field == name || f.key.as_deref() == Some(name) {
                Some(f)
            } else {
                f.find(name)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category() {
        let mut t = Telegram::default();
        assert_eq!(t.category(), Category::Unknown);

        t.message.eep = "A5-10-06".to_string();
        assert_eq!(t.category(), Category::Unknown);

        t.message.eep = "A5-02-05".to_string();
        t.message.known = true;
        assert_eq!(t.category(), Category::Known);

        t.message.payload.learn = true;
        assert_eq!(t.category(), Category::Learn);
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::Learn.to_string(), "learn");
        assert_eq!(Category::Known.to_string(), "known");
        assert_eq!(Category::Unknown.to_string(), "unknown");
    }
}
