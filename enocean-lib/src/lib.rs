#![doc = include_str!("../README.md")]

mod bytes;
mod error;
mod field;
mod monitor;
mod optional;
mod radio;
mod summary;
mod telegram;

pub mod crc8;
pub mod desc;
pub mod eep;
pub mod esp3;
pub mod reassembler;
pub mod registry;

pub use bytes::parse_hex;
pub use error::{Error, Result};
pub use esp3::decode_telegram;
pub use field::{Field, Value, ValueMap};
pub use monitor::{Event, Monitor};
pub use reassembler::{read_frames, Reassembler};
pub use registry::{Device, DeviceSpec, Registry};
pub use summary::{OriginatorSummary, Summary};
pub use telegram::{Category, Message, PayloadMessage, Telegram, UteTeachIn};
