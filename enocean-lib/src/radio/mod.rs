//! Decoders for the data region of radio packets.
//!
//! A radio decoder resolves the originator, looks it up in the [Registry],
//! recognizes teach-in telegrams and hands everything else to [eep::decode].
mod erp1;
mod erp2;
mod teach_in;

pub(crate) use erp1::decode as decode_erp1;
pub(crate) use erp2::decode as decode_erp2;

use crate::bytes::hex_join;
use crate::desc::describe_eep;
use crate::eep::{self, Report};
use crate::field::Field;
use crate::registry::{normalize_device_id, Device, Registry};
use crate::telegram::Message;

/// Name of the top level node for the data region.
pub(crate) const DATA: &str = "Data";

/// What a radio decoder produced for the data region of a frame.
#[derive(Debug, Clone, Default)]
pub(crate) struct RadioData {
    pub field: Field,
    pub message: Message,
    /// Result of a CRC carried inside the data region, if there is one.
    pub crc: Option<bool>,
}

impl RadioData {
    /// Data region that is not interpreted any further.
    pub(crate) fn unknown(data: &[u8]) -> Self {
        Self {
            field: Field::block(DATA, data),
            ..Default::default()
        }
    }
}

/// Names shared by the ERP1 R-ORG byte and the ERP2 telegram type.
pub(crate) fn rorg_desc(rorg: u8) -> &'static str {
    match rorg {
        0xF6 => "RPS telegram (0xF6)",
        0xD5 => "1BS telegram (0xD5)",
        0xA5 => "4BS telegram (0xA5)",
        0xD0 => "Smart Acknowledge Signal telegram (0xD0)",
        0xD2 => "Variable length data telegram (0xD2)",
        0xD4 => "Universal Teach-In EEP based (0xD4)",
        0xD1 => "Manufacturer Specific Communication (0xD1)",
        0x30 => "Secure telegram (0x30)",
        0x31 => "Secure telegram with encapsulation (0x31)",
        0x35 => "Secure Teach-In telegram for switch (0x35)",
        0xB3 => "Generic Profiles selective data (0xB3)",
        _ => "",
    }
}

/// Resolve the device and profile for a payload and decode it.
///
/// A teach-in report that names a profile takes precedence over the profile
/// registered for the originator.
pub(crate) fn resolve(
    registry: &Registry,
    oid: &[u8],
    data_dl: &[u8],
    teach_in: Option<Report>,
) -> (Field, Message) {
    let oid_desc = hex_join(oid);
    let device = registry.get_device_info(&oid_desc);
    let mut profile = device
        .as_ref()
        .map(|d| d.eep.clone())
        .unwrap_or_default();

    let report = match teach_in {
        Some(report) => {
            if let Some(announced) = &report.eep {
                profile.clone_from(announced);
            }
            report
        }
        None => eep::decode(&profile, data_dl),
    };
    let Report { message, field, .. } = report;

    let manufacturer = message
        .manufacturer_desc
        .as_deref()
        .filter(|m| !m.is_empty());
    let device = match device {
        Some(mut device) => {
            if device.manufacturer.is_empty() {
                if let Some(m) = manufacturer {
                    device.manufacturer = m.to_string();
                }
            }
            device
        }
        None => {
            let id = normalize_device_id(&oid_desc).unwrap_or_else(|_| hex::encode_upper(oid));
            Device::unregistered(id, &profile, manufacturer)
        }
    };

    let message = Message {
        device: Some(device),
        oid: Some(oid_desc),
        known: eep::is_known(&profile),
        eep_desc: describe_eep(&profile),
        eep: profile,
        payload: message,
        data_dl_buffer: data_dl.to_vec(),
        ..Default::default()
    };
    (field, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DeviceSpec;

    fn registry() -> Registry {
        let registry = Registry::default();
        registry
            .teach(
                DeviceSpec::builder()
                    .id("04 01 31 95")
                    .eep("A5-02-05")
                    .build(),
            )
            .unwrap();
        registry
    }

    #[test]
    fn resolve_known_device() {
        let registry = registry();
        let (field, message) = resolve(
            &registry,
            &[0x04, 0x01, 0x31, 0x95],
            &[0x00, 0x00, 0x80, 0x08],
            None,
        );
        assert_eq!(field.field, eep::DATA_DL);
        assert_eq!(message.oid.as_deref(), Some("04 01 31 95"));
        assert_eq!(message.eep, "A5-02-05");
        assert!(message.known);
        assert_eq!(message.eep_desc.rorg_desc, "4BS Telegram");
        assert_eq!(message.payload.desc, "19.9℃");
        assert!(message.device.unwrap().learned);
    }

    #[test]
    fn resolve_unknown_device() {
        let registry = registry();
        let (field, message) = resolve(&registry, &[0x01, 0x81, 0x4d], &[0x09], None);
        assert!(field.structure.is_empty());
        assert_eq!(message.eep, "");
        assert!(!message.known);
        let device = message.device.unwrap();
        assert_eq!(device.id, "00000001814D");
        assert!(!device.learned);
        assert_eq!(device.manufacturer, "");
        // nothing was added to the registry
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn teach_in_overrides_profile_and_fills_manufacturer() {
        let registry = registry();
        let announced = teach_in::erp2_4bs(&[0x10, 0x08, 0x0b, 0x80]);
        let (_, message) = resolve(
            &registry,
            &[0x04, 0x01, 0x31, 0x95],
            &[0x10, 0x08, 0x0b, 0x80],
            announced,
        );
        assert_eq!(message.eep, "A5-04-01");
        assert!(message.payload.learn);
        let device = message.device.unwrap();
        assert_eq!(device.manufacturer, "ENOCEAN_GMBH");
        // the registry entry keeps its own values
        let stored = registry.get_device_info("04013195").unwrap();
        assert_eq!(stored.eep, "A5-02-05");
        assert_eq!(stored.manufacturer, "");
    }

    #[test]
    fn rorg_names() {
        assert_eq!(rorg_desc(0xa5), "4BS telegram (0xA5)");
        assert_eq!(rorg_desc(0x00), "");
    }
}
