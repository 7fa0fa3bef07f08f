//! Devices that have been taught and the profile each one speaks.
use std::collections::{BTreeMap, HashMap};
#[cfg(feature = "serde")]
use std::{fs::File, io::BufReader, path::Path};
use std::sync::{LazyLock, PoisonError, RwLock};

use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

use crate::{Error, Result};

/// Maximum number of characters in a device name or manufacturer.
pub const MAX_TEXT_LEN: usize = 50;

static DEVICE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9A-F]{6}|[0-9A-F]{8}|[0-9A-F]{12})$").expect("device id regex is valid")
});
static EEP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-F]{2}-[0-9A-F]{2}-[0-9A-F]{2}$").expect("eep regex is valid")
});

/// A device entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Device {
    /// 12 uppercase hex digits.
    pub id: String,
    /// Canonical `RR-FF-TT` profile id, or empty if not known.
    pub eep: String,
    pub name: String,
    pub manufacturer: String,
    /// Set for devices in a [Registry], clear for entries synthesized while
    /// decoding telegrams from unknown originators.
    pub learned: bool,
}

impl Device {
    /// An entry for an originator that has not been taught.
    pub(crate) fn unregistered(id: String, eep: &str, manufacturer: Option<&str>) -> Self {
        Self {
            id,
            eep: eep.to_string(),
            name: String::new(),
            manufacturer: manufacturer.unwrap_or_default().to_string(),
            learned: false,
        }
    }
}

/// Parameters for [Registry::teach].
///
/// # Example
/// ```
/// use enocean::registry::DeviceSpec;
///
/// let spec = DeviceSpec::builder()
///     .id("00 2C 86 5C")
///     .eep("f6-02-04")
///     .name("Kitchen switch")
///     .build();
/// assert!(spec.manufacturer.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct DeviceSpec {
    #[builder(setter(into))]
    pub id: String,
    #[builder(setter(into))]
    pub eep: String,
    #[builder(default, setter(strip_option, into))]
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    #[builder(default, setter(strip_option, into))]
    #[cfg_attr(feature = "serde", serde(default))]
    pub manufacturer: Option<String>,
}

/// Normalize a device id to 12 uppercase hex digits.
///
/// Whitespace and hyphens are ignored. The remaining digits must number 6, 8 or
/// 12 and are left padded with zeros.
///
/// # Example
/// ```
/// use enocean::registry::normalize_device_id;
///
/// assert_eq!(normalize_device_id("00 2c 86 5c").unwrap(), "0000002C865C");
/// assert_eq!(normalize_device_id("01-81-4D").unwrap(), "00000001814D");
/// assert!(normalize_device_id("2C865").is_err());
/// ```
pub fn normalize_device_id(id: &str) -> Result<String> {
    let compact: String = id
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if !DEVICE_ID.is_match(&compact) {
        return Err(Error::InvalidDeviceId(id.to_string()));
    }
    Ok(format!("{compact:0>12}"))
}

/// Uppercase `eep` and require the `FF-FF-FF` form.
pub fn validate_eep(eep: &str) -> Result<String> {
    let eep_upper = eep.to_uppercase();
    if !EEP.is_match(&eep_upper) {
        return Err(Error::InvalidEep(eep.to_string()));
    }
    Ok(eep_upper)
}

fn check_len(field: &'static str, value: &str) -> Result<()> {
    let actual = value.chars().count();
    if actual > MAX_TEXT_LEN {
        return Err(Error::TooLong {
            field,
            max: MAX_TEXT_LEN,
            actual,
        });
    }
    Ok(())
}

/// Devices taught so far, keyed by normalized id.
///
/// The registry is safe to share between the decoding path, which only reads,
/// and callers teaching or renaming devices.
///
/// # Example
/// ```
/// use enocean::registry::{DeviceSpec, Registry};
///
/// let registry = Registry::default();
/// registry
///     .teach(DeviceSpec::builder().id("00 2C 86 5C").eep("F6-02-04").build())
///     .unwrap();
/// let device = registry.get_device_info("002c865c").unwrap();
/// assert_eq!(device.id, "0000002C865C");
/// assert!(device.learned);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    devices: RwLock<HashMap<String, Device>>,
}

impl Registry {
    /// Read a JSON list of [DeviceSpec] and teach each one.
    ///
    /// When `strict` is set the first invalid entry fails the whole load.
    /// Otherwise invalid entries are logged and skipped.
    #[cfg(feature = "serde")]
    pub fn with_file<P: AsRef<Path>>(path: P, strict: bool) -> Result<Self> {
        let specs: Vec<DeviceSpec> = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        let registry = Self::default();
        registry.teach_all(specs, strict)?;
        Ok(registry)
    }

    /// Validate and register a device, replacing any entry with the same id.
    ///
    /// Returns a copy of the stored entry.
    pub fn teach(&self, spec: DeviceSpec) -> Result<Device> {
        let id = normalize_device_id(&spec.id)?;
        let eep = validate_eep(&spec.eep)?;
        let name = spec.name.unwrap_or_default();
        check_len("name", &name)?;
        let manufacturer = spec.manufacturer.unwrap_or_default();
        check_len("manufacturer", &manufacturer)?;

        let device = Device {
            id: id.clone(),
            eep,
            name,
            manufacturer,
            learned: true,
        };
        debug!(id = %id, eep = %device.eep, "teach device");
        self.devices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, device.clone());
        Ok(device)
    }

    /// Teach every spec, returning the number of devices registered.
    pub fn teach_all<I>(&self, specs: I, strict: bool) -> Result<usize>
    where
        I: IntoIterator<Item = DeviceSpec>,
    {
        let mut count = 0;
        for spec in specs {
            let id = spec.id.clone();
            match self.teach(spec) {
                Ok(_) => count += 1,
                Err(err) if !strict => warn!(id = %id, "skipping device: {err}"),
                Err(err) => return Err(err),
            }
        }
        Ok(count)
    }

    /// A copy of the entry for `id`. Invalid ids simply produce `None`.
    pub fn get_device_info(&self, id: &str) -> Option<Device> {
        let id = normalize_device_id(id).ok()?;
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Snapshot of all entries, ordered by id.
    pub fn learned_devices(&self) -> BTreeMap<String, Device> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(id, dev)| (id.clone(), dev.clone()))
            .collect()
    }

    /// Rename a taught device and return the updated entry.
    pub fn set_device_name(&self, id: &str, name: &str) -> Result<Device> {
        let id = normalize_device_id(id)?;
        check_len("name", name)?;
        let mut devices = self.devices.write().unwrap_or_else(PoisonError::into_inner);
        let device = devices.get_mut(&id).ok_or(Error::UnknownDevice(id))?;
        device.name = name.to_string();
        Ok(device.clone())
    }

    pub fn len(&self) -> usize {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
