use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::telegram::{Category, Telegram};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OriginatorSummary {
    pub count: usize,
    /// Profile of the most recent telegram from this originator.
    pub eep: String,
    pub learn: usize,
    pub crc_failures: usize,
}

/// Tracks stats on decoded telegrams.
///
/// # Example
/// ```
/// use enocean::{Monitor, Summary};
///
/// let mut monitor = Monitor::default();
/// let mut summary = Summary::default();
/// let telegrams = monitor.push(&[0x55, 0x00, 0x01, 0x00, 0x05, 0x70, 0x03, 0x09]);
/// telegrams.iter().for_each(|t| summary.add(t));
/// assert_eq!(summary.count, 1);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Summary {
    pub count: usize,
    pub bytes: usize,
    pub crc_failures: usize,
    pub categories: BTreeMap<Category, usize>,
    /// Telegram count per profile id. Telegrams without a profile are not
    /// counted here.
    pub eeps: BTreeMap<String, usize>,
    /// Keyed by originator id, e.g. `"00 2C 86 5C"`.
    pub originators: BTreeMap<String, OriginatorSummary>,
}

impl Summary {
    pub fn add(&mut self, telegram: &Telegram) {
        let message = &telegram.message;
        let category = telegram.category();

        self.count += 1;
        self.bytes += telegram.buffer.len();
        if !message.crc {
            self.crc_failures += 1;
        }
        *self.categories.entry(category).or_default() += 1;
        if !message.eep.is_empty() {
            *self.eeps.entry(message.eep.clone()).or_default() += 1;
        }

        if let Some(oid) = &message.oid {
            let originator = self.originators.entry(oid.clone()).or_default();
            originator.count += 1;
            originator.eep.clone_from(&message.eep);
            if category == Category::Learn {
                originator.learn += 1;
            }
            if !message.crc {
                originator.crc_failures += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telegram(oid: Option<&str>, eep: &str, learn: bool, known: bool, crc: bool) -> Telegram {
        let mut t = Telegram {
            buffer: vec![0x55; 8],
            ..Default::default()
        };
        t.message.oid = oid.map(str::to_string);
        t.message.eep = eep.to_string();
        t.message.payload.learn = learn;
        t.message.known = known;
        t.message.crc = crc;
        t
    }

    #[test]
    fn summary() {
        let mut summary = Summary::default();
        summary.add(&telegram(Some("01 81 4D"), "A5-02-05", true, true, true));
        summary.add(&telegram(Some("01 81 4D"), "A5-02-05", false, true, true));
        summary.add(&telegram(Some("00 2C 86 5C"), "", false, false, false));
        summary.add(&telegram(None, "", false, false, true));

        assert_eq!(summary.count, 4);
        assert_eq!(summary.bytes, 32);
        assert_eq!(summary.crc_failures, 1);
        assert_eq!(summary.categories.get(&Category::Learn), Some(&1));
        assert_eq!(summary.categories.get(&Category::Known), Some(&1));
        assert_eq!(summary.categories.get(&Category::Unknown), Some(&2));
        assert_eq!(summary.eeps.len(), 1);
        assert_eq!(summary.eeps.get("A5-02-05"), Some(&2));

        assert_eq!(summary.originators.len(), 2);
        let originator = &summary.originators["01 81 4D"];
        assert_eq!(originator.count, 2);
        assert_eq!(originator.learn, 1);
        assert_eq!(originator.eep, "A5-02-05");
        assert_eq!(summary.originators["00 2C 86 5C"].crc_failures, 1);
    }
}
