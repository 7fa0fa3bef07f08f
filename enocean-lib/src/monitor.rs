//! Stream decoding with per-category observers.
use std::io::{ErrorKind, Read};
use std::sync::Arc;

use tracing::trace;

use crate::bytes::parse_hex;
use crate::esp3::decode_telegram;
use crate::reassembler::Reassembler;
use crate::registry::Registry;
use crate::telegram::{Category, Telegram};
use crate::Result;

/// What an observer registered with [Monitor::on] wants to hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Event {
    #[display("learn")]
    Learn,
    #[display("known")]
    Known,
    #[display("unknown")]
    Unknown,
    /// Every telegram, after its category event.
    #[display("data")]
    Data,
}

impl From<Category> for Event {
    fn from(category: Category) -> Self {
        match category {
            Category::Learn => Self::Learn,
            Category::Known => Self::Known,
            Category::Unknown => Self::Unknown,
        }
    }
}

type Observer = Box<dyn FnMut(&Telegram) + Send>;

/// Turns chunks of serial input into [Telegram]s.
///
/// Each complete frame is decoded against the monitor's [Registry]. Observers
/// for the telegram's [Category] are called first, then the [Event::Data]
/// observers, both in registration order.
///
/// # Example
/// ```
/// use std::sync::{Arc, Mutex};
/// use enocean::{Event, Monitor};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let mut monitor = Monitor::default();
/// let events = seen.clone();
/// monitor.on(Event::Unknown, move |_| events.lock().unwrap().push("unknown"));
/// let events = seen.clone();
/// monitor.on(Event::Data, move |_| events.lock().unwrap().push("data"));
///
/// monitor.emulate_incoming_telegram("55 00 01 00 05 70 03 09").unwrap();
/// assert_eq!(*seen.lock().unwrap(), vec!["unknown", "data"]);
/// ```
pub struct Monitor {
    registry: Arc<Registry>,
    reassembler: Reassembler,
    observers: Vec<(Event, Observer)>,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new(Arc::new(Registry::default()))
    }
}

impl std::fmt::Debug for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("registry", &self.registry)
            .field("reassembler", &self.reassembler)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Monitor {
    /// Create a monitor sharing `registry`. Devices taught through the registry
    /// apply to every frame decoded afterwards.
    #[must_use]
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            reassembler: Reassembler::new(),
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Register `observer` for `event`.
    pub fn on<F>(&mut self, event: Event, observer: F) -> &mut Self
    where
        F: FnMut(&Telegram) + Send + 'static,
    {
        self.observers.push((event, Box::new(observer)));
        self
    }

    fn notify(&mut self, telegram: &Telegram) {
        let category = Event::from(telegram.category());
        for event in [category, Event::Data] {
            self.observers
                .iter_mut()
                .filter(|(e, _)| *e == event)
                .for_each(|(_, observer)| observer(telegram));
        }
    }

    /// Push a chunk of serial input, returning the telegrams it completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Telegram> {
        let frames = self.reassembler.push(chunk);
        let mut telegrams = Vec::with_capacity(frames.len());
        for frame in frames {
            let telegram = decode_telegram(&frame, &self.registry);
            trace!(category = %telegram.category(), eep = %telegram.message.eep, "telegram");
            self.notify(&telegram);
            telegrams.push(telegram);
        }
        telegrams
    }

    /// Push a telegram given as hex, e.g. a line copied from a capture, as if it
    /// had arrived from the transport. Whitespace is ignored.
    ///
    /// # Errors
    /// [crate::Error::InvalidHex] if `hex` is not valid hex.
    pub fn emulate_incoming_telegram(&mut self, hex: &str) -> Result<Vec<Telegram>> {
        let bytes = parse_hex(hex)?;
        Ok(self.push(&bytes))
    }

    /// Read `reader` to its end, pushing every read of up to `chunk_size` bytes as
    /// one chunk. Returns the number of telegrams decoded.
    ///
    /// # Errors
    /// Any error reading from `reader` other than [ErrorKind::Interrupted].
    pub fn consume<R: Read>(&mut self, mut reader: R, chunk_size: usize) -> Result<usize> {
        let mut buf = vec![0u8; chunk_size.max(1)];
        let mut count = 0;
        loop {
            match reader.read(&mut buf) {
                Ok(0) => return Ok(count),
                Ok(n) => count += self.push(&buf[..n]).len(),
                Err(err) if err.kind() == ErrorKind::Interrupted => (),
                Err(err) => return Err(err.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::registry::DeviceSpec;
    use crate::Error;

    // 1BS data telegram from 04 00 8F E0
    const D5: &[u8] = &[
        0x55, 0x00, 0x07, 0x00, 0x01, 0x11, 0xd5, 0x09, 0x04, 0x00, 0x8f, 0xe0, 0x00, 0x50,
    ];
    // 4BS teach-in from 04 01 31 95
    const A5_TEACH_IN: &str = "55 00 0a 00 01 80 a5 08 28 0b 80 04 01 31 95 00 84";

    fn recorder(monitor: &mut Monitor) -> Arc<Mutex<Vec<String>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        for event in [Event::Learn, Event::Known, Event::Unknown, Event::Data] {
            let seen = seen.clone();
            monitor.on(event, move |_| seen.lock().unwrap().push(event.to_string()));
        }
        seen
    }

    #[test]
    fn category_event_precedes_data() {
        let registry = Arc::new(Registry::default());
        let mut monitor = Monitor::new(registry.clone());
        let seen = recorder(&mut monitor);

        assert_eq!(monitor.push(D5).len(), 1);
        registry
            .teach(DeviceSpec::builder().id("04008FE0").eep("D5-00-01").build())
            .unwrap();
        let telegrams = monitor.push(D5);
        assert_eq!(telegrams[0].message.payload.desc, "closed");
        monitor.emulate_incoming_telegram(A5_TEACH_IN).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["unknown", "data", "known", "data", "learn", "data"]
        );
    }

    #[test]
    fn observers_run_in_registration_order() {
        let mut monitor = Monitor::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for id in 0..3 {
            let seen = seen.clone();
            monitor.on(Event::Data, move |_| seen.lock().unwrap().push(id));
        }
        monitor.push(D5);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn emulate_rejects_bad_hex() {
        let mut monitor = Monitor::default();
        let err = monitor.emulate_incoming_telegram("55 0").unwrap_err();
        assert!(matches!(err, Error::InvalidHex(_)), "{err:?}");
        let err = monitor.emulate_incoming_telegram("55 zz").unwrap_err();
        assert!(matches!(err, Error::InvalidHex(_)), "{err:?}");
    }

    #[test]
    fn consume_reader() {
        let mut input = D5.to_vec();
        input.extend_from_slice(D5);
        input.extend_from_slice(&D5[..3]);

        let mut monitor = Monitor::default();
        let seen = recorder(&mut monitor);
        assert_eq!(monitor.consume(&input[..], 5).unwrap(), 2);
        assert_eq!(seen.lock().unwrap().len(), 4);
    }
}
