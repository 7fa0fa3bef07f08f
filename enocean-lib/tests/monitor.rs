mod common;

use std::fs;
use std::sync::{Arc, Mutex};

use enocean::{read_frames, Category, Event, Monitor, Summary, Telegram};

use common::*;

fn capture() -> Vec<String> {
    fs::read_to_string(fixture_path("capture.hex"))
        .unwrap()
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn capture_bytes() -> Vec<u8> {
    capture().iter().flat_map(|line| frame(line)).collect()
}

#[test]
fn capture_lines() {
    let mut monitor = Monitor::new(Arc::new(registry()));
    let mut summary = Summary::default();
    for line in capture() {
        for telegram in monitor.emulate_incoming_telegram(&line).unwrap() {
            summary.add(&telegram);
        }
    }

    // the "00 11" line is dropped by the reassembler
    assert_eq!(summary.count, 9);
    assert_eq!(summary.crc_failures, 0);
    assert_eq!(summary.categories[&Category::Learn], 3);
    assert_eq!(summary.categories[&Category::Known], 5);
    assert_eq!(summary.categories[&Category::Unknown], 1);
    assert_eq!(summary.eeps["A5-02-05"], 3);
    assert_eq!(summary.eeps["D2-32-02"], 2);
    assert_eq!(summary.originators["04 01 86 39"].learn, 1);
}

#[test]
fn chunking_does_not_change_the_result() {
    let input = capture_bytes();

    let decode_all = |chunk_size: usize| -> Vec<Telegram> {
        let mut monitor = Monitor::new(Arc::new(registry()));
        input
            .chunks(chunk_size)
            .flat_map(|chunk| monitor.push(chunk))
            .collect()
    };

    let expected = decode_all(input.len());
    // the stray bytes sit between frames and are skipped when resyncing
    assert_eq!(expected.len(), 9);
    for chunk_size in [1, 2, 7, 16, 100] {
        assert_eq!(decode_all(chunk_size), expected, "chunk size {chunk_size}");
    }
}

#[test]
fn consume_binary_stream() {
    let input = capture_bytes();
    let mut monitor = Monitor::new(Arc::new(registry()));

    let learned = Arc::new(Mutex::new(Vec::new()));
    let events = learned.clone();
    monitor.on(Event::Learn, move |t| {
        events.lock().unwrap().push(t.message.eep.clone());
    });

    assert_eq!(monitor.consume(&input[..], 32).unwrap(), 9);
    assert_eq!(
        *learned.lock().unwrap(),
        vec!["A5-02-05", "A5-02-05", "D2-32-02"]
    );
}

#[test]
fn frames_from_reader() {
    let input = capture_bytes();
    let frames: Vec<Vec<u8>> = read_frames(&input[..], 10).map(Result::unwrap).collect();
    assert_eq!(frames.len(), 9);
    assert_eq!(frames[0], frame(A5_TEACH_IN));
    assert_eq!(frames[8], frame(COMMON_COMMAND));
}

#[test]
fn teaching_applies_to_later_telegrams() {
    let registry = Arc::new(enocean::Registry::default());
    let mut monitor = Monitor::new(registry.clone());

    let before = monitor.emulate_incoming_telegram(D5_00_01).unwrap();
    assert_eq!(before[0].category(), Category::Unknown);

    registry
        .teach(
            enocean::DeviceSpec::builder()
                .id("04008fe0")
                .eep("d5-00-01")
                .build(),
        )
        .unwrap();
    let after = monitor.emulate_incoming_telegram(D5_00_01).unwrap();
    assert_eq!(after[0].category(), Category::Known);
    assert_eq!(after[0].message.device.as_ref().unwrap().eep, "D5-00-01");
}
