use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use enocean::{decode_telegram, parse_hex, DeviceSpec, Monitor, Reassembler, Registry};

const FRAMES: &[&str] = &[
    "55 00 0a 07 01 eb a5 00 00 80 08 04 01 31 95 00 01 ff ff ff ff 40 00 f7",
    "55 00 09 02 0a 26 02 01 81 4d 50 28 64 0e 65 01 3c a1",
    "55 00 07 00 01 11 d5 09 04 00 8f e0 00 50",
    "55 00 0c 00 01 fd d2 40 01 20 0f 00 7b 04 01 86 39 00 03",
];

fn registry() -> Registry {
    let registry = Registry::default();
    for (id, eep) in [
        ("04013195", "A5-02-05"),
        ("01814D", "A5-09-04"),
        ("04008FE0", "D5-00-01"),
        ("04018639", "D2-32-02"),
    ] {
        registry
            .teach(DeviceSpec::builder().id(id).eep(eep).build())
            .unwrap();
    }
    registry
}

fn stream(repeat: usize) -> Vec<u8> {
    let frames: Vec<u8> = FRAMES.iter().flat_map(|f| parse_hex(f).unwrap()).collect();
    frames.repeat(repeat)
}

fn bench_reassemble(c: &mut Criterion) {
    let data = stream(100);
    let mut group = c.benchmark_group("reassemble");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for chunk_size in [1, 64] {
        group.bench_function(format!("chunk_{chunk_size}"), |b| {
            b.iter(|| {
                let mut r = Reassembler::new();
                let count: usize = data.chunks(chunk_size).map(|c| r.push(c).len()).sum();
                assert_eq!(count, 400);
            });
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let registry = registry();
    let frames: Vec<Vec<u8>> = FRAMES.iter().map(|f| parse_hex(f).unwrap()).collect();
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(frames.len() as u64));
    group.bench_function("telegrams", |b| {
        b.iter(|| {
            for frame in &frames {
                let telegram = decode_telegram(frame, &registry);
                assert!(telegram.message.crc);
            }
        });
    });
    group.finish();
}

fn bench_monitor(c: &mut Criterion) {
    let data = stream(100);
    let registry = Arc::new(registry());
    let mut group = c.benchmark_group("monitor");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("consume", |b| {
        b.iter(|| {
            let mut monitor = Monitor::new(registry.clone());
            assert_eq!(monitor.consume(&data[..], 64).unwrap(), 400);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_reassemble, bench_decode, bench_monitor);
criterion_main!(benches);
