//! CRC-16 throughput benchmarks.
//!
//! Run: `cargo bench -p checksum -- crc16`
//!
//! The engine is bit-serial by design, so these numbers track the cost of
//! the reference algorithm itself; they exist to catch regressions and to
//! compare the compile-time preset types against the parameter-driven
//! engine.

use checksum::{Crc16, Crc16Kermit, Crc16Params, Crc16Xmodem};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes.
const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

/// Benchmark the CRC-16/XMODEM preset type (no reflection).
fn bench_xmodem(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc16/xmodem");

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc16Xmodem::checksum(data)));
    });
  }

  group.finish();
}

/// Benchmark the CRC-16/KERMIT preset type (reflected in/out).
fn bench_kermit(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc16/kermit");

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc16Kermit::checksum(data)));
    });
  }

  group.finish();
}

/// Benchmark the parameter-driven engine against the same variant.
fn bench_runtime_engine(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc16/runtime-engine");

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(Crc16::checksum(Crc16Params::XMODEM, data)));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_xmodem, bench_kermit, bench_runtime_engine);
criterion_main!(benches);
