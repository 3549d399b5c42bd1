// benches/decrypt.rs
//! Decrypt-only benchmarks (pre-encrypted data), whole-stream and small-read paths

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dzcrypt_rs::{decrypt, encrypt, DecryptingReader};
use std::hint::black_box;
use std::io::{Cursor, Read};

const ASSET_ID: &str = "3135556";

// --- Size constants ---
const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrypt");

    let sizes = [64 * KB, MB, 10 * MB];

    for &size in &sizes {
        // --- Pre-encrypt once (outside the timed loop) ---
        let input = vec![0x41u8; size];
        let mut encrypted = Vec::with_capacity(size);
        encrypt(Cursor::new(&input), &mut encrypted, ASSET_ID).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("copy", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let mut dst = Vec::with_capacity(size);
                decrypt(Cursor::new(black_box(&encrypted)), &mut dst, ASSET_ID).unwrap();
                black_box(dst)
            });
        });

        // 4 KiB reads, the usual audio-decoder pull size
        group.bench_with_input(BenchmarkId::new("read_4k", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let mut reader =
                    DecryptingReader::new(Cursor::new(black_box(&encrypted)), ASSET_ID).unwrap();
                let mut buf = [0u8; 4 * KB];
                let mut total = 0usize;
                loop {
                    let n = reader.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    total += n;
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decrypt);
criterion_main!(benches);
