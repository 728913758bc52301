// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CryptoBuffer benchmarks: keystream XOR and chunking.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use parapet_buffer::CryptoBuffer;

fn bench_xor_4096(c: &mut Criterion) {
    let mut group = c.benchmark_group("crypto_buffer/4KB");

    group.bench_function("xor", |b| {
        let mut data = CryptoBuffer::from_slice(&vec![0xABu8; 4096]).unwrap();
        let keystream = CryptoBuffer::from_slice(&vec![0x5Au8; 4096]).unwrap();
        b.iter(|| {
            data.xor(black_box(&keystream));
        });
    });

    group.finish();
}

fn bench_chunks_4096(c: &mut Criterion) {
    let mut group = c.benchmark_group("crypto_buffer/4KB");

    group.bench_function("try_chunks/256", |b| {
        let data = CryptoBuffer::from_slice(&vec![0xABu8; 4096]).unwrap();
        b.iter(|| {
            let chunks = data.try_chunks(black_box(256)).unwrap();
            black_box(&chunks);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_xor_4096, bench_chunks_4096);
criterion_main!(benches);
