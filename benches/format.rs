//! Formatting benchmarks - charcast vs std::format! baseline.
//!
//! These benchmarks help developers understand the cost of the buffer-first
//! path relative to the standard library's allocating formatter.
//!
//! Buffers are pre-sized and reused across iterations, so the charcast
//! numbers reflect steady-state single-pass writes.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use charcast::{as_hex, base64, cat, catrs, fmt, format};

/// Compare concatenation: pre-sized buffer vs allocating format!.
fn cat_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("cat_comparison");
    let iterations = 10_000u64;
    group.throughput(Throughput::Elements(iterations));

    // charcast into a reused stack buffer, single pass
    {
        let mut buf = [0u8; 64];
        group.bench_function("cat_buffer", |b| {
            b.iter(|| {
                for i in 0..iterations {
                    let n = cat!(&mut buf[..], "iter ", black_box(i), " of ", iterations);
                    black_box(&buf[..n]);
                }
            })
        });
    }

    // charcast into a reused Vec via the resizing adapter
    {
        let mut out: Vec<u8> = Vec::new();
        group.bench_function("catrs_vec", |b| {
            b.iter(|| {
                for i in 0..iterations {
                    catrs!(&mut out, "iter ", black_box(i), " of ", iterations);
                    black_box(out.as_slice());
                }
            })
        });
    }

    // std::format! baseline, allocates per call
    {
        group.bench_function("std_format", |b| {
            b.iter(|| {
                for i in 0..iterations {
                    let s = format!("iter {} of {}", black_box(i), iterations);
                    black_box(s.as_bytes());
                }
            })
        });
    }

    group.finish();
}

/// Template interpolation with mixed argument types.
fn format_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_comparison");
    let iterations = 10_000u64;
    group.throughput(Throughput::Elements(iterations));

    {
        let mut buf = [0u8; 64];
        group.bench_function("format_buffer", |b| {
            b.iter(|| {
                for i in 0..iterations {
                    let n = fmt!(
                        &mut buf[..],
                        "id={} addr={} ok={}",
                        black_box(i),
                        as_hex(black_box(i)),
                        true
                    );
                    black_box(&buf[..n]);
                }
            })
        });
    }

    {
        group.bench_function("std_format", |b| {
            b.iter(|| {
                for i in 0..iterations {
                    let s = format!(
                        "id={} addr={:x} ok={}",
                        black_box(i),
                        black_box(i),
                        true
                    );
                    black_box(s.as_bytes());
                }
            })
        });
    }

    group.finish();
}

/// Two-pass sizing overhead: undersized first call plus a full rewrite,
/// against the single-pass best case.
fn two_pass_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_pass_overhead");
    let iterations = 10_000u64;
    group.throughput(Throughput::Elements(iterations));

    {
        let mut buf = [0u8; 64];
        group.bench_function("single_pass", |b| {
            b.iter(|| {
                for i in 0..iterations {
                    let n = format(&mut buf, "value: {}", &[&black_box(i)]);
                    black_box(&buf[..n]);
                }
            })
        });
    }

    {
        let mut buf = [0u8; 64];
        group.bench_function("size_then_write", |b| {
            b.iter(|| {
                for i in 0..iterations {
                    let needed = format(&mut [], "value: {}", &[&black_box(i)]);
                    let n = format(&mut buf[..needed], "value: {}", &[&black_box(i)]);
                    black_box(&buf[..n]);
                }
            })
        });
    }

    group.finish();
}

/// Base64 throughput at a few payload sizes.
fn base64_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("base64_throughput");

    for size in [64usize, 1024, 65536] {
        let data: Vec<u8> = (0..size).map(|i| i as u8).collect();
        let mut encoded = vec![0u8; base64::encoded_len(size)];
        let mut decoded = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("encode_{size}"), |b| {
            b.iter(|| black_box(base64::encode(&mut encoded, black_box(&data))))
        });

        base64::encode(&mut encoded, &data);
        group.bench_function(format!("decode_{size}"), |b| {
            b.iter(|| black_box(base64::decode(&mut decoded, black_box(&encoded)).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    cat_comparison,
    format_comparison,
    two_pass_overhead,
    base64_throughput,
);
criterion_main!(benches);
