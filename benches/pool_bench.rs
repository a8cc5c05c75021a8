//! Benchmarks for bytepool.
//!
//! Run with:
//!     cargo bench

use std::sync::Arc;
use std::thread;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use bytepool::{Buffer, BufferPool, PoolConfig};

fn bench_acquire_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("acquire_release");

    // Different payload sizes
    for size in [64, 4 * 1024, 64 * 1024] {
        let payload = vec![0x42u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        let pool = BufferPool::new(64);
        group.bench_with_input(format!("pooled_{}b", size), &payload, |b, payload| {
            b.iter(|| {
                let mut buf = pool.acquire();
                buf.write(black_box(payload));
                black_box(buf.len());
                pool.release(buf);
            });
        });

        // Baseline: allocate every time
        group.bench_with_input(format!("fresh_{}b", size), &payload, |b, payload| {
            b.iter(|| {
                let mut buf = Buffer::new();
                buf.write(black_box(payload));
                black_box(buf.len())
            });
        });
    }

    group.finish();
}

fn bench_guard(c: &mut Criterion) {
    let mut group = c.benchmark_group("guard");
    let pool = BufferPool::with_config(PoolConfig::new(64).with_buffer_capacity(4096)).unwrap();

    group.bench_function("acquire_pooled", |b| {
        b.iter(|| {
            let mut buf = pool.acquire_pooled();
            buf.write_str(black_box("key=value;"));
            black_box(buf.len())
        });
    });

    // Zero capacity: always allocates, always drops
    let empty = BufferPool::new(0);
    group.bench_function("exhausted", |b| {
        b.iter(|| {
            let mut buf = empty.acquire_pooled();
            buf.write_str(black_box("key=value;"));
            black_box(buf.len())
        });
    });

    group.finish();
}

fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");
    let threads = 4;
    let per_thread = 1_000;

    group.throughput(Throughput::Elements((threads * per_thread) as u64));
    group.bench_function("four_threads", |b| {
        let pool = Arc::new(BufferPool::new(16));
        b.iter(|| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    let pool = Arc::clone(&pool);
                    thread::spawn(move || {
                        for _ in 0..per_thread {
                            let mut buf = pool.acquire();
                            buf.write_byte(black_box(1));
                            pool.release(buf);
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_acquire_release, bench_guard, bench_contended);
criterion_main!(benches);
