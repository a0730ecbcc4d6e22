// benches/buffer_bench.rs
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gapbuf::prelude::*;
use std::hint::black_box;

fn bench_write_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_operations");

    for size in [256, 1024, 4096, 16384].iter() {
        let payload = vec![0xA5u8; *size];
        group.bench_with_input(BenchmarkId::new("write_read", size), size, |b, &size| {
            let mut out = vec![0u8; size];
            b.iter(|| {
                let mut buf = Buffer::new();
                buf.write(black_box(&payload));
                buf.move_to(0);
                black_box(buf.read(&mut out));
            });
        });
    }

    group.finish();
}

fn bench_reserve_vs_grow(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");
    let line = b"a line of text that an editor would append\n";

    // Storage grows on demand
    group.bench_function("grow_on_write", |b| {
        b.iter(|| {
            let mut buf = Buffer::new();
            for _ in 0..256 {
                buf.write(black_box(line));
            }
        });
    });

    // Physical storage reserved up front
    group.bench_function("preallocated", |b| {
        b.iter(|| {
            let mut buf = Buffer::with_config(BufferConfig {
                initial_capacity: 256 * line.len(),
                preallocate: true,
            });
            for _ in 0..256 {
                buf.write(black_box(line));
            }
        });
    });

    group.finish();
}

fn bench_cursor_moves(c: &mut Criterion) {
    let mut buf = Buffer::from_vec(vec![b'x'; 64 * 1024]);
    let len = buf.len() as isize;

    c.bench_function("move_by_walk", |b| {
        b.iter(|| {
            buf.move_to(0);
            while buf.move_by(black_box(97)) != 0 {}
            black_box(buf.move_to(len));
        });
    });
}

fn bench_chunked_read(c: &mut Criterion) {
    let buf_len = 1 << 20;
    let mut buf = Buffer::from_vec(vec![b'y'; buf_len]);

    c.bench_function("chunked_read_1mb", |b| {
        let mut chunk = [0u8; 4096];
        b.iter(|| {
            buf.move_to(0);
            while !buf.read(&mut chunk).is_end() {}
        });
    });
}

criterion_group!(
    benches,
    bench_write_read,
    bench_reserve_vs_grow,
    bench_cursor_moves,
    bench_chunked_read
);
criterion_main!(benches);
