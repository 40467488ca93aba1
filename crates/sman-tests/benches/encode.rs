use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sman_encoder::SmanEncoder;
use sman_wire::Tag;

fn bench_encode_small(c: &mut Criterion) {
    c.bench_function("encode_small", |b| {
        b.iter(|| {
            let mut enc = SmanEncoder::new();
            enc.add_tag(&Tag::new(0x1001, true, b""), true).unwrap();
            enc.add_tag(&Tag::new(0x1000, false, b"ABCD"), false).unwrap();
            enc.add_tag(&Tag::new(0x2000, false, b"X"), false).unwrap();
            enc.finalize(true).to_vec()
        });
    });
}

fn bench_encode_many_tags(c: &mut Criterion) {
    let value = b"some reasonably sized value payload";

    c.bench_function("encode_100_tags", |b| {
        b.iter(|| {
            let mut enc = SmanEncoder::new();
            enc.add_tag(&Tag::new(0x1001, true, b""), true).unwrap();
            for i in 0..100u16 {
                enc.add_tag(&Tag::new(0x1000 + i, false, value), false).unwrap();
            }
            enc.finalize(true).to_vec()
        });
    });
}

fn bench_encode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_throughput");

    for size_kb in [1, 10, 100] {
        let value = vec![b'x'; size_kb * 1024];
        group.throughput(Throughput::Bytes((size_kb * 1024) as u64));
        group.bench_with_input(
            BenchmarkId::new("encode", format!("{size_kb}kb")),
            &value,
            |b, value| {
                b.iter(|| {
                    let mut enc = SmanEncoder::new();
                    enc.add_tag(&Tag::new(0x1000, false, value), false).unwrap();
                    enc.finalize(true).to_vec()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_many_tags,
    bench_encode_throughput
);
criterion_main!(benches);
