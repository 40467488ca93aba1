use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sman_decoder::TagIter;
use sman_encoder::SmanEncoder;
use sman_message::SmanMessage;
use sman_wire::Tag;

/// Build a message with `tags` records of `value_len`-byte values.
fn build_message(tags: u16, value_len: usize) -> Vec<u8> {
    let value = vec![b'v'; value_len];
    let mut enc = SmanEncoder::new();
    enc.add_tag(&Tag::new(0x1001, true, b""), true).unwrap();
    for i in 0..tags {
        enc.add_tag(&Tag::new(0x1000 + i, false, &value), false).unwrap();
    }
    enc.finalize(true).to_vec()
}

fn bench_decode_small(c: &mut Criterion) {
    let data = build_message(3, 8);

    c.bench_function("decode_small", |b| {
        b.iter(|| {
            let mut iter = TagIter::new();
            let mut count = 0;
            while let Some(tag) = iter.next_tag(&data, true).unwrap() {
                count += tag.value.len();
            }
            count
        });
    });
}

fn bench_decode_many_tags(c: &mut Criterion) {
    let data = build_message(100, 35);

    c.bench_function("decode_100_tags", |b| {
        b.iter(|| {
            let mut iter = TagIter::new();
            let mut count = 0;
            while let Some(tag) = iter.next_tag(&data, true).unwrap() {
                count += tag.value.len();
            }
            count
        });
    });
}

fn bench_decode_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_throughput");

    for size_kb in [1, 10, 100] {
        let data = build_message(1, size_kb * 1024);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("decode", format!("{size_kb}kb")),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut iter = TagIter::new();
                    let mut count = 0;
                    while let Some(tag) = iter.next_tag(data, true).unwrap() {
                        count += tag.value.len();
                    }
                    count
                });
            },
        );
    }

    group.finish();
}

fn bench_decode_message_layer(c: &mut Criterion) {
    let data = build_message(20, 35);

    c.bench_function("decode_message", |b| {
        b.iter(|| SmanMessage::decode(&data).unwrap());
    });
}

criterion_group!(
    benches,
    bench_decode_small,
    bench_decode_many_tags,
    bench_decode_throughput,
    bench_decode_message_layer
);
criterion_main!(benches);
