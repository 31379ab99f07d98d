use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rhuff::{Codec, CodecConfig, FrequencyTable, HuffmanTree};

fn sample(len: usize) -> Vec<u8> {
    b"The quick brown fox jumps over the lazy dog. "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

pub fn huffman_benchmark(c: &mut Criterion) {
    let training = sample(64 * 1024);
    let table = FrequencyTable::from_bytes(&training);

    c.bench_function("huffman build tree", |b| {
        b.iter(|| HuffmanTree::from_table(black_box(&table)).unwrap())
    });

    let codec = Codec::from_table(&table, CodecConfig::default()).unwrap();
    let mut group = c.benchmark_group("huffman codec");
    for size in [1024usize, 64 * 1024, 1024 * 1024] {
        let payload = sample(size);
        let encoded = codec.encode_to_vec(&payload).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &payload, |b, p| {
            b.iter(|| codec.encode_to_vec(black_box(p)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, e| {
            b.iter(|| codec.decode_to_vec(black_box(e)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, huffman_benchmark);
criterion_main!(benches);
