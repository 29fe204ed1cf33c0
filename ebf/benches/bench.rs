use criterion::{criterion_group, criterion_main, Criterion};

/// A raster of 16 vertical color bars, representable as EBF4.
fn bars(width: u16, height: u16) -> Vec<[u8; 3]> {
    let colors: Vec<[u8; 3]> = (0u8..16).map(|i| [85 * (i % 4), 85 * (i / 4), 0]).collect();
    let width = usize::from(width);

    (0..width * usize::from(height))
        .map(|i| colors[(i % width) * colors.len() / width])
        .collect()
}

fn codecs(c: &mut Criterion) {
    let (width, height) = (256u16, 192u16);
    let pixels = bars(width, height);
    let pixel_count = pixels.len();

    let mut encoded8 = Vec::with_capacity(ebf::ebf8_encoded_len(width, height));
    ebf::encode::ebf8_to_vec(width, height, &pixels, &mut encoded8).unwrap();
    let mut encoded4 = Vec::with_capacity(ebf::ebf4_encoded_len(width, height));
    ebf::encode::ebf4_to_vec(width, height, &pixels, &mut encoded4).unwrap();

    let mut group = c.benchmark_group("ebf codecs");
    group.throughput(criterion::Throughput::Elements(pixel_count as u64));

    group.bench_function("encode ebf8", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(ebf::ebf8_encoded_len(width, height));
            ebf::encode::ebf8_to_vec(width, height, &pixels, &mut out).unwrap();
            out
        })
    });
    group.bench_function("encode ebf4", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(ebf::ebf4_encoded_len(width, height));
            ebf::encode::ebf4_to_vec(width, height, &pixels, &mut out).unwrap();
            out
        })
    });
    group.bench_function("decode ebf8", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(pixel_count);
            ebf::decode::ebf8_to_vec(&encoded8, &mut out).unwrap();
            out
        })
    });
    group.bench_function("decode ebf4", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(pixel_count);
            ebf::decode::ebf4_to_vec(&encoded4, &mut out).unwrap();
            out
        })
    });
    group.bench_function("decode ebf4 native", |b| {
        let mut out = vec![0u8; pixel_count];
        b.iter(|| ebf::decode::ebf4_to_slice(&encoded4, &mut out).unwrap())
    });

    group.finish();
}

criterion_group!(benches, codecs);
criterion_main!(benches);
