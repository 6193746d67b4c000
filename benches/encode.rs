use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::sync::Arc;

use qrforge::encoder::function_patterns::TemplateCache;
use qrforge::{ECLevel, EncodeOptions, QrEncoder, Version, encode_text};

fn bench_encode_short_numeric(c: &mut Criterion) {
    c.bench_function("encode_numeric_8_digits", |b| {
        b.iter(|| encode_text(black_box("01234567"), black_box(ECLevel::M)))
    });
}

fn bench_encode_url(c: &mut Criterion) {
    c.bench_function("encode_url", |b| {
        b.iter(|| {
            encode_text(
                black_box("HTTPS://EXAMPLE.COM/SOME/LONGER/PATH?Q=1"),
                black_box(ECLevel::M),
            )
        })
    });
}

fn bench_encode_long_bytes(c: &mut Criterion) {
    let payload: Vec<u8> = (0..1500).map(|i| (i % 251) as u8).collect();
    c.bench_function("encode_bytes_1500", |b| {
        b.iter(|| qrforge::encode_bytes(black_box(&payload), black_box(ECLevel::L)))
    });
}

fn bench_encode_version_40(c: &mut Criterion) {
    let options = EncodeOptions {
        version: Some(40),
        ec_level: ECLevel::L,
        ..Default::default()
    };
    let text = "A".repeat(1000);
    c.bench_function("encode_version_40", |b| {
        b.iter(|| {
            let mut enc = QrEncoder::new(options.clone()).unwrap();
            enc.add_text(black_box(&text));
            enc.build()
        })
    });
}

fn bench_encode_with_template_cache(c: &mut Criterion) {
    let cache = Arc::new(TemplateCache::preload(Version::MIN, Version::MAX));
    c.bench_function("encode_url_cached_templates", |b| {
        b.iter(|| {
            let mut enc =
                QrEncoder::with_templates(EncodeOptions::default(), Arc::clone(&cache)).unwrap();
            enc.add_text(black_box("HTTPS://EXAMPLE.COM/SOME/LONGER/PATH?Q=1"));
            enc.build()
        })
    });
}

criterion_group!(
    benches,
    bench_encode_short_numeric,
    bench_encode_url,
    bench_encode_long_bytes,
    bench_encode_version_40,
    bench_encode_with_template_cache
);
criterion_main!(benches);
