use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use vmap_core::{ScalarCodec, TimeOffset, VmapGenerationOptions, VmapParsingOptions};
use vmap_processor::{generate_vmap, parse_vmap};

const SAMPLE_VMAP: &str = include_str!("../tests/test_data/sample_vmap.xml");

fn benchmark_parse_vmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("VMAP Parsing");

    group.measurement_time(Duration::from_secs(10));
    group.sample_size(200);

    let default_options = VmapParsingOptions::default();

    group.bench_function("parse_sample_vmap", |b| {
        b.iter(|| {
            let parsed = parse_vmap(black_box(SAMPLE_VMAP), black_box(&default_options))
                .expect("样本解析失败");

            black_box(parsed);
        });
    });

    let document = parse_vmap(SAMPLE_VMAP, &default_options)
        .expect("样本解析失败")
        .document;
    let generation_options = VmapGenerationOptions::default();

    group.bench_function("generate_sample_vmap", |b| {
        b.iter(|| black_box(generate_vmap(black_box(&document), &generation_options)));
    });

    group.finish();
}

fn benchmark_time_offset(c: &mut Criterion) {
    c.bench_function("decode_time_offsets", |b| {
        b.iter(|| {
            for text in ["start", "#3", "50%", "01:02:03.004"] {
                black_box(TimeOffset::decode(black_box(text)).ok());
            }
        });
    });
}

criterion_group!(benches, benchmark_parse_vmap, benchmark_time_offset);

criterion_main!(benches);
