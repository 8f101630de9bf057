use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use restblocks_engine::parsing::{ParseOptions, parse_document};
use xi_rope::Rope;
mod common;

fn bench_document_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");
    group.sample_size(10);

    for sections in [10, 100] {
        let rope = Rope::from(common::generate_document(sections).as_str());
        group.bench_with_input(BenchmarkId::new("sections", sections), &rope, |b, rope| {
            b.iter(|| {
                let doc = parse_document(std::hint::black_box(rope), &ParseOptions::default());
                std::hint::black_box(doc);
            });
        });
    }

    group.finish();
}

fn bench_nested_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_lists");
    group.sample_size(10);

    let rope = Rope::from(common::generate_nested_lists(4, 4).as_str());
    group.bench_function("depth_4_width_4", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&rope), &ParseOptions::default());
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

fn bench_roman_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("roman_list");
    group.sample_size(10);

    let rope = Rope::from(common::generate_roman_list(500).as_str());
    group.bench_function("500_items", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&rope), &ParseOptions::default());
            std::hint::black_box(doc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_document_parse, bench_nested_lists, bench_roman_list);
criterion_main!(benches);
