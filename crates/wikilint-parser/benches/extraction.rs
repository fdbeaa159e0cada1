//! Extraction throughput over a synthetic vault document

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use wikilint_parser::{extract_aliases, extract_references};

fn sample_document(links: usize) -> String {
    let mut doc = String::from("---\ntitle: Sample\naliases: [Sample Note, Example]\n---\n\n# Sample\n\n");
    for i in 0..links {
        doc.push_str(&format!(
            "Paragraph {i} mentions [[Note {i}]], [[Other#Heading {i}|shown]] and ![[image-{i}.png]].\n\n"
        ));
    }
    doc
}

fn bench_extraction(c: &mut Criterion) {
    let small = sample_document(10);
    let large = sample_document(1_000);

    c.bench_function("extract_references_small", |b| {
        b.iter(|| extract_references(black_box(&small)))
    });
    c.bench_function("extract_references_large", |b| {
        b.iter(|| extract_references(black_box(&large)))
    });
    c.bench_function("extract_aliases", |b| {
        b.iter(|| extract_aliases(black_box(&large)))
    });
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
