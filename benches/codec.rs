//! Benchmarks for the markup codec.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use blockmail::{Background, Document, Template, parse, parse_bytes, serialize};

const NEWSLETTER_JSON: &str = include_str!("../tests/fixtures/newsletter.json");

fn newsletter() -> Document {
    Template::from_json(NEWSLETTER_JSON).unwrap().into_document()
}

/// The fixture's rows repeated to make a long email.
fn long_newsletter(copies: usize) -> Document {
    let base = newsletter();
    let mut doc = Document::with_styles(base.styles.clone());
    for _ in 0..copies {
        doc.rows.extend(base.rows.iter().cloned());
    }
    doc
}

// ============================================================================
// Export
// ============================================================================

fn bench_serialize(c: &mut Criterion) {
    let doc = newsletter();
    c.bench_function("serialize", |b| b.iter(|| serialize(black_box(&doc))));

    let long = long_newsletter(20);
    c.bench_function("serialize_long", |b| b.iter(|| serialize(black_box(&long))));
}

// ============================================================================
// Import
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let html = serialize(&newsletter());
    c.bench_function("parse", |b| b.iter(|| parse(black_box(&html))));

    let long = serialize(&long_newsletter(20));
    c.bench_function("parse_long", |b| b.iter(|| parse(black_box(&long))));
    c.bench_function("parse_bytes_long", |b| {
        b.iter(|| parse_bytes(black_box(long.as_bytes())))
    });
}

fn bench_template(c: &mut Criterion) {
    c.bench_function("template_from_json", |b| {
        b.iter(|| Template::from_json(black_box(NEWSLETTER_JSON)).unwrap())
    });
}

// ============================================================================
// Background values
// ============================================================================

fn bench_background(c: &mut Criterion) {
    let mut group = c.benchmark_group("background");
    group.bench_function("decode_color", |b| {
        b.iter(|| Background::decode(black_box("rgba(79, 70, 229, 0.5)")))
    });
    group.bench_function("decode_gradient", |b| {
        b.iter(|| {
            Background::decode(black_box(
                "linear-gradient(45deg, red, orange 30%, yellow, green, blue 90%, violet)",
            ))
        })
    });
    let gradient = Background::decode("linear-gradient(90deg, #fff, #000 40%, #888)").unwrap();
    group.bench_function("encode_gradient", |b| b.iter(|| black_box(&gradient).encode()));
    group.finish();
}

criterion_group!(
    benches,
    bench_serialize,
    bench_parse,
    bench_template,
    bench_background
);
criterion_main!(benches);
