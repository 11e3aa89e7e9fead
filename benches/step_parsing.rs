//! Benchmark: Action Step Parsing
//!
//! Measures step parsing across body sizes and encodings.
//! Run: cargo bench --bench step_parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rest_step::{document, ActionStepParser, ParseContext};

/// Bulk step with N documents in a single `body:` list
fn generate_bulk_list(doc_count: usize) -> String {
    let mut yaml = String::from("bulk:\n  refresh: true\n  body:\n");
    for i in 0..doc_count {
        yaml.push_str(&format!(
            "    - index: {{ _index: test_index, _id: doc_{i} }}\n    - {{ f1: v{i}, f2: {i} }}\n"
        ));
    }
    yaml
}

/// Bulk step with N repeated `body:` keys
fn generate_bulk_repeated(doc_count: usize) -> String {
    let mut yaml = String::from("bulk:\n  refresh: true\n");
    for i in 0..doc_count {
        yaml.push_str(&format!("  body: {{ f1: v{i}, f2: {i} }}\n"));
    }
    yaml
}

fn bench_parse_yaml(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_yaml");
    let parser = ActionStepParser::new();
    let ctx = ParseContext::new("bench");

    for size in [1, 10, 100, 500].iter() {
        let list = generate_bulk_list(*size);
        group.throughput(Throughput::Bytes(list.len() as u64));
        group.bench_with_input(BenchmarkId::new("body_list", size), &list, |b, yaml| {
            b.iter(|| black_box(parser.parse_yaml(black_box(yaml), &ctx).unwrap()));
        });

        let repeated = generate_bulk_repeated(*size);
        group.throughput(Throughput::Bytes(repeated.len() as u64));
        group.bench_with_input(BenchmarkId::new("repeated_body", size), &repeated, |b, yaml| {
            b.iter(|| black_box(parser.parse_yaml(black_box(yaml), &ctx).unwrap()));
        });
    }

    group.finish();
}

/// Parsing a pre-loaded node, without the YAML reader
fn bench_parse_node(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_node");
    let parser = ActionStepParser::new();
    let ctx = ParseContext::new("bench");

    for size in [1, 10, 100, 500].iter() {
        let node = document::from_yaml_str(&generate_bulk_list(*size)).unwrap();
        group.bench_with_input(BenchmarkId::new("body_list", size), &node, |b, node| {
            b.iter(|| black_box(parser.parse(black_box(node), &ctx).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_yaml, bench_parse_node);
criterion_main!(benches);
