//! Benchmarks for docbind cleaning performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks clean synthetic templates of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use docbind::{
    DocBind, Document, ObjectVariable, Paragraph, Table, TableCell, TableRow, TableVariable,
    Variable, Variables,
};
use serde_json::json;

/// Creates a template with the given number of paragraphs and one table row per ten paragraphs.
fn create_test_document(paragraphs: usize) -> Document {
    let mut doc = Document::new();
    for i in 0..paragraphs {
        doc.add_paragraph(Paragraph::with_runs([
            format!("Line {} for ${{FirstName}} ", i),
            "at ${city}, ".to_string(),
            "total ${Price}".to_string(),
        ]));
    }

    let mut table = Table::new();
    for _ in 0..paragraphs / 10 {
        table.add_row(TableRow::new(vec![
            TableCell::text("${Name}"),
            TableCell::text("${Price}"),
        ]));
    }
    doc.add_table(table);
    doc
}

fn create_test_variables(rows: usize) -> Variables {
    let mut items = TableVariable::new();
    let objects: Vec<Variable> = (0..rows)
        .map(|i| {
            Variable::Object(ObjectVariable::from_json(
                "item",
                &json!({"name": format!("item {}", i), "price": i}),
            ))
        })
        .collect();
    items.add_row(objects).unwrap();

    let mut variables = Variables::new();
    variables.add_text("firstName", "Ann");
    variables.add_text("city", "Oslo");
    variables.add_table(items);
    variables
}

/// Benchmark the full cleaning pass.
fn bench_clean(c: &mut Criterion) {
    let variables = create_test_variables(100);
    let mut group = c.benchmark_group("clean");

    for paragraphs in [10, 100, 1000] {
        let doc = create_test_document(paragraphs);
        group.bench_function(format!("{}_paragraphs", paragraphs), |b| {
            b.iter_batched(
                || doc.clone(),
                |mut doc| DocBind::new().clean(black_box(&mut doc), &variables),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark schema extraction from a large table.
fn bench_keys(c: &mut Criterion) {
    let variables = create_test_variables(1000);

    c.bench_function("extract_keys_1000_rows", |b| {
        b.iter(|| DocBind::new().keys(black_box(&variables)));
    });
}

/// Benchmark placeholder scanning.
fn bench_tokens(c: &mut Criterion) {
    let mut doc = create_test_document(1000);

    c.bench_function("tokens_1000_paragraphs", |b| {
        b.iter(|| DocBind::new().tokens(black_box(&mut doc)));
    });
}

criterion_group!(benches, bench_clean, bench_keys, bench_tokens);
criterion_main!(benches);
