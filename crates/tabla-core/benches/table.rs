//! Benchmark tests for table derivation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use tabla_core::{
    build_header_groups, sort_records, Column, SortKey, Table, TableOptions,
};

fn nested_columns() -> Vec<Column> {
    vec![
        Column::group(
            "TV Show",
            [Column::new("Name", "show.name"), Column::new("Type", "show.type")],
        ),
        Column::group(
            "Details",
            [Column::group(
                "Cat1",
                [
                    Column::new("Language", "show.language"),
                    Column::new("Runtime", "show.runtime"),
                ],
            )],
        ),
    ]
}

fn records(n: usize) -> Vec<Value> {
    (0..n)
        .map(|i| {
            json!({"show": {
                "name": format!("Show {i}"),
                "type": "Scripted",
                "language": "English",
                "runtime": (i * 7) % 120,
            }})
        })
        .collect()
}

fn bench_build_header_groups(c: &mut Criterion) {
    let columns = nested_columns();
    c.bench_function("build_header_groups_nested", |b| {
        b.iter(|| build_header_groups(black_box(&columns)))
    });
}

fn bench_sort_records(c: &mut Criterion) {
    let data = records(1000);
    let leaves = vec![Column::new("Runtime", "show.runtime")];
    let keys = [SortKey::descending("show.runtime")];
    c.bench_function("sort_records_1000", |b| {
        b.iter(|| sort_records(black_box(&data), black_box(&keys), &leaves))
    });
}

fn bench_full_view(c: &mut Criterion) {
    let table = Table::new(
        nested_columns(),
        records(1000),
        TableOptions::new()
            .pagination(true)
            .sort_by(true)
            .initial_page_size(25)
            .initial_sort_keys([SortKey::ascending("show.runtime")]),
    )
    .expect("valid schema");
    c.bench_function("table_view_1000_rows", |b| b.iter(|| table.view()));
}

criterion_group!(
    benches,
    bench_build_header_groups,
    bench_sort_records,
    bench_full_view
);
criterion_main!(benches);
