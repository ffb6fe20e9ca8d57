// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for checkbox group propagation.
//!
//! Measures the performance of:
//! - Building the descendant index for a wide, deep tree
//! - Toggling the root (whole tree) and a single leaf
//! - Deriving the display state of every node

use criterion::{criterion_group, criterion_main, Criterion};
use iced_kit::ui::checkbox_group::{CheckboxGroup, CheckboxItem, DescendantIndex, Selection};
use std::hint::black_box;

/// Four levels, eight children per branch: 4681 nodes.
fn wide_tree() -> Vec<CheckboxItem> {
    fn build(path: String, depth: usize) -> CheckboxItem {
        let mut item = CheckboxItem::new(path.clone(), path.clone());
        if depth < 4 {
            for i in 0..8 {
                item = item.child(build(format!("{path}.{i}"), depth + 1));
            }
        }
        item
    }
    vec![build("root".to_string(), 0)]
}

fn all_values(items: &[CheckboxItem], out: &mut Vec<String>) {
    for item in items {
        out.push(item.value.clone());
        all_values(&item.children, out);
    }
}

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkbox_group");
    let items = wide_tree();

    group.bench_function("build_index", |b| {
        b.iter(|| black_box(DescendantIndex::build(black_box(&items))));
    });

    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkbox_group");
    let checkboxes = CheckboxGroup::new(wide_tree());
    let empty = Selection::new();

    group.bench_function("toggle_root", |b| {
        b.iter(|| black_box(checkboxes.toggle(black_box("root"), true, &empty)));
    });

    group.bench_function("toggle_leaf", |b| {
        b.iter(|| black_box(checkboxes.toggle(black_box("root.3.3.3.3"), true, &empty)));
    });

    group.finish();
}

fn bench_derive_states(c: &mut Criterion) {
    let mut group = c.benchmark_group("checkbox_group");
    let checkboxes = CheckboxGroup::new(wide_tree());
    let mut values = Vec::new();
    all_values(checkboxes.items(), &mut values);
    let selection = checkboxes.toggle("root.2", true, &Selection::new());

    group.bench_function("derive_all_states", |b| {
        b.iter(|| {
            for value in &values {
                black_box(checkboxes.state(value, &selection));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_build_index, bench_toggle, bench_derive_states);
criterion_main!(benches);
