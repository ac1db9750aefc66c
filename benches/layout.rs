use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use org_tree_layout::config::LayoutConfig;
use org_tree_layout::forest::build_forest;
use org_tree_layout::ir::Record;
use org_tree_layout::layout::compute_layout;
use org_tree_layout::parser::parse_records;
use std::hint::black_box;

fn wide_org(nodes: usize, fanout: usize) -> Vec<Record> {
    (0..nodes)
        .map(|i| {
            let parent = (i > 0).then(|| format!("n{}", (i - 1) / fanout.max(1)));
            Record::new(format!("n{i}"), parent.as_deref())
        })
        .collect()
}

fn deep_chain(nodes: usize) -> Vec<Record> {
    (0..nodes)
        .map(|i| {
            let parent = (i > 0).then(|| format!("n{}", i - 1));
            Record::new(format!("n{i}"), parent.as_deref())
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut group = c.benchmark_group("pipeline");
    for &(nodes, fanout) in &[(100usize, 3usize), (1_000, 4), (10_000, 8)] {
        let records = wide_org(nodes, fanout);
        group.bench_with_input(
            BenchmarkId::new("wide", nodes),
            &records,
            |b, records| {
                b.iter(|| {
                    let mut forest = build_forest(black_box(records));
                    compute_layout(&mut forest, &config);
                    black_box(forest.len())
                })
            },
        );
    }
    let chain = deep_chain(10_000);
    group.bench_function("deep_chain_10000", |b| {
        b.iter(|| {
            let mut forest = build_forest(black_box(&chain));
            compute_layout(&mut forest, &config);
            black_box(forest.len())
        })
    });
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let input = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/benches/fixtures/org_chart.json"
    ));
    c.bench_function("parse_org_chart", |b| {
        b.iter(|| parse_records(black_box(input)).expect("parse failed"))
    });
}

criterion_group!(benches, bench_pipeline, bench_parse);
criterion_main!(benches);
