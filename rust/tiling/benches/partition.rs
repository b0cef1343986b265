// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmark for panel partitioning.
//!
//! Measures:
//! 1. A single panel with a growing grid of window openings
//! 2. A batch of wall panels decomposed in parallel
//!
//! Run with: cargo bench -p panel-tiling --bench partition

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use panel_tiling::{
    decompose_panels, PanelFrame, PanelRequest, Partitioner, Rect, SubItem, SubItemKind,
    TilingConfig,
};

/// Facade with `cols x rows` windows on a regular grid.
fn facade(cols: usize, rows: usize) -> (Rect, Vec<Rect>) {
    let bay = 3.0;
    let storey = 3.0;
    let panel = Rect::from_size(cols as f64 * bay, rows as f64 * storey);
    let openings = (0..cols)
        .flat_map(|c| (0..rows).map(move |r| (c, r)))
        .map(|(c, r)| Rect::new(c as f64 * bay + 0.75, r as f64 * storey + 0.9, 1.5, 1.5))
        .collect();
    (panel, openings)
}

fn bench_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let partitioner = Partitioner::with_config(TilingConfig::new().with_verification(false));

    for &(cols, rows) in &[(2, 1), (4, 2), (8, 4), (16, 6)] {
        let (panel, openings) = facade(cols, rows);
        group.throughput(Throughput::Elements(openings.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("facade", format!("{}x{}", cols, rows)),
            &(panel, openings),
            |b, (panel, openings)| {
                b.iter(|| partitioner.partition(black_box(panel), black_box(openings)))
            },
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let config = TilingConfig::new().with_verification(false);
    let requests: Vec<PanelRequest> = (0..256)
        .map(|id| {
            let frame = PanelFrame::centered(6.0, 3.0);
            let items = vec![
                SubItem::aligned(SubItemKind::Door, &frame, Rect::new(0.5, 0.8, 0.9, 2.2)),
                SubItem::aligned(SubItemKind::Window, &frame, Rect::new(2.5, 0.9, 1.2, 1.2)),
                SubItem::aligned(SubItemKind::Window, &frame, Rect::new(4.2, 0.9, 1.2, 1.2)),
            ];
            PanelRequest::new(id, frame, items)
        })
        .collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(requests.len() as u64));
    group.bench_function("walls_256", |b| {
        b.iter(|| decompose_panels(black_box(&requests), &config))
    });
    group.finish();
}

criterion_group!(benches, bench_partition, bench_batch);
criterion_main!(benches);
