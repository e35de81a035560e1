// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bracken_partition::Partition;
use kurbo::Rect;

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

const WORLD: Rect = Rect::new(0.0, 0.0, 2000.0, 2000.0);

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::new(x0, y0, x0 + cell, y0 + cell));
        }
    }
    out
}

fn to_rstar_rects(v: &[Rect]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.x0, r.y0], [r.x1, r.y1]))
        .collect()
}

fn bench_quadtree_vs_rstar(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_vs_rstar");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let query = Rect::new(100.0, 100.0, 500.0, 500.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("bracken_build_query_n{}", n), |b| {
            b.iter_batched(
                || Partition::<u32>::new(WORLD, 8).unwrap(),
                |mut tree| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        tree.insert(r, i as u32);
                    }
                    let hits: usize = tree.query(query).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners([query.x0, query.y0], [query.x1, query.y1]);
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadtree_vs_rstar);
criterion_main!(benches);
