// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bracken_broadphase::{BroadPhase, ExactOverlap, Pair};
use bracken_partition::{Bounded, Partition};
use kurbo::Rect;

const WORLD: Rect = Rect::new(0.0, 0.0, 2000.0, 2000.0);

#[derive(Copy, Clone, Debug)]
struct Disc {
    x: f64,
    y: f64,
    r: f64,
}

impl Bounded for Disc {
    fn bounds(&self) -> Rect {
        Rect::new(self.x - self.r, self.y - self.r, self.x + self.r, self.y + self.r)
    }
}

impl ExactOverlap for Disc {
    fn overlaps(&self, other: &Self) -> bool {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        let reach = self.r + other.r;
        dx * dx + dy * dy <= reach * reach
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_discs(count: usize, radius: f64) -> Vec<Disc> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        out.push(Disc {
            x: radius + rng.next_f64() * (WORLD.width() - 2.0 * radius),
            y: radius + rng.next_f64() * (WORLD.height() - 2.0 * radius),
            r: radius,
        });
    }
    out
}

fn gen_clustered_discs(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Disc> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Disc {
                x: (cx + dx).clamp(6.0, 1994.0),
                y: (cy + dy).clamp(6.0, 1994.0),
                r: 6.0,
            });
        }
    }
    out
}

fn brute_force_pairs(discs: &[Disc], out: &mut Vec<Pair>) {
    out.clear();
    for i in 0..discs.len() {
        for j in (i + 1)..discs.len() {
            if discs[i].overlaps(&discs[j]) {
                out.push((i, j));
            }
        }
    }
}

fn bench_quadtree_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_sweep");
    for &n in &[256usize, 1024, 4096] {
        let discs = gen_uniform_discs(n, 6.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("rebuild_pairs_uniform_n{}", n), |b| {
            b.iter_batched(
                || BroadPhase::new(WORLD, 4).unwrap(),
                |mut phase| {
                    let mut pairs = Vec::new();
                    phase.pairs_exact(&discs, &mut pairs);
                    black_box(pairs.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let discs = gen_clustered_discs(24, 64, 120.0);
    group.throughput(Throughput::Elements(discs.len() as u64));
    group.bench_function("rebuild_pairs_clustered", |b| {
        b.iter_batched(
            || BroadPhase::new(WORLD, 4).unwrap(),
            |mut phase| {
                let mut pairs = Vec::new();
                phase.pairs_exact(&discs, &mut pairs);
                black_box(pairs.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");
    for &n in &[256usize, 1024, 4096] {
        let discs = gen_uniform_discs(n, 6.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("all_pairs_uniform_n{}", n), |b| {
            b.iter_batched(
                Vec::new,
                |mut pairs| {
                    brute_force_pairs(&discs, &mut pairs);
                    black_box(pairs.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let discs = gen_clustered_discs(24, 64, 120.0);
    group.throughput(Throughput::Elements(discs.len() as u64));
    group.bench_function("all_pairs_clustered", |b| {
        b.iter_batched(
            Vec::new,
            |mut pairs| {
                brute_force_pairs(&discs, &mut pairs);
                black_box(pairs.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_rebuild_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild_only");
    for &n in &[1024usize, 4096] {
        let discs = gen_uniform_discs(n, 6.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_all_n{}", n), |b| {
            b.iter_batched(
                || Partition::<usize>::new(WORLD, 4).unwrap(),
                |mut tree| {
                    for (i, d) in discs.iter().enumerate() {
                        tree.insert(d.bounds(), i);
                    }
                    black_box(&tree);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_only");
    for &n in &[1024usize, 4096] {
        let discs = gen_uniform_discs(n, 6.0);
        let mut tree = Partition::<usize>::new(WORLD, 4).unwrap();
        for (i, d) in discs.iter().enumerate() {
            tree.insert(d.bounds(), i);
        }
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("query_all_n{}", n), |b| {
            b.iter(|| {
                let mut out = Vec::new();
                let mut hits = 0usize;
                for d in &discs {
                    out.clear();
                    tree.query_into(d.bounds(), &mut out);
                    hits += out.len();
                }
                black_box(hits);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_quadtree_sweep,
    bench_brute_force,
    bench_rebuild_only,
    bench_query_only
);
criterion_main!(benches);
