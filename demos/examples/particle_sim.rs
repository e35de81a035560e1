// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless particle simulation driving the broad phase.
//!
//! A fixed-tick counterpart of the classic windowed demo: circular particles
//! bounce around the world, and every tick the partition is torn down,
//! rebuilt from the new positions, and swept for colliding pairs. Once per
//! second it reports tick throughput and the current collision count.
//!
//! Run:
//! - `cargo run -p bracken_demos --example particle_sim -- --objects 1000`
//! - `cargo run -p bracken_demos --example particle_sim -- --mode brute`
//! - `cargo run -p bracken_demos --example particle_sim -- --verify`
//!
//! Set `RUST_LOG=debug` for per-tick output.

use std::time::Instant;

use bracken_broadphase::{BroadPhase, ExactOverlap, Pair};
use bracken_partition::Bounded;
use clap::{Parser, ValueEnum};
use kurbo::Rect;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Quadtree vs brute-force broad-phase particle demo")]
struct Args {
    /// Number of particles.
    #[arg(long, default_value_t = 500)]
    objects: usize,

    /// Particle radius.
    #[arg(long, default_value_t = 2.0)]
    radius: f64,

    /// Maximum initial speed, in units per second.
    #[arg(long, default_value_t = 100.0)]
    speed: f64,

    /// Partition node capacity before subdivision.
    #[arg(long, default_value_t = 4)]
    capacity: usize,

    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: u32,

    /// Candidate generation strategy.
    #[arg(long, value_enum, default_value_t = Mode::Quad)]
    mode: Mode,

    /// Cross-check quadtree pairs against the brute-force reference each tick.
    #[arg(long)]
    verify: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Rebuild the quadtree every tick and sweep it for pairs.
    Quad,
    /// The O(n²) all-pairs reference path.
    Brute,
}

#[derive(Copy, Clone, Debug)]
struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    r: f64,
}

impl Particle {
    /// Integrate one step and bounce off the world's walls.
    fn update(&mut self, dt: f64, world: Rect) {
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        if self.x - self.r < world.x0 {
            self.x = world.x0 + self.r;
            self.vx = self.vx.abs();
        } else if self.x + self.r > world.x1 {
            self.x = world.x1 - self.r;
            self.vx = -self.vx.abs();
        }
        if self.y - self.r < world.y0 {
            self.y = world.y0 + self.r;
            self.vy = self.vy.abs();
        } else if self.y + self.r > world.y1 {
            self.y = world.y1 - self.r;
            self.vy = -self.vy.abs();
        }
    }
}

impl Bounded for Particle {
    fn bounds(&self) -> Rect {
        Rect::new(self.x - self.r, self.y - self.r, self.x + self.r, self.y + self.r)
    }
}

impl ExactOverlap for Particle {
    fn overlaps(&self, other: &Self) -> bool {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        let reach = self.r + other.r;
        dx * dx + dy * dy <= reach * reach
    }
}

struct Rng(u64);

impl Rng {
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
        (v as f64) / ((1_u64 << 53) as f64)
    }
}

fn spawn(args: &Args, world: Rect, rng: &mut Rng) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(args.objects);
    for _ in 0..args.objects {
        let r = args.radius;
        particles.push(Particle {
            x: world.x0 + r + rng.next_f64() * (world.width() - 2.0 * r),
            y: world.y0 + r + rng.next_f64() * (world.height() - 2.0 * r),
            vx: (rng.next_f64() - 0.5) * args.speed,
            vy: (rng.next_f64() - 0.5) * args.speed,
            r,
        });
    }
    particles
}

fn brute_force_pairs(particles: &[Particle], out: &mut Vec<Pair>) {
    out.clear();
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            if particles[i].overlaps(&particles[j]) {
                out.push((i, j));
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let world = Rect::new(0.0, 0.0, 800.0, 600.0);
    let dt = 1.0 / 60.0;

    let mut rng = Rng(0x5EED_CAFE_0000_0001);
    let mut particles = spawn(&args, world, &mut rng);
    let mut phase = BroadPhase::new(world, args.capacity).expect("valid demo configuration");

    info!(
        objects = args.objects,
        radius = args.radius,
        speed = args.speed,
        capacity = args.capacity,
        mode = ?args.mode,
        "starting simulation"
    );

    let mut pairs = Vec::new();
    let mut reference = Vec::new();
    let mut window_start = Instant::now();
    let mut window_ticks = 0_u32;

    for tick in 0..args.ticks {
        for p in &mut particles {
            p.update(dt, world);
        }

        match args.mode {
            Mode::Quad => phase.pairs_exact(&particles, &mut pairs),
            Mode::Brute => brute_force_pairs(&particles, &mut pairs),
        }

        if args.verify {
            brute_force_pairs(&particles, &mut reference);
            let mut sorted = pairs.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, reference, "broad phase diverged from reference at tick {tick}");
        }

        debug!(tick, collisions = pairs.len(), "tick complete");

        window_ticks += 1;
        let elapsed = window_start.elapsed();
        if elapsed.as_secs_f64() >= 1.0 {
            let ticks_per_sec = (f64::from(window_ticks) / elapsed.as_secs_f64()).round();
            info!(tick, ticks_per_sec, collisions = pairs.len(), "throughput");
            window_start = Instant::now();
            window_ticks = 0;
        }
    }

    info!(final_collisions = pairs.len(), "simulation finished");
}
