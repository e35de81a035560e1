// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Broad-phase pair sweep: straddling entities, duplication, and dedup.
//!
//! Run:
//! - `cargo run -p bracken_demos --example broadphase_pairs`

use bracken_broadphase::{BroadPhase, ExactOverlap};
use bracken_partition::Bounded;
use kurbo::Rect;

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

fn main() {
    let world = Rect::new(0.0, 0.0, 100.0, 100.0);
    // Two overlapping discs straddling the world's center: once the tree
    // subdivides they are stored in all four quadrants, yet the sweep still
    // reports the pair exactly once.
    let discs = [
        Disc { x: 50.0, y: 50.0, r: 5.0 },
        Disc { x: 53.0, y: 50.0, r: 5.0 },
        Disc { x: 10.0, y: 10.0, r: 2.0 },
        Disc { x: 90.0, y: 12.0, r: 2.0 },
        Disc { x: 12.0, y: 88.0, r: 2.0 },
        Disc { x: 88.0, y: 90.0, r: 2.0 },
    ];

    let mut phase = BroadPhase::new(world, 2).unwrap();

    phase.rebuild(&discs);
    let mut candidates = Vec::new();
    phase.candidates_into(discs[0].bounds(), &mut candidates);
    println!("candidates around disc 0 (deduped): {candidates:?}");

    let mut pairs = Vec::new();
    phase.pairs_exact(&discs, &mut pairs);
    println!("colliding pairs: {pairs:?}");
    assert_eq!(pairs, [(0, 1)]);
}
