// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Bracken Partition: configure, insert, query, rebuild.
//!
//! Run:
//! - `cargo run -p bracken_demos --example partition_basics`

use bracken_partition::Partition;
use kurbo::Rect;

fn main() {
    let world = Rect::new(0.0, 0.0, 640.0, 480.0);
    let mut tree: Partition<u32> = Partition::new(world, 4).unwrap();

    // One tick's worth of insertions.
    tree.insert(Rect::new(10.0, 10.0, 30.0, 30.0), 0);
    tree.insert(Rect::new(25.0, 25.0, 45.0, 45.0), 1);
    tree.insert(Rect::new(600.0, 440.0, 620.0, 460.0), 2);
    println!("tree after insert: {tree:?}");

    // Query around entity 0; the result is a conservative superset and can
    // contain duplicates, so de-duplicate before acting on it.
    let mut hits: Vec<u32> = tree.query(Rect::new(10.0, 10.0, 30.0, 30.0)).collect();
    hits.sort_unstable();
    hits.dedup();
    println!("candidates near entity 0: {hits:?}");
    assert!(hits.contains(&1));
    assert!(!hits.contains(&2));

    // Next tick: clear and rebuild from the new positions.
    tree.clear();
    tree.insert(Rect::new(300.0, 200.0, 320.0, 220.0), 0);
    let moved: Vec<u32> = tree.query(world).collect();
    println!("after rebuild: {moved:?}");
}
