// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_partition --heading-base-level=0

//! Bracken Partition: a Kurbo-native quadtree for 2D broad-phase queries.
//!
//! Bracken Partition is the filtering half of collision detection: given a
//! dynamic set of bounded entities, it answers "who might be near this
//! region?" with a small conservative candidate set, so the expensive exact
//! overlap test only runs on candidates instead of on all pairs.
//!
//! - Insert copyable handles with axis-aligned bounds; the tree never owns
//!   entities.
//! - Query by rectangle; results are an over-approximate superset that the
//!   caller narrows with an exact test.
//! - Tear the whole tree down with [`Partition::clear`] and rebuild it every
//!   simulation tick; there is no incremental update path to get wrong.
//!
//! Nodes subdivide into four quadrants once they exceed a configured
//! capacity. Entities straddling a boundary are stored in every child they
//! overlap, so queries can return duplicates; callers de-duplicate by
//! identity. Subdivision is bounded by the fixed [`MAX_DEPTH`], which keeps
//! coincident-point input from recursing forever; leaves at the bottom may
//! legally exceed capacity.
//!
//! # Example
//!
//! ```rust
//! use bracken_partition::Partition;
//! use kurbo::Rect;
//!
//! let world = Rect::new(0.0, 0.0, 640.0, 480.0);
//! let mut tree: Partition<u32> = Partition::new(world, 4).unwrap();
//!
//! // Per tick: clear, insert every entity, then query around each entity.
//! tree.clear();
//! tree.insert(Rect::new(10.0, 10.0, 20.0, 20.0), 0);
//! tree.insert(Rect::new(15.0, 15.0, 25.0, 25.0), 1);
//! tree.insert(Rect::new(600.0, 400.0, 620.0, 420.0), 2);
//!
//! let mut hits: Vec<u32> = tree.query(Rect::new(10.0, 10.0, 20.0, 20.0)).collect();
//! hits.sort_unstable();
//! hits.dedup();
//! assert!(hits.contains(&1));
//! assert!(!hits.contains(&2));
//! ```
//!
//! Entities whose bounds lie entirely outside the configured world region are
//! silently not tracked; keep the world region large enough for everything
//! you want indexed.
//!
//! ## Float semantics
//!
//! Coordinates are `f64` and assumed finite (no NaNs); debug builds may
//! assert. Point containment follows [`kurbo::Rect::contains`], which is
//! half-open, and rectangle overlap is strict: regions touching only along an
//! edge are not overlapping and never generate candidates.
//!
//! ## Concurrency
//!
//! All operations are synchronous tree walks. Within one tick, run all
//! inserts before any query; queries take `&self` and may then be issued in
//! parallel. The tree is not safe for concurrent mutation.

#![no_std]

extern crate alloc;

pub mod error;
pub mod partition;
pub mod types;

pub use error::ConfigError;
pub use partition::{MAX_DEPTH, Partition};
pub use types::{Bounded, overlaps, quadrants};
