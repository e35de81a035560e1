// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bracken_broadphase --heading-base-level=0

//! Bracken Broadphase: the per-tick sweep over the quadtree partition.
//!
//! ## Overview
//!
//! This crate drives the partition through one simulation tick — clear,
//! insert every entity, query around each entity — and turns the raw,
//! duplicate-bearing candidate sets into clean results: candidates are
//! de-duplicated by slot, self-matches are dropped, and every truly colliding
//! pair is reported exactly once in `(smaller, larger)` order.
//!
//! It does not decide what a collision is. Supply the exact test, either as a
//! closure to [`BroadPhase::pairs`] or by implementing
//! [`ExactOverlap`](crate::types::ExactOverlap) on the entity type and using
//! [`BroadPhase::pairs_exact`].
//!
//! ## Layering
//!
//! The partition stays a dumb conservative index; collision semantics live
//! here or above. A game loop typically owns a `Vec` of entities, integrates
//! motion, then hands the slice to [`BroadPhase::pairs`] once per tick and
//! reacts to the emitted pairs.
//!
//! ## Example
//!
//! ```rust
//! use bracken_broadphase::BroadPhase;
//! use bracken_partition::Bounded;
//! use kurbo::Rect;
//!
//! struct Box2 {
//!     rect: Rect,
//! }
//!
//! impl Bounded for Box2 {
//!     fn bounds(&self) -> Rect {
//!         self.rect
//!     }
//! }
//!
//! let world = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let entities = [
//!     Box2 { rect: Rect::new(10.0, 10.0, 20.0, 20.0) },
//!     Box2 { rect: Rect::new(15.0, 15.0, 25.0, 25.0) },
//!     Box2 { rect: Rect::new(70.0, 70.0, 80.0, 80.0) },
//! ];
//!
//! let mut phase = BroadPhase::new(world, 4).unwrap();
//! let mut pairs = Vec::new();
//! // Exact test here: plain rectangle overlap.
//! phase.pairs(&entities, |a, b| bracken_partition::overlaps(&a.rect, &b.rect), &mut pairs);
//! assert_eq!(pairs, [(0, 1)]);
//! ```

#![no_std]

extern crate alloc;

pub mod sweep;
pub mod types;

pub use sweep::BroadPhase;
pub use types::{ExactOverlap, Pair};
