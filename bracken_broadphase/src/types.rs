// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the broad phase: the exact-test capability and pairs.

/// Exact narrow-phase overlap decision between two entities.
///
/// The partition's queries are conservative; this test is what actually
/// decides a collision. It must be symmetric, and it should only report
/// overlaps whose bounding regions strictly overlap as well — the broad
/// phase prunes by bounds, so a "true" verdict for entities whose bounds
/// merely touch would never be surfaced.
pub trait ExactOverlap {
    /// Whether `self` and `other` truly overlap.
    fn overlaps(&self, other: &Self) -> bool;
}

/// A colliding pair of entity slots, normalized so the first index is the
/// smaller one. Each unordered pair is reported at most once per tick.
pub type Pair = (usize, usize);
