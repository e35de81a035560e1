// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry predicates and the bounded-entity capability.
//!
//! Regions are plain [`kurbo::Rect`] values. Point containment uses
//! [`Rect::contains`], which is half-open: the minimum edges are inclusive and
//! the maximum edges exclusive. The predicates here keep rectangle overlap
//! consistent with that convention, so two regions that only touch along an
//! edge do not count as overlapping. A zero-area region overlaps nothing.
//!
//! Inputs are assumed to be well-formed (finite, non-inverted). Malformed
//! rects are a caller precondition violation, not a handled condition.

use kurbo::Rect;

/// Whether two regions overlap with positive area on both axes.
///
/// Strict on purpose: regions that share only an edge or a corner are not
/// overlapping. This keeps adjacent partition cells from generating spurious
/// candidates for entities that merely touch a cell boundary.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// The four equal quadrants of `r`, in northwest, northeast, southwest,
/// southeast order. Together they exactly tile `r`.
#[inline]
pub fn quadrants(r: &Rect) -> [Rect; 4] {
    let cx = 0.5 * (r.x0 + r.x1);
    let cy = 0.5 * (r.y0 + r.y1);
    [
        Rect::new(r.x0, r.y0, cx, cy),
        Rect::new(cx, r.y0, r.x1, cy),
        Rect::new(r.x0, cy, cx, r.y1),
        Rect::new(cx, cy, r.x1, r.y1),
    ]
}

/// Capability for values that expose a current axis-aligned bounding region.
///
/// This is the only entity state the partition ever reads. Entities larger
/// than their true shape are fine; the bounding region just has to be
/// conservative.
pub trait Bounded {
    /// The entity's current world-space bounding rectangle.
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}
