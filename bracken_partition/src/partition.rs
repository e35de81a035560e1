// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree partition: node arena, subdivision, insertion, queries.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Rect;

use crate::error::ConfigError;
use crate::types::{Bounded, overlaps, quadrants};

/// Maximum subdivision depth of the tree; the root is at depth 0.
///
/// A fixed bound, not a tuning knob. Capacity-triggered subdivision cannot
/// separate entities that share a point, so without a depth limit coincident
/// input would recurse forever. Leaves at this depth are allowed to hold more
/// than the configured capacity.
pub const MAX_DEPTH: usize = 8;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

const ROOT: NodeIdx = NodeIdx::new(0);

/// A node is either a leaf holding entries or an internal node with exactly
/// four quadrant children. Internal nodes never hold entries; the enum makes
/// that state unrepresentable.
enum Kind<P> {
    Leaf(Vec<(Rect, P)>),
    Internal([NodeIdx; 4]),
}

struct Node<P> {
    boundary: Rect,
    kind: Kind<P>,
}

/// A quadtree over an axis-aligned world region, rebuilt from scratch every
/// simulation tick.
///
/// The payload `P` is a small copyable handle (an index or id) into an
/// externally owned entity store; the partition never owns entities and never
/// reads entity state beyond the bounds passed to [`insert`](Self::insert).
///
/// The intended protocol per tick is [`clear`](Self::clear), then
/// [`insert`](Self::insert) for every entity, then [`query`](Self::query) for
/// every entity's bounds. Handles stored during one tick must not be used to
/// reach entities mutated or destroyed after the next `clear`.
///
/// An entity straddling a child boundary is inserted into every child it
/// overlaps, so query results may contain duplicates (and the querying entity
/// itself). Callers de-duplicate by identity before running exact tests.
pub struct Partition<P: Copy + Debug> {
    boundary: Rect,
    capacity: usize,
    nodes: Vec<Node<P>>,
}

impl<P: Copy + Debug> Partition<P> {
    /// Create a partition over `boundary` with the given per-node capacity.
    ///
    /// Fails on a capacity of zero or a world region without positive area.
    pub fn new(boundary: Rect, capacity: usize) -> Result<Self, ConfigError> {
        Self::validate(boundary, capacity)?;
        let mut tree = Self {
            boundary,
            capacity,
            nodes: Vec::new(),
        };
        tree.clear();
        Ok(tree)
    }

    /// Replace the world region and capacity, discarding all contents.
    ///
    /// On error the previous configuration and contents are left untouched.
    pub fn configure(&mut self, boundary: Rect, capacity: usize) -> Result<(), ConfigError> {
        Self::validate(boundary, capacity)?;
        self.boundary = boundary;
        self.capacity = capacity;
        self.clear();
        Ok(())
    }

    fn validate(boundary: Rect, capacity: usize) -> Result<(), ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !(boundary.width() > 0.0 && boundary.height() > 0.0) {
            return Err(ConfigError::EmptyWorld {
                width: boundary.width(),
                height: boundary.height(),
            });
        }
        Ok(())
    }

    /// The configured world region.
    pub fn boundary(&self) -> Rect {
        self.boundary
    }

    /// The configured per-node capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discard all entries and children, returning to a single empty leaf.
    ///
    /// Called once per tick before re-inserting the moved entities; there is
    /// no incremental update or merge path.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node {
            boundary: self.boundary,
            kind: Kind::Leaf(Vec::new()),
        });
    }

    /// Insert a handle with the entity's current bounds.
    ///
    /// Bounds that do not strictly overlap the world region are silently not
    /// tracked: the entity will never appear in any query result. Assumes
    /// finite coordinates (debug builds assert).
    pub fn insert(&mut self, bounds: Rect, item: P) {
        debug_assert!(bounds.is_finite(), "entity bounds must be finite");
        if !overlaps(&bounds, &self.boundary) {
            return;
        }
        self.insert_at(ROOT, 0, bounds, item);
    }

    fn insert_at(&mut self, idx: NodeIdx, depth: usize, bounds: Rect, item: P) {
        match &mut self.nodes[idx.get()].kind {
            Kind::Internal(children) => {
                let children = *children;
                self.fan_out(&children, depth, bounds, item);
            }
            Kind::Leaf(entries) => {
                entries.push((bounds, item));
                if entries.len() <= self.capacity || depth >= MAX_DEPTH {
                    return;
                }
                // Over capacity: split into quadrants and push every entry
                // down. Entries that still share a cell keep cascading until
                // they separate or the depth limit stops the recursion.
                let entries = core::mem::take(entries);
                let children = self.subdivide(idx);
                for (b, it) in entries {
                    self.fan_out(&children, depth, b, it);
                }
            }
        }
    }

    /// Route one entry into every child it strictly overlaps. Straddlers are
    /// deliberately duplicated rather than tie-broken into a single child.
    fn fan_out(&mut self, children: &[NodeIdx; 4], depth: usize, bounds: Rect, item: P) {
        for &child in children {
            if overlaps(&bounds, &self.nodes[child.get()].boundary) {
                self.insert_at(child, depth + 1, bounds, item);
            }
        }
    }

    fn subdivide(&mut self, idx: NodeIdx) -> [NodeIdx; 4] {
        let quads = quadrants(&self.nodes[idx.get()].boundary);
        let base = self.nodes.len();
        for q in quads {
            self.nodes.push(Node {
                boundary: q,
                kind: Kind::Leaf(Vec::new()),
            });
        }
        let children = [
            NodeIdx::new(base),
            NodeIdx::new(base + 1),
            NodeIdx::new(base + 2),
            NodeIdx::new(base + 3),
        ];
        self.nodes[idx.get()].kind = Kind::Internal(children);
        children
    }

    /// Handles stored at every leaf whose region strictly overlaps `region`.
    ///
    /// The result is a conservative superset of the entities whose bounds
    /// overlap `region`: it never misses a true overlap, but it may include
    /// extras, duplicates, and the querying entity itself. Each call returns
    /// a fresh iterator over a snapshot taken at call time.
    pub fn query(&self, region: Rect) -> impl Iterator<Item = P> + '_ {
        let mut out = Vec::new();
        self.query_into(region, &mut out);
        out.into_iter()
    }

    /// Like [`query`](Self::query), but appends into a caller-provided buffer
    /// so a hot loop can reuse its allocation. Does not clear `out`.
    pub fn query_into(&self, region: Rect, out: &mut Vec<P>) {
        self.collect(ROOT, &region, out);
    }

    fn collect(&self, idx: NodeIdx, region: &Rect, out: &mut Vec<P>) {
        let node = &self.nodes[idx.get()];
        // Subtrees that don't overlap the query are pruned here; this is
        // where the sub-linear behavior comes from.
        if !overlaps(&node.boundary, region) {
            return;
        }
        match &node.kind {
            Kind::Leaf(entries) => out.extend(entries.iter().map(|&(_, p)| p)),
            Kind::Internal(children) => {
                for &child in children {
                    self.collect(child, region, out);
                }
            }
        }
    }
}

impl<P: Copy + Debug + Bounded> Partition<P> {
    /// Insert an entity that carries its own bounding region.
    pub fn insert_bounded(&mut self, entity: P) {
        self.insert(entity.bounds(), entity);
    }
}

impl<P: Copy + Debug> Debug for Partition<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let nodes = self.nodes.len();
        let mut leaves = 0_usize;
        let mut stored = 0_usize;
        for n in &self.nodes {
            if let Kind::Leaf(entries) = &n.kind {
                leaves += 1;
                stored += entries.len();
            }
        }
        f.debug_struct("Partition")
            .field("boundary", &self.boundary)
            .field("capacity", &self.capacity)
            .field("nodes", &nodes)
            .field("leaves", &leaves)
            .field("stored_refs", &stored)
            .finish_non_exhaustive()
    }
}
