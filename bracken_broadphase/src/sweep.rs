// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-tick sweep: rebuild the partition, then surface colliding pairs.

use alloc::vec::Vec;

use bracken_partition::{Bounded, ConfigError, Partition};
use kurbo::Rect;

use crate::types::{ExactOverlap, Pair};

/// Broad-phase driver owning a [`Partition`] keyed by entity slot index.
///
/// Entities live in the caller's slice; the partition only ever sees their
/// slot indices and bounds, so the caller is free to mutate entities between
/// ticks. Each call to [`pairs`](Self::pairs) runs one full tick of the
/// protocol: clear, insert every entity, then query around each one.
///
/// The partition's raw query results contain duplicates (straddling entities
/// are stored in several leaves) and the querying entity itself; this layer
/// de-duplicates by slot, drops self-matches, and reports each unordered pair
/// at most once.
#[derive(Debug)]
pub struct BroadPhase {
    partition: Partition<usize>,
    scratch: Vec<usize>,
}

impl BroadPhase {
    /// Create a broad phase over `world` with the given per-node capacity.
    pub fn new(world: Rect, capacity: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            partition: Partition::new(world, capacity)?,
            scratch: Vec::new(),
        })
    }

    /// Replace the world region and capacity, discarding indexed state.
    ///
    /// On error the previous configuration is kept, like
    /// [`Partition::configure`].
    pub fn configure(&mut self, world: Rect, capacity: usize) -> Result<(), ConfigError> {
        self.partition.configure(world, capacity)
    }

    /// The configured world region.
    pub fn world(&self) -> Rect {
        self.partition.boundary()
    }

    /// Rebuild the partition from the entities' current bounds.
    ///
    /// This is the tick's write phase; run it after moving entities and
    /// before any candidate query. Entities whose bounds lie entirely outside
    /// the world region are not tracked and never appear as candidates.
    pub fn rebuild<E: Bounded>(&mut self, entities: &[E]) {
        self.partition.clear();
        for (slot, entity) in entities.iter().enumerate() {
            self.partition.insert(entity.bounds(), slot);
        }
    }

    /// Candidate slots for `region`, sorted and de-duplicated.
    ///
    /// Valid for the slice most recently passed to [`rebuild`](Self::rebuild).
    /// Still a conservative superset: run the exact test on every candidate.
    pub fn candidates_into(&self, region: Rect, out: &mut Vec<usize>) {
        out.clear();
        self.partition.query_into(region, out);
        out.sort_unstable();
        out.dedup();
    }

    /// Run one full tick and collect every truly colliding pair.
    ///
    /// Rebuilds from `entities`, queries each entity's bounds, and keeps the
    /// pairs `exact` confirms. Pairs come back normalized (`a < b`), each at
    /// most once, in ascending order of the first slot.
    pub fn pairs<E, F>(&mut self, entities: &[E], mut exact: F, out: &mut Vec<Pair>)
    where
        E: Bounded,
        F: FnMut(&E, &E) -> bool,
    {
        self.rebuild(entities);
        out.clear();
        let mut found = core::mem::take(&mut self.scratch);
        for (slot, entity) in entities.iter().enumerate() {
            found.clear();
            self.partition.query_into(entity.bounds(), &mut found);
            found.sort_unstable();
            found.dedup();
            for &other in &found {
                // Symmetric bounds overlap means the pair also shows up when
                // `other` is queried; visiting only the upper half reports it
                // once and drops self-matches for free.
                if other <= slot {
                    continue;
                }
                if exact(entity, &entities[other]) {
                    out.push((slot, other));
                }
            }
        }
        self.scratch = found;
    }

    /// [`pairs`](Self::pairs) using the entity type's own exact test.
    pub fn pairs_exact<E>(&mut self, entities: &[E], out: &mut Vec<Pair>)
    where
        E: Bounded + ExactOverlap,
    {
        self.pairs(entities, |a, b| a.overlaps(b), out);
    }
}
