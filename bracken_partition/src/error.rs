// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! This is the partition's only error channel. Data-dependent conditions are
//! never errors: an insert whose bounds miss the world region is a documented
//! silent drop, and a maximum-depth leaf over capacity is legal overcrowding.

use thiserror::Error;

/// Rejected at [`Partition::new`](crate::Partition::new) or
/// [`Partition::configure`](crate::Partition::configure) time.
///
/// On rejection the partition keeps its previous configuration; it never
/// enters a partially-updated state.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Node capacity must be at least 1.
    #[error("node capacity must be at least 1")]
    ZeroCapacity,
    /// The world region must have positive width and height.
    #[error("world region must have positive area, got {width} x {height}")]
    EmptyWorld {
        /// Width of the rejected region.
        width: f64,
        /// Height of the rejected region.
        height: f64,
    },
}
