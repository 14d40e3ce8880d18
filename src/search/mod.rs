// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The minimal-hitting-set search engines.
//!
//! Two engines share the bookkeeping substrate in [`shd`]:
//!
//! - [`Mmcs`] picks the uncovered edge with the fewest candidate vertices
//!   and shrinks an explicit candidate set as it descends.
//! - [`Rs`] always works on the first uncovered edge and prunes with the
//!   critical-edge-index rule instead of a candidate set.
//!
//! Both run a depth-first search over partial hitting sets, restoring the
//! bookkeeping exactly on backtrack, and both fork independent subtree
//! tasks with deep-copied state onto a worker pool (see [`tasks`]). With an
//! unlimited cutoff they emit the same family of hitting sets; only the
//! traversal order and pruning work differ.
//!
//! # Example
//!
//! ```
//! use minhit::{Hypergraph, MhsAlgorithm, Mmcs};
//!
//! let h: Hypergraph = "0 1\n1 2\n0 2\n".parse().unwrap();
//! let transversals = Mmcs::new(1, 0).transversal(&h).unwrap();
//! assert_eq!(transversals.num_edges(), 3); // {0,1}, {0,2}, {1,2}
//! ```

pub mod counters;
pub mod mmcs;
pub mod queue;
pub mod rs;
pub mod shd;
pub mod tasks;

pub use mmcs::Mmcs;
pub use rs::Rs;

use crate::error::Result;
use crate::hypergraph::Hypergraph;
use counters::SearchCounters;
use queue::HitQueue;
use tasks::TaskBudget;

/// A minimal-hitting-set enumeration algorithm.
///
/// `transversal` returns a hypergraph over the same vertex set with one
/// edge per minimal hitting set, in unspecified order. The `Err` arm only
/// carries resource failures (worker-pool construction); enumeration
/// itself cannot fail on a legal hypergraph.
pub trait MhsAlgorithm {
    fn transversal(&self, h: &Hypergraph) -> Result<Hypergraph>;
}

/// The run-wide state every search frame sees: the two read-only views of
/// the hypergraph and the shared sink, counters, and fork budget.
#[derive(Clone, Copy)]
pub(crate) struct SearchEnv<'a> {
    pub h: &'a Hypergraph,
    pub t: &'a Hypergraph,
    pub counters: &'a SearchCounters,
    pub budget: &'a TaskBudget,
    pub queue: &'a HitQueue,
}
