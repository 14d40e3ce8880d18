// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of the minimal hitting sets of a hypergraph.
//!
//! Given a hypergraph over vertices `0..n`, this crate enumerates every
//! minimal set of vertices meeting all of its edges (the minimal
//! transversals), the combinatorial core of model-based diagnosis and
//! monotone dualization.
//!
//! # Architecture
//!
//! The implementation separates immutable views from per-task search state:
//!
//! ## Read-only views
//!
//! Built once per run and shared across worker tasks without
//! synchronisation:
//! - the [`Hypergraph`] itself, edges indexed by number, and
//! - its transpose, giving for each vertex the edges containing it.
//!
//! ## Search state
//!
//! Each depth-first frame owns the partial hitting set and the two
//! bookkeeping structures of the [`search::shd`] substrate (per-vertex
//! critical edges and the uncovered-edge set), mutated on descent and
//! restored exactly on backtrack. Subtrees are opportunistically forked
//! onto a worker pool as independent tasks with deep-copied state, so no
//! two tasks ever share mutable data; confirmed hitting sets flow into a
//! shared queue that is drained after the pool quiesces.
//!
//! # Engines
//!
//! Two engines share the substrate and emit identical families of hitting
//! sets: [`Mmcs`], which branches on the most constrained uncovered edge
//! and maintains an explicit candidate set, and [`Rs`], which branches on
//! the first uncovered edge and prunes with the critical-edge-index rule.
//!
//! # Example
//!
//! ```
//! use minhit::{Hypergraph, MhsAlgorithm, Rs};
//!
//! let h: Hypergraph = "0 1\n2 3\n".parse().unwrap();
//! let transversals = Rs::new(2, 0).transversal(&h).unwrap();
//! assert_eq!(transversals.num_edges(), 4); // one per pair across the edges
//! ```

pub mod bits;
pub mod error;
pub mod hypergraph;
pub mod search;

// Re-export commonly used types
pub use bits::IndexSet;
pub use error::{Error, Result};
pub use hypergraph::Hypergraph;
pub use search::{MhsAlgorithm, Mmcs, Rs};
