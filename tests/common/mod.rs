// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use minhit::{Hypergraph, IndexSet, MhsAlgorithm, Mmcs, Rs};
use std::collections::BTreeSet;

/// Build a hypergraph over `num_verts` vertices from edge slices.
pub fn hypergraph(num_verts: usize, edges: &[&[usize]]) -> Hypergraph {
    let mut h = Hypergraph::new(num_verts);
    for edge in edges {
        h.add_edge(IndexSet::from_indices(num_verts, edge));
    }
    h
}

/// Both engines, by name, at the given parallelism and cutoff.
pub fn engines(
    num_threads: usize,
    cutoff_size: usize,
) -> Vec<(&'static str, Box<dyn MhsAlgorithm>)> {
    vec![
        ("MMCS", Box::new(Mmcs::new(num_threads, cutoff_size))),
        ("RS", Box::new(Rs::new(num_threads, cutoff_size))),
    ]
}

/// The edges of `h` as a set of sorted vertex lists.
pub fn edge_family(h: &Hypergraph) -> BTreeSet<Vec<usize>> {
    h.edges().iter().map(|edge| edge.iter().collect()).collect()
}

/// All minimal hitting sets of `h` by exhaustive subset enumeration.
///
/// Only usable for small vertex counts; the tests stay well below the
/// limit.
pub fn brute_force_transversals(h: &Hypergraph) -> BTreeSet<Vec<usize>> {
    let n = h.num_verts();
    assert!(n <= 16, "brute force is exponential in num_verts");

    let hits = |mask: u32| (0..h.num_edges()).all(|i| h[i].iter().any(|v| mask & (1 << v) != 0));

    let mut family = BTreeSet::new();
    for mask in 0u32..(1 << n) {
        if !hits(mask) {
            continue;
        }
        let minimal = (0..n)
            .filter(|v| mask & (1 << v) != 0)
            .all(|v| !hits(mask & !(1 << v)));
        if minimal {
            family.insert((0..n).filter(|v| mask & (1 << v) != 0).collect());
        }
    }
    family
}
