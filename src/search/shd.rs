// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared bookkeeping for the hitting-set search engines.
//!
//! Both engines maintain, for a candidate hitting set `S`:
//!
//! - `uncov`, the set of edges no vertex of `S` hits, and
//! - `crit`, a table with one row per vertex; row v holds the edges for
//!   which v is the only member of `S` hitting them (v's critical edges).
//!
//! A vertex of `S` with no critical edges is redundant, so `S` is not
//! minimal. The three primitives here test that condition for a prospective
//! vertex, apply the transition `S -> S + v` to the bookkeeping, and undo it
//! exactly on backtrack. `update` and `restore` form an exact inverse pair:
//! after the pair runs, `crit` and `uncov` are bit-identical to their prior
//! values.
//!
//! Rows of `crit` for vertices in `S` are pairwise disjoint and together
//! cover exactly the complement of `uncov`; rows for vertices outside `S`
//! are empty. Callers violating the stated preconditions are programmer
//! errors and abort.

use crate::bits::IndexSet;
use crate::hypergraph::Hypergraph;
use rustc_hash::FxHashMap;

/// Overlay recording, per vertex of `S`, the critical edges it lost when a
/// new vertex joined. Keys absent from the map restore nothing.
pub type CritMark = FxHashMap<usize, IndexSet>;

/// Would adding `v` to `S` leave some vertex of `S` with no critical edge?
///
/// `test_edges` are the edges v hits that are already covered; any vertex
/// of `S` whose critical edges all lie in there would become redundant.
/// Scans `S` in ascending order and short-circuits on the first offender.
///
/// Preconditions: `v` is not in `S` and `crit[v]` is empty.
pub fn vertex_would_violate(
    crit: &Hypergraph,
    uncov: &IndexSet,
    t: &Hypergraph,
    s: &IndexSet,
    v: usize,
) -> bool {
    assert!(!s.contains(v), "vertex {} is already in the hitting set", v);
    assert!(crit[v].none(), "vertex {} outside S has critical edges", v);

    let mut test_edges = t[v].clone();
    test_edges.difference_with(uncov);

    s.iter().any(|w| crit[w].is_subset_of(&test_edges))
}

/// Update `crit` and `uncov` for the transition `S -> S + v`.
///
/// `v` becomes critical for the edges it hits that were uncovered; every
/// other vertex of `S` loses criticality for the edges `v` hits. The
/// returned overlay records exactly what each vertex lost, so
/// [`restore_crit_and_uncov`] can undo the transition.
///
/// Preconditions: `v` is not in `S` and `crit[v]` is empty.
pub fn update_crit_and_uncov(
    crit: &mut Hypergraph,
    uncov: &mut IndexSet,
    t: &Hypergraph,
    s: &IndexSet,
    v: usize,
) -> CritMark {
    assert!(!s.contains(v), "vertex {} is already in the hitting set", v);
    assert!(crit[v].none(), "vertex {} outside S has critical edges", v);

    let v_edges = &t[v];

    let mut newly_critical = v_edges.clone();
    newly_critical.intersect_with(uncov);
    crit[v] = newly_critical;

    uncov.difference_with(v_edges);

    let mut critmark = CritMark::default();
    for w in s.iter() {
        let mut lost = crit[w].clone();
        lost.intersect_with(v_edges);
        crit[w].difference_with(v_edges);
        critmark.insert(w, lost);
    }
    critmark
}

/// Undo [`update_crit_and_uncov`] after `v` has been removed from `S`.
///
/// Edges `v` was critical for become uncovered again, and each vertex of
/// `S` regains the critical edges recorded for it in `critmark`. Vertices
/// without a `critmark` entry are left alone; engines legitimately reach
/// here with partial overlays on branches they abandoned early.
///
/// Preconditions: `v` is not in `S` and no edge of `crit[v]` is uncovered.
pub fn restore_crit_and_uncov(
    crit: &mut Hypergraph,
    uncov: &mut IndexSet,
    s: &IndexSet,
    critmark: &CritMark,
    v: usize,
) {
    assert!(!s.contains(v), "vertex {} is still in the hitting set", v);
    assert!(
        !uncov.intersects(&crit[v]),
        "vertex {} is critical for an uncovered edge",
        v
    );

    uncov.union_with(&crit[v]);
    crit[v].clear_all();

    for w in s.iter() {
        if let Some(lost) = critmark.get(&w) {
            crit[w].union_with(lost);
        }
    }
}
