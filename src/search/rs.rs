// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The RS engine.
//!
//! RS branches on the first uncovered edge and keeps no candidate set.
//! Minimality is enforced by the critical-edge rule instead: after
//! tentatively adding v, if any vertex of the hitting set has its first
//! critical edge at or after the search edge, the same hitting set is
//! reachable from an earlier branch of the enumeration, so the branch is
//! abandoned on the spot. Vertices that failed the violation test are
//! carried down the subtree in a `violating` set so they are tested at
//! most once per branch; the parent's set is never mutated.

use crate::bits::IndexSet;
use crate::error::Result;
use crate::hypergraph::Hypergraph;
use crate::search::counters::{Counter, SearchCounters};
use crate::search::queue::HitQueue;
use crate::search::tasks::TaskBudget;
use crate::search::{shd, MhsAlgorithm, SearchEnv};
use rayon::Scope;
use tracing::info;

/// Parallel RS over a worker pool.
pub struct Rs {
    num_threads: usize,
    cutoff_size: usize,
}

/// One frame's mutable state; the threaded `violating` set travels
/// separately because children extend it without touching the parent's.
#[derive(Clone)]
struct SearchState {
    s: IndexSet,
    crit: Hypergraph,
    uncov: IndexSet,
}

impl Rs {
    /// Create an engine with `num_threads` workers and a maximum hitting
    /// set size of `cutoff_size` (0 for unlimited).
    pub fn new(num_threads: usize, cutoff_size: usize) -> Self {
        assert!(num_threads >= 1, "num_threads must be at least 1");
        Self {
            num_threads,
            cutoff_size,
        }
    }

    /// Single-threaded engine with a maximum hitting set size of
    /// `cutoff_size` (0 for unlimited).
    pub fn with_cutoff(cutoff_size: usize) -> Self {
        Self::new(1, cutoff_size)
    }

    /// Does any vertex of `s` have its first critical edge at or after
    /// `search_edge`?
    fn any_vertex_critical_at_or_after(
        search_edge: usize,
        s: &IndexSet,
        crit: &Hypergraph,
    ) -> bool {
        s.iter()
            .any(|w| crit[w].first().map_or(true, |first| first >= search_edge))
    }

    fn extend_or_confirm_set<'s>(
        &'s self,
        env: SearchEnv<'s>,
        scope: &Scope<'s>,
        state: &mut SearchState,
        violating: &IndexSet,
    ) {
        env.counters.increment(Counter::Iterations);

        assert!(state.uncov.any(), "no edge left to branch on");
        assert!(
            self.cutoff_size == 0 || state.s.count() < self.cutoff_size,
            "frame entered above the cutoff"
        );

        let search_edge = state.uncov.first().expect("uncov is nonempty");
        let e = &env.h[search_edge];

        // Partition the edge: drop known violators, test the rest, and
        // collect the survivors for branching in descending index order.
        let mut new_violating = IndexSet::new(env.h.num_verts());
        let mut branch_verts = Vec::new();
        for v in e.iter() {
            if violating.contains(v) {
                continue;
            }
            if shd::vertex_would_violate(&state.crit, &state.uncov, env.t, &state.s, v) {
                env.counters.increment(Counter::Violators);
                new_violating.insert(v);
            } else {
                branch_verts.push(v);
            }
        }

        let mut child_violating = violating.clone();
        child_violating.union_with(&new_violating);

        for &v in branch_verts.iter().rev() {
            env.counters.increment(Counter::UpdateLoops);

            let critmark =
                shd::update_crit_and_uncov(&mut state.crit, &mut state.uncov, env.t, &state.s, v);

            if Self::any_vertex_critical_at_or_after(search_edge, &state.s, &state.crit) {
                env.counters.increment(Counter::CriticalFails);
                shd::restore_crit_and_uncov(
                    &mut state.crit,
                    &mut state.uncov,
                    &state.s,
                    &critmark,
                    v,
                );
                continue;
            }

            state.s.insert(v);

            if state.uncov.none() {
                env.queue.enqueue(state.s.clone());
            } else if self.cutoff_size == 0 || state.s.count() < self.cutoff_size {
                if env.budget.try_claim(env.h.num_edges()) {
                    let mut task_state = state.clone();
                    let task_violating = child_violating.clone();
                    scope.spawn(move |scope| {
                        env.budget.task_started();
                        self.extend_or_confirm_set(env, scope, &mut task_state, &task_violating);
                    });
                } else {
                    self.extend_or_confirm_set(env, scope, state, &child_violating);
                }
            }

            state.s.remove(v);
            shd::restore_crit_and_uncov(&mut state.crit, &mut state.uncov, &state.s, &critmark, v);
        }
    }
}

impl MhsAlgorithm for Rs {
    fn transversal(&self, h: &Hypergraph) -> Result<Hypergraph> {
        let mut result = Hypergraph::new(h.num_verts());

        if h.num_edges() == 0 {
            // Nothing to hit: the empty set is the unique minimal transversal.
            result.add_edge(IndexSet::new(h.num_verts()));
            return Ok(result);
        }

        let t = h.transpose();
        let counters = SearchCounters::new();
        let budget = TaskBudget::new();
        let queue = HitQueue::new();

        let mut state = SearchState {
            s: IndexSet::new(h.num_verts()),
            crit: Hypergraph::with_edge_count(h.num_edges(), h.num_verts()),
            uncov: IndexSet::full(h.num_edges()),
        };
        let violating = IndexSet::new(h.num_verts());

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .build()?;
        let env = SearchEnv {
            h,
            t: &t,
            counters: &counters,
            budget: &budget,
            queue: &queue,
        };
        pool.scope(|scope| self.extend_or_confirm_set(env, scope, &mut state, &violating));

        while let Some(hitting_set) = queue.try_dequeue() {
            result.add_edge(hitting_set);
        }

        info!(
            iterations = counters.get(Counter::Iterations),
            violators = counters.get(Counter::Violators),
            critical_fails = counters.get(Counter::CriticalFails),
            update_loops = counters.get(Counter::UpdateLoops),
            "RS search complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn run(h: &Hypergraph, num_threads: usize, cutoff_size: usize) -> BTreeSet<Vec<usize>> {
        let result = Rs::new(num_threads, cutoff_size).transversal(h).unwrap();
        result
            .edges()
            .iter()
            .map(|edge| edge.iter().collect())
            .collect()
    }

    #[test]
    fn test_triangle() {
        let h: Hypergraph = "0 1\n1 2\n0 2\n".parse().unwrap();
        let expected: BTreeSet<Vec<usize>> =
            [vec![0, 1], vec![0, 2], vec![1, 2]].into_iter().collect();
        assert_eq!(run(&h, 1, 0), expected);
    }

    #[test]
    fn test_no_edges_yields_empty_set() {
        let h = Hypergraph::new(3);
        let result = Rs::with_cutoff(0).transversal(&h).unwrap();
        assert_eq!(result.num_edges(), 1);
        assert!(result.edges()[0].none());
    }

    #[test]
    fn test_with_cutoff_runs_single_threaded() {
        let h: Hypergraph = "0 1\n2 3\n".parse().unwrap();
        let result = Rs::with_cutoff(1).transversal(&h).unwrap();
        assert_eq!(result.num_edges(), 0);
    }

    #[test]
    fn test_chain() {
        let h: Hypergraph = "0 1\n1 2\n2 3\n".parse().unwrap();
        let expected: BTreeSet<Vec<usize>> =
            [vec![0, 2], vec![1, 2], vec![1, 3]].into_iter().collect();
        assert_eq!(run(&h, 1, 0), expected);
    }

    #[test]
    fn test_no_duplicates_across_threads() {
        let h: Hypergraph = "0 1 2\n2 3\n3 4 5\n0 5\n".parse().unwrap();
        let single = run(&h, 1, 0);
        for num_threads in [2, 4] {
            let result = Rs::new(num_threads, 0).transversal(&h).unwrap();
            assert_eq!(result.num_edges(), single.len());
        }
    }
}
