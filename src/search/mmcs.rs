// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The MMCS engine.
//!
//! MMCS maintains, alongside the shared bookkeeping, a shrinking candidate
//! set `CAND` of vertices still eligible for this subtree. Each frame picks
//! the uncovered edge with the fewest candidate vertices, removes that
//! edge's vertices from `CAND`, and branches on them in descending index
//! order. A branch on v commits to "v is the largest-index vertex of the
//! chosen edge in the hitting set", so every minimal hitting set is reached
//! by exactly one branch and no duplicates are ever emitted.

use crate::bits::IndexSet;
use crate::error::Result;
use crate::hypergraph::Hypergraph;
use crate::search::counters::{Counter, SearchCounters};
use crate::search::queue::HitQueue;
use crate::search::tasks::TaskBudget;
use crate::search::{shd, MhsAlgorithm, SearchEnv};
use rayon::Scope;
use tracing::info;

/// Parallel MMCS over a worker pool.
pub struct Mmcs {
    num_threads: usize,
    cutoff_size: usize,
}

/// One frame's mutable state. Forked tasks get a deep copy; inline
/// recursion reuses the frame's copy, which backtracking restores.
#[derive(Clone)]
struct SearchState {
    s: IndexSet,
    cand: IndexSet,
    crit: Hypergraph,
    uncov: IndexSet,
}

impl Mmcs {
    /// Create an engine with `num_threads` workers and a maximum hitting
    /// set size of `cutoff_size` (0 for unlimited).
    pub fn new(num_threads: usize, cutoff_size: usize) -> Self {
        assert!(num_threads >= 1, "num_threads must be at least 1");
        Self {
            num_threads,
            cutoff_size,
        }
    }

    fn extend_or_confirm_set<'s>(
        &'s self,
        env: SearchEnv<'s>,
        scope: &Scope<'s>,
        state: &mut SearchState,
    ) {
        env.counters.increment(Counter::Iterations);

        assert!(state.uncov.any(), "no edge left to branch on");
        assert!(state.cand.any(), "no candidate vertex left");
        assert!(
            self.cutoff_size == 0 || state.s.count() < self.cutoff_size,
            "frame entered above the cutoff"
        );

        // The uncovered edge with the fewest candidate vertices; ties go
        // to the smallest edge index.
        let mut search_edge = None;
        let mut best = usize::MAX;
        for i in state.uncov.iter() {
            let candidates = env.h[i].intersection_count(&state.cand);
            if candidates < best {
                best = candidates;
                search_edge = Some(i);
            }
        }
        let e = &env.h[search_edge.expect("uncov is nonempty")];

        // Branch on the candidate vertices of e; all of e leaves CAND for
        // the duration of this subtree.
        let mut c = state.cand.clone();
        c.intersect_with(e);
        state.cand.difference_with(e);

        let branch_verts: Vec<usize> = c.iter().collect();
        let mut violators = IndexSet::new(env.h.num_verts());

        for &v in branch_verts.iter().rev() {
            env.counters.increment(Counter::UpdateLoops);

            if shd::vertex_would_violate(&state.crit, &state.uncov, env.t, &state.s, v) {
                env.counters.increment(Counter::Violators);
                violators.insert(v);
                continue;
            }

            let critmark =
                shd::update_crit_and_uncov(&mut state.crit, &mut state.uncov, env.t, &state.s, v);
            state.s.insert(v);

            if state.uncov.none()
                && (self.cutoff_size == 0 || state.s.count() <= self.cutoff_size)
            {
                env.queue.enqueue(state.s.clone());
            } else if state.cand.any()
                && (self.cutoff_size == 0 || state.s.count() < self.cutoff_size)
            {
                if env.budget.try_claim(env.h.num_edges()) {
                    let mut task_state = state.clone();
                    scope.spawn(move |scope| {
                        env.budget.task_started();
                        self.extend_or_confirm_set(env, scope, &mut task_state);
                    });
                } else {
                    self.extend_or_confirm_set(env, scope, state);
                }
            }

            state.s.remove(v);
            state.cand.insert(v);
            shd::restore_crit_and_uncov(&mut state.crit, &mut state.uncov, &state.s, &critmark, v);
        }

        // Violators only bind under the edge chosen here; give them back
        // before the caller branches elsewhere.
        state.cand.union_with(&violators);
    }
}

impl MhsAlgorithm for Mmcs {
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
            cand: IndexSet::full(h.num_verts()),
            crit: Hypergraph::with_edge_count(h.num_edges(), h.num_verts()),
            uncov: IndexSet::full(h.num_edges()),
        };

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
        pool.scope(|scope| self.extend_or_confirm_set(env, scope, &mut state));

        while let Some(hitting_set) = queue.try_dequeue() {
            result.add_edge(hitting_set);
        }

        info!(
            iterations = counters.get(Counter::Iterations),
            violators = counters.get(Counter::Violators),
            update_loops = counters.get(Counter::UpdateLoops),
            "MMCS search complete"
        );
        Ok(result)
    }
}
