// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multi-producer queue of completed hitting sets.
//!
//! Every search task enqueues the hitting sets it confirms; the queue is
//! drained single-threaded after the worker pool has quiesced. Emission
//! order is unspecified.

use crate::bits::IndexSet;
use std::collections::VecDeque;
use std::sync::Mutex;

/// The sink for confirmed hitting sets.
#[derive(Debug, Default)]
pub struct HitQueue {
    sets: Mutex<VecDeque<IndexSet>>,
}

impl HitQueue {
    pub fn new() -> Self {
        HitQueue::default()
    }

    /// Enqueue a snapshot of a hitting set. Safe from any task.
    pub fn enqueue(&self, set: IndexSet) {
        self.sets.lock().unwrap().push_back(set);
    }

    /// Dequeue one hitting set, if any remain.
    ///
    /// Intended for draining after all producers have finished.
    pub fn try_dequeue(&self) -> Option<IndexSet> {
        self.sets.lock().unwrap().pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_dequeue() {
        let queue = HitQueue::new();
        queue.enqueue(IndexSet::from_indices(4, &[0]));
        queue.enqueue(IndexSet::from_indices(4, &[1, 2]));

        assert_eq!(queue.try_dequeue(), Some(IndexSet::from_indices(4, &[0])));
        assert_eq!(
            queue.try_dequeue(),
            Some(IndexSet::from_indices(4, &[1, 2]))
        );
        assert_eq!(queue.try_dequeue(), None);
    }

    #[test]
    fn test_concurrent_producers() {
        let queue = HitQueue::new();
        std::thread::scope(|scope| {
            for producer in 0..4 {
                let queue = &queue;
                scope.spawn(move || {
                    for i in 0..25 {
                        queue.enqueue(IndexSet::from_indices(128, &[producer, 100 + i]));
                    }
                });
            }
        });

        let mut drained = 0;
        while queue.try_dequeue().is_some() {
            drained += 1;
        }
        assert_eq!(drained, 100);
    }
}
