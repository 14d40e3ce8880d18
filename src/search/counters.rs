// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search counters.
//!
//! Counters are shared by every task of a run and incremented with relaxed
//! ordering; they are advisory, so their exact final values may vary with
//! scheduling. Each engine logs its counters once at the end of a run.

use std::sync::atomic::{AtomicU64, Ordering};
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone)]
#[repr(u8)]
pub enum Counter {
    /// Search frames entered.
    Iterations,
    /// Vertices rejected by the violation test.
    Violators,
    /// Vertices taken through the update loop.
    UpdateLoops,
    /// Branches abandoned by the critical-edge rule (RS only).
    CriticalFails,
}

#[derive(Debug, Default)]
pub struct SearchCounters {
    stats: [AtomicU64; Counter::COUNT],
}

impl SearchCounters {
    pub fn new() -> Self {
        SearchCounters::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&self, counter: Counter) {
        self.stats[counter as usize].fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize].load(Ordering::Relaxed)
    }
}
