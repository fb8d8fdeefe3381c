//! Fault/hit counters and statistics snapshots.

use serde::Serialize;
use vmsim_common::{FrameId, PageId, PolicyKind};

/// Monotonic access counters for one simulation run.
///
/// Both counters only grow between resets and are always reset
/// together.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    /// Total accesses since the last reset.
    pub total_accesses: u64,
    /// Accesses that missed, i.e. page faults.
    pub total_faults: u64,
}

impl Counters {
    /// Records one access.
    pub fn record(&mut self, hit: bool) {
        self.total_accesses += 1;
        if !hit {
            self.total_faults += 1;
        }
    }

    /// Fraction of accesses that faulted; 0 before any access.
    pub fn fault_rate(&self) -> f64 {
        if self.total_accesses == 0 {
            0.0
        } else {
            self.total_faults as f64 / self.total_accesses as f64
        }
    }

    /// Fraction of accesses that hit.
    pub fn hit_rate(&self) -> f64 {
        1.0 - self.fault_rate()
    }

    /// Zeroes both counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Read-only view of engine state for the presentation layer.
///
/// Derived on demand from the engine's counters and occupancy; holds
/// no state of its own and is safe to request at any time after
/// `configure`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// Active replacement policy.
    pub policy: PolicyKind,
    /// Total accesses since the last reset.
    pub total_accesses: u64,
    /// Page faults since the last reset.
    pub total_faults: u64,
    /// `total_faults / total_accesses`, 0 before any access.
    pub fault_rate: f64,
    /// `1 - fault_rate`.
    pub hit_rate: f64,
    /// Resident pages in load order.
    pub resident: Vec<PageId>,
    /// Per-frame occupancy, indexed by frame id.
    pub frames: Vec<Option<PageId>>,
    /// Per-page frame assignment, indexed by page id.
    pub page_table: Vec<Option<FrameId>>,
}
