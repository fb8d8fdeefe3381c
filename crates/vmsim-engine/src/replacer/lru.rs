//! Least-recently-used replacement.

use super::Replacer;
use std::collections::HashMap;
use vmsim_common::{PageId, PolicyKind, Result, SimError};

/// LRU replacer: victim is the resident page with the oldest access.
///
/// Every access, hit or fault, stamps the page with the engine's
/// monotonic logical clock. Ties (identical ticks) break toward the
/// lowest page id so victim selection is deterministic.
#[derive(Debug, Default)]
pub struct LruReplacer {
    last_access: HashMap<PageId, u64>,
}

impl LruReplacer {
    /// Creates an empty LRU replacer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Replacer for LruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn record_access(&mut self, page: PageId, _hit: bool, tick: u64) {
        self.last_access.insert(page, tick);
    }

    fn record_load(&mut self, _page: PageId) {
        // The access stamp was already recorded for this fault.
    }

    fn select_victim(&mut self, resident: &[PageId], _future: &[PageId]) -> Result<PageId> {
        let victim = resident
            .iter()
            .copied()
            .min_by_key(|page| (self.last_access.get(page).copied().unwrap_or(0), page.0))
            .ok_or(SimError::NoVictimAvailable)?;
        self.last_access.remove(&victim);
        Ok(victim)
    }

    fn reset(&mut self) {
        self.last_access.clear();
    }
}
