//! Most-recently-used replacement.

use super::Replacer;
use std::collections::HashMap;
use vmsim_common::{PageId, PolicyKind, Result, SimError};

/// MRU replacer: victim is the resident page with the newest access.
///
/// Same tick bookkeeping as LRU with the opposite selection. Useful
/// for cyclic scans where the most recent page is the least likely to
/// be needed again soon. Ties break toward the lowest page id.
#[derive(Debug, Default)]
pub struct MruReplacer {
    last_access: HashMap<PageId, u64>,
}

impl MruReplacer {
    /// Creates an empty MRU replacer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Replacer for MruReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Mru
    }

    fn record_access(&mut self, page: PageId, _hit: bool, tick: u64) {
        self.last_access.insert(page, tick);
    }

    fn record_load(&mut self, _page: PageId) {}

    fn select_victim(&mut self, resident: &[PageId], _future: &[PageId]) -> Result<PageId> {
        let mut victim: Option<(u64, PageId)> = None;
        for &page in resident {
            let tick = self.last_access.get(&page).copied().unwrap_or(0);
            let better = match victim {
                None => true,
                Some((best_tick, best_page)) => {
                    tick > best_tick || (tick == best_tick && page < best_page)
                }
            };
            if better {
                victim = Some((tick, page));
            }
        }
        let (_, victim) = victim.ok_or(SimError::NoVictimAvailable)?;
        self.last_access.remove(&victim);
        Ok(victim)
    }

    fn reset(&mut self) {
        self.last_access.clear();
    }
}
