//! Belady's optimal replacement.

use super::Replacer;
use vmsim_common::{PageId, PolicyKind, Result, SimError};

/// Optimal replacer: victim is the resident page whose next use lies
/// farthest in the future.
///
/// Requires the remaining reference stream per decision; it is
/// supplied by the caller and never stored. Pages that never recur
/// beat any page that does. With an empty future (a standalone
/// access outside a sequence) every page counts as never recurring
/// and the lowest page id is evicted. Ties break toward the lowest
/// page id.
#[derive(Debug, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    /// Creates an optimal replacer.
    pub fn new() -> Self {
        Self
    }

    /// Distance to the next use of `page`, `usize::MAX` if it never recurs.
    fn next_use(page: PageId, future: &[PageId]) -> usize {
        future
            .iter()
            .position(|&p| p == page)
            .unwrap_or(usize::MAX)
    }
}

impl Replacer for OptimalReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn record_access(&mut self, _page: PageId, _hit: bool, _tick: u64) {
        // Decisions are a pure function of the resident set and future.
    }

    fn record_load(&mut self, _page: PageId) {}

    fn select_victim(&mut self, resident: &[PageId], future: &[PageId]) -> Result<PageId> {
        let mut victim: Option<(usize, PageId)> = None;
        for &page in resident {
            let distance = Self::next_use(page, future);
            let better = match victim {
                None => true,
                Some((best_distance, best_page)) => {
                    distance > best_distance
                        || (distance == best_distance && page < best_page)
                }
            };
            if better {
                victim = Some((distance, page));
            }
        }
        victim
            .map(|(_, page)| page)
            .ok_or(SimError::NoVictimAvailable)
    }

    fn reset(&mut self) {}
}
