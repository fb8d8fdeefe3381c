//! First-in first-out replacement.

use super::Replacer;
use std::collections::VecDeque;
use vmsim_common::{PageId, PolicyKind, Result, SimError};

/// FIFO replacer: victim is the page loaded longest ago.
///
/// True FIFO: hits do not refresh a page's position, load order is
/// the only signal.
#[derive(Debug)]
pub struct FifoReplacer {
    /// Resident pages in load order, head = oldest.
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Creates a FIFO replacer for up to `frame_count` pages.
    pub fn new(frame_count: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(frame_count),
        }
    }
}

impl Replacer for FifoReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn record_access(&mut self, _page: PageId, _hit: bool, _tick: u64) {
        // Load order is the only signal; hits change nothing.
    }

    fn record_load(&mut self, page: PageId) {
        self.queue.push_back(page);
    }

    fn select_victim(&mut self, resident: &[PageId], _future: &[PageId]) -> Result<PageId> {
        if resident.is_empty() {
            return Err(SimError::NoVictimAvailable);
        }
        self.queue.pop_front().ok_or(SimError::NoVictimAvailable)
    }

    fn reset(&mut self) {
        self.queue.clear();
    }
}
