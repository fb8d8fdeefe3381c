//! Clock (second chance) replacement.

use super::Replacer;
use vmsim_common::{PageId, PolicyKind, Result, SimError};

/// One slot in the clock ring.
#[derive(Debug, Clone, Copy)]
struct ClockSlot {
    page: PageId,
    referenced: bool,
}

/// Clock replacer: a circular sweep over frame slots with one
/// reference bit per resident page.
///
/// A hit sets the page's reference bit. The sweep starts at the hand:
/// a set bit is cleared and the hand advances; a clear bit marks the
/// victim and the hand stops one past it. A newly loaded page takes
/// the victim's slot with its bit clear; the bit is only set by
/// later accesses while the page is resident.
#[derive(Debug)]
pub struct ClockReplacer {
    /// Ring of resident pages in frame-slot order.
    ring: Vec<ClockSlot>,
    /// Current sweep position.
    hand: usize,
    /// Slot freed by the last eviction, reused by the next load.
    freed: Option<usize>,
    capacity: usize,
}

impl ClockReplacer {
    /// Creates a clock replacer over `frame_count` slots.
    pub fn new(frame_count: usize) -> Self {
        Self {
            ring: Vec::with_capacity(frame_count),
            hand: 0,
            freed: None,
            capacity: frame_count,
        }
    }

    /// Returns the current sweep position.
    pub fn hand(&self) -> usize {
        self.hand
    }
}

impl Replacer for ClockReplacer {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Clock
    }

    fn record_access(&mut self, page: PageId, hit: bool, _tick: u64) {
        if !hit {
            return;
        }
        if let Some(slot) = self.ring.iter_mut().find(|s| s.page == page) {
            slot.referenced = true;
        }
    }

    fn record_load(&mut self, page: PageId) {
        let slot = ClockSlot {
            page,
            referenced: false,
        };
        match self.freed.take() {
            // Reuse the slot the last victim vacated
            Some(idx) => self.ring[idx] = slot,
            // Fill phase: frames are handed out in append order
            None if self.ring.len() < self.capacity => self.ring.push(slot),
            None => {}
        }
    }

    fn select_victim(&mut self, resident: &[PageId], _future: &[PageId]) -> Result<PageId> {
        if resident.is_empty() || self.ring.is_empty() {
            return Err(SimError::NoVictimAvailable);
        }

        // Terminates within two rotations: every set bit gets cleared
        loop {
            let idx = self.hand;
            self.hand = (self.hand + 1) % self.ring.len();

            if self.ring[idx].referenced {
                self.ring[idx].referenced = false;
            } else {
                self.freed = Some(idx);
                return Ok(self.ring[idx].page);
            }
        }
    }

    fn reset(&mut self) {
        self.ring.clear();
        self.hand = 0;
        self.freed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(pages: &[u32]) -> ClockReplacer {
        let mut replacer = ClockReplacer::new(pages.len());
        for &p in pages {
            replacer.record_load(PageId(p));
        }
        replacer
    }

    #[test]
    fn test_clock_evicts_first_clear_bit() {
        let mut replacer = loaded(&[1, 2, 3]);
        let resident = [PageId(1), PageId(2), PageId(3)];

        // Hit on page 1 sets its bit; sweep skips it and clears it
        replacer.record_access(PageId(1), true, 0);

        assert_eq!(replacer.select_victim(&resident, &[]).unwrap(), PageId(2));
        assert_eq!(replacer.hand(), 2);
    }

    #[test]
    fn test_clock_all_referenced_sweeps_full_circle() {
        let mut replacer = loaded(&[1, 2, 3]);
        let resident = [PageId(1), PageId(2), PageId(3)];

        for page in resident {
            replacer.record_access(page, true, 0);
        }

        // All bits cleared during the first rotation, then slot 0 wins
        assert_eq!(replacer.select_victim(&resident, &[]).unwrap(), PageId(1));
        assert_eq!(replacer.hand(), 1);
    }

    #[test]
    fn test_clock_new_page_takes_victim_slot() {
        let mut replacer = loaded(&[1, 2, 3]);
        let resident = [PageId(1), PageId(2), PageId(3)];

        assert_eq!(replacer.select_victim(&resident, &[]).unwrap(), PageId(1));
        replacer.record_load(PageId(4));

        // Page 4 sits in slot 0 with a clear bit; hand is at slot 1
        let resident = [PageId(2), PageId(3), PageId(4)];
        assert_eq!(replacer.select_victim(&resident, &[]).unwrap(), PageId(2));
    }

    #[test]
    fn test_clock_miss_does_not_set_bit() {
        let mut replacer = loaded(&[1, 2]);
        let resident = [PageId(1), PageId(2)];

        // A fault for page 1 would be a desync; bits only track hits
        replacer.record_access(PageId(1), false, 0);

        assert_eq!(replacer.select_victim(&resident, &[]).unwrap(), PageId(1));
    }

    #[test]
    fn test_clock_empty_resident_set() {
        let mut replacer = ClockReplacer::new(3);
        assert_eq!(
            replacer.select_victim(&[], &[]),
            Err(SimError::NoVictimAvailable)
        );
    }

    #[test]
    fn test_clock_reset() {
        let mut replacer = loaded(&[1, 2]);
        replacer.record_access(PageId(1), true, 0);
        replacer.reset();

        assert_eq!(replacer.hand(), 0);
        assert_eq!(
            replacer.select_victim(&[PageId(1)], &[]),
            Err(SimError::NoVictimAvailable)
        );
    }
}
