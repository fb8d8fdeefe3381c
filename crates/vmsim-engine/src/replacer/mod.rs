//! Page replacement policies.
//!
//! Each policy keeps only the auxiliary metadata its strategy needs
//! (a load-order queue, last-access ticks, reference bits); the
//! tracked page set must always equal the frame set's resident pages.

mod clock;
mod fifo;
mod lru;
mod mru;
mod optimal;

pub use clock::ClockReplacer;
pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use mru::MruReplacer;
pub use optimal::OptimalReplacer;

use vmsim_common::{PageId, PolicyKind, Result};

/// Trait for page replacement algorithms.
pub trait Replacer: Send {
    /// The policy this replacer implements.
    fn kind(&self) -> PolicyKind;

    /// Records an access to `page` at logical time `tick`.
    ///
    /// Called for every access, hit or fault, before any frame
    /// mutation. On a fault `page` is not yet resident.
    fn record_access(&mut self, page: PageId, hit: bool, tick: u64);

    /// Records that `page` was placed in a frame.
    ///
    /// Called after the engine loads the page, so order-sensitive
    /// policies can extend their bookkeeping.
    fn record_load(&mut self, page: PageId);

    /// Selects a victim among `resident` pages.
    ///
    /// Called only on a fault with a full frame set. `future` is the
    /// remaining reference stream after the current access; only
    /// Optimal consults it. The victim is removed from the policy's
    /// own bookkeeping before being returned.
    ///
    /// Fails with `NoVictimAvailable` if `resident` is empty.
    fn select_victim(&mut self, resident: &[PageId], future: &[PageId]) -> Result<PageId>;

    /// Discards all auxiliary state.
    fn reset(&mut self);
}

/// Creates a replacer for the given policy.
pub fn create_replacer(kind: PolicyKind, frame_count: usize) -> Box<dyn Replacer> {
    match kind {
        PolicyKind::Fifo => Box::new(FifoReplacer::new(frame_count)),
        PolicyKind::Lru => Box::new(LruReplacer::new()),
        PolicyKind::Mru => Box::new(MruReplacer::new()),
        PolicyKind::Optimal => Box::new(OptimalReplacer::new()),
        PolicyKind::Clock => Box::new(ClockReplacer::new(frame_count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_replacer_kinds() {
        for kind in PolicyKind::ALL {
            let replacer = create_replacer(kind, 4);
            assert_eq!(replacer.kind(), kind);
        }
    }

    #[test]
    fn test_empty_resident_set_is_defect() {
        for kind in PolicyKind::ALL {
            let mut replacer = create_replacer(kind, 4);
            let err = replacer.select_victim(&[], &[]).unwrap_err();
            assert_eq!(err, vmsim_common::SimError::NoVictimAvailable);
        }
    }
}
