//! Page-replacement simulation engine for vmsim.
//!
//! This crate provides the simulation core with:
//! - Fixed-size page table tracking residency and frame assignment
//! - Bounded frame set with load-order bookkeeping
//! - Interchangeable replacement policies (FIFO, LRU, MRU, Optimal, Clock)
//! - Deterministic access engine with fault/hit statistics
//! - Mutex-serialized session handles for multi-caller use

mod engine;
mod frames;
mod page_table;
mod replacer;
mod session;
mod stats;

pub use engine::{AccessResult, SimulationEngine};
pub use frames::FrameSet;
pub use page_table::PageTable;
pub use replacer::{
    create_replacer, ClockReplacer, FifoReplacer, LruReplacer, MruReplacer, OptimalReplacer,
    Replacer,
};
pub use session::SimulationSession;
pub use stats::{Counters, StatsSnapshot};
