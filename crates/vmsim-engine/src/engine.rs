//! Simulation engine orchestrating the page table, frame set, and
//! active replacement policy.

use crate::frames::FrameSet;
use crate::page_table::PageTable;
use crate::replacer::{create_replacer, Replacer};
use crate::stats::{Counters, StatsSnapshot};
use serde::Serialize;
use vmsim_common::{PageId, PolicyKind, Result, SimError, SimulationConfig};

/// Outcome of one page access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessResult {
    /// The page that was accessed.
    pub page: PageId,
    /// True if the access was a page fault.
    pub fault: bool,
    /// The page evicted to make room, if any.
    pub evicted: Option<PageId>,
    /// Resident pages in load order after the access.
    pub resident: Vec<PageId>,
}

/// Page-replacement simulation engine.
///
/// Two states: uninitialized and ready. `configure` moves the engine
/// to ready, rebuilding all derived state; every other operation
/// requires ready and fails with `NotConfigured` otherwise.
///
/// The engine exclusively owns its page table, frame set, policy
/// state, and counters; only snapshots and copies cross the boundary
/// to callers. Each `access` is atomic: input errors are rejected
/// before any mutation.
pub struct SimulationEngine {
    inner: Option<EngineInner>,
}

struct EngineInner {
    config: SimulationConfig,
    page_table: PageTable,
    frames: FrameSet,
    replacer: Box<dyn Replacer>,
    counters: Counters,
    /// Logical clock, one tick per access. Wall-clock time never
    /// enters the simulation, so runs are replayable.
    clock: u64,
}

impl EngineInner {
    fn build(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            page_table: PageTable::new(config.page_table_size)?,
            frames: FrameSet::new(config.frame_count)?,
            replacer: create_replacer(config.policy, config.frame_count),
            counters: Counters::default(),
            clock: 0,
        })
    }

    fn access(&mut self, page: PageId, future: &[PageId]) -> Result<AccessResult> {
        self.page_table.check_range(page)?;

        let hit = self.page_table.is_resident(page)?;
        self.counters.record(hit);

        let tick = self.clock;
        self.clock += 1;
        self.replacer.record_access(page, hit, tick);

        if hit {
            return Ok(AccessResult {
                page,
                fault: false,
                evicted: None,
                resident: self.frames.resident_pages().to_vec(),
            });
        }

        let evicted = if self.frames.is_full() {
            let victim = self
                .replacer
                .select_victim(self.frames.resident_pages(), future)?;
            self.frames.evict(victim)?;
            self.page_table.mark_non_resident(victim)?;
            Some(victim)
        } else {
            None
        };

        let frame = self.frames.load(page)?;
        self.page_table.mark_resident(page, frame)?;
        self.replacer.record_load(page);

        Ok(AccessResult {
            page,
            fault: true,
            evicted,
            resident: self.frames.resident_pages().to_vec(),
        })
    }

    fn reset(&mut self) {
        self.page_table.reset();
        self.frames.reset();
        self.replacer.reset();
        self.counters.reset();
        self.clock = 0;
    }

    fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            policy: self.config.policy,
            total_accesses: self.counters.total_accesses,
            total_faults: self.counters.total_faults,
            fault_rate: self.counters.fault_rate(),
            hit_rate: self.counters.hit_rate(),
            resident: self.frames.resident_pages().to_vec(),
            frames: self.frames.slots().to_vec(),
            page_table: self.page_table.entries().to_vec(),
        }
    }
}

impl SimulationEngine {
    /// Creates an unconfigured engine.
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Creates an engine already configured with `config`.
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        let mut engine = Self::new();
        engine.configure(config)?;
        Ok(engine)
    }

    /// Returns true once `configure` has succeeded.
    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns the active configuration, if any.
    pub fn config(&self) -> Option<SimulationConfig> {
        self.inner.as_ref().map(|inner| inner.config)
    }

    /// (Re)initializes the engine for `config`.
    ///
    /// All derived state is rebuilt and counters zeroed. On an
    /// invalid configuration the previous state is kept.
    pub fn configure(&mut self, config: SimulationConfig) -> Result<()> {
        let inner = EngineInner::build(config)?;
        self.inner = Some(inner);
        Ok(())
    }

    fn inner_mut(&mut self) -> Result<&mut EngineInner> {
        self.inner.as_mut().ok_or(SimError::NotConfigured)
    }

    /// Accesses a single page.
    ///
    /// Under the Optimal policy a standalone access has no lookahead;
    /// use `run_sequence` to give Belady's algorithm its future.
    pub fn access(&mut self, page: PageId) -> Result<AccessResult> {
        self.inner_mut()?.access(page, &[])
    }

    /// Applies `access` to each page in order.
    ///
    /// Produces exactly the results of issuing the accesses one at a
    /// time, except that each step hands the remaining tail of the
    /// sequence to the policy as its future. An error mid-sequence
    /// (e.g. an out-of-range page) leaves the engine in the state of
    /// the last fully-applied access.
    pub fn run_sequence(&mut self, pages: &[PageId]) -> Result<Vec<AccessResult>> {
        let inner = self.inner_mut()?;
        let mut results = Vec::with_capacity(pages.len());
        for (i, &page) in pages.iter().enumerate() {
            results.push(inner.access(page, &pages[i + 1..])?);
        }
        Ok(results)
    }

    /// Switches the replacement policy.
    ///
    /// Always a full reset with the same sizes: policy state is
    /// meaningless across a switch, so no simulation history
    /// survives.
    pub fn set_policy(&mut self, kind: PolicyKind) -> Result<()> {
        let config = self
            .config()
            .ok_or(SimError::NotConfigured)?
            .with_policy(kind);
        self.configure(config)
    }

    /// Clears all simulation state without changing the configuration.
    pub fn reset(&mut self) -> Result<()> {
        self.inner_mut()?.reset();
        Ok(())
    }

    /// Returns a statistics snapshot.
    pub fn snapshot(&self) -> Result<StatsSnapshot> {
        Ok(self
            .inner
            .as_ref()
            .ok_or(SimError::NotConfigured)?
            .snapshot())
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}
