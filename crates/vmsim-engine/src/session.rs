//! Shared simulation session handle.

use crate::engine::{AccessResult, SimulationEngine};
use crate::stats::StatsSnapshot;
use parking_lot::Mutex;
use std::sync::Arc;
use vmsim_common::{PageId, PolicyKind, Result, SimulationConfig};

/// Cloneable handle to a single simulation session.
///
/// The engine itself is sequential state: the eviction decision and
/// the table mutation are not splittable. This handle serializes all
/// commands against one engine behind a mutex, so concurrent callers
/// never observe a partially-applied access, and configuration
/// changes get exclusive access. Use one session per independent
/// simulation.
#[derive(Clone)]
pub struct SimulationSession {
    engine: Arc<Mutex<SimulationEngine>>,
}

impl SimulationSession {
    /// Creates a session around an unconfigured engine.
    pub fn new() -> Self {
        Self {
            engine: Arc::new(Mutex::new(SimulationEngine::new())),
        }
    }

    /// Creates a session already configured with `config`.
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        let session = Self::new();
        session.configure(config)?;
        Ok(session)
    }

    /// See [`SimulationEngine::configure`].
    pub fn configure(&self, config: SimulationConfig) -> Result<()> {
        self.engine.lock().configure(config)
    }

    /// See [`SimulationEngine::access`].
    pub fn access(&self, page: PageId) -> Result<AccessResult> {
        self.engine.lock().access(page)
    }

    /// See [`SimulationEngine::run_sequence`].
    ///
    /// The whole sequence runs under one lock acquisition, so no
    /// other command interleaves with it.
    pub fn run_sequence(&self, pages: &[PageId]) -> Result<Vec<AccessResult>> {
        self.engine.lock().run_sequence(pages)
    }

    /// See [`SimulationEngine::set_policy`].
    pub fn set_policy(&self, kind: PolicyKind) -> Result<()> {
        self.engine.lock().set_policy(kind)
    }

    /// See [`SimulationEngine::reset`].
    pub fn reset(&self) -> Result<()> {
        self.engine.lock().reset()
    }

    /// See [`SimulationEngine::snapshot`].
    pub fn snapshot(&self) -> Result<StatsSnapshot> {
        self.engine.lock().snapshot()
    }

    /// Returns the active configuration, if any.
    pub fn config(&self) -> Option<SimulationConfig> {
        self.engine.lock().config()
    }
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new()
    }
}
