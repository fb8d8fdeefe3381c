//! Configuration structures for the simulator.

use crate::error::{Result, SimError};
use crate::types::PolicyKind;
use serde::{Deserialize, Serialize};

/// Configuration for one simulation session.
///
/// Changing any field invalidates all derived state; the engine
/// rebuilds its page table, frame set, and policy state on every
/// `configure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of virtual pages; valid page ids are `[0, page_table_size)`.
    pub page_table_size: usize,
    /// Number of physical frames available to hold resident pages.
    pub frame_count: usize,
    /// Active replacement policy.
    pub policy: PolicyKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            page_table_size: 16,
            frame_count: 4,
            policy: PolicyKind::Fifo,
        }
    }
}

impl SimulationConfig {
    /// Creates a configuration with the given sizes and the default policy.
    pub fn new(page_table_size: usize, frame_count: usize) -> Self {
        Self {
            page_table_size,
            frame_count,
            policy: PolicyKind::default(),
        }
    }

    /// Returns a copy of this configuration with a different policy.
    pub fn with_policy(self, policy: PolicyKind) -> Self {
        Self { policy, ..self }
    }

    /// Validates size constraints.
    ///
    /// Requires `page_table_size > 0` and `0 < frame_count <= page_table_size`.
    pub fn validate(&self) -> Result<()> {
        if self.page_table_size == 0 {
            return Err(SimError::InvalidConfig(
                "page_table_size must be positive".to_string(),
            ));
        }
        if self.frame_count == 0 {
            return Err(SimError::InvalidConfig(
                "frame_count must be positive".to_string(),
            ));
        }
        if self.frame_count > self.page_table_size {
            return Err(SimError::InvalidConfig(format!(
                "frame_count ({}) exceeds page_table_size ({})",
                self.frame_count, self.page_table_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.page_table_size, 16);
        assert_eq!(config.frame_count, 4);
        assert_eq!(config.policy, PolicyKind::Fifo);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_new_with_policy() {
        let config = SimulationConfig::new(8, 3).with_policy(PolicyKind::Lru);
        assert_eq!(config.page_table_size, 8);
        assert_eq!(config.frame_count, 3);
        assert_eq!(config.policy, PolicyKind::Lru);
    }

    #[test]
    fn test_config_zero_page_table() {
        let config = SimulationConfig::new(0, 1);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
        assert!(err.to_string().contains("page_table_size"));
    }

    #[test]
    fn test_config_zero_frames() {
        let config = SimulationConfig::new(16, 0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("frame_count"));
    }

    #[test]
    fn test_config_frames_exceed_pages() {
        let config = SimulationConfig::new(4, 8);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_config_frames_equal_pages_is_valid() {
        assert!(SimulationConfig::new(4, 4).validate().is_ok());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let original = SimulationConfig::new(32, 8).with_policy(PolicyKind::Clock);
        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: SimulationConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(original, deserialized);
    }
}
