//! Error types for vmsim.

use crate::types::PageId;
use thiserror::Error;

/// Result type alias using SimError.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors that can occur during a simulation.
///
/// The first three variants are caller input errors and are raised
/// before any engine state is mutated. The last three indicate a
/// desynchronization between the page table, the frame set, and the
/// active replacement policy; they should never occur and abort the
/// operation that detected them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    // Caller input errors
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("page {page} out of range (page table size {size})")]
    OutOfRange { page: u32, size: usize },

    #[error("engine not configured")]
    NotConfigured,

    // Internal invariant violations
    #[error("frame set full, eviction required before load")]
    CapacityExceeded,

    #[error("{0} is not resident")]
    NotResident(PageId),

    #[error("no victim available: resident set is empty")]
    NoVictimAvailable,
}

impl SimError {
    /// Returns true if this error is a caller input error rather than
    /// an internal invariant violation.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SimError::InvalidConfig(_) | SimError::OutOfRange { .. } | SimError::NotConfigured
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = SimError::InvalidConfig("frame_count must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: frame_count must be positive"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = SimError::OutOfRange { page: 42, size: 16 };
        assert_eq!(err.to_string(), "page 42 out of range (page table size 16)");
    }

    #[test]
    fn test_not_resident_display() {
        let err = SimError::NotResident(PageId(7));
        assert_eq!(err.to_string(), "page:7 is not resident");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(SimError::NotConfigured.is_input_error());
        assert!(SimError::OutOfRange { page: 0, size: 1 }.is_input_error());
        assert!(SimError::InvalidConfig(String::new()).is_input_error());
        assert!(!SimError::CapacityExceeded.is_input_error());
        assert!(!SimError::NotResident(PageId(0)).is_input_error());
        assert!(!SimError::NoVictimAvailable.is_input_error());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(SimError::NotConfigured)
        }

        assert!(returns_ok().is_ok());
        assert!(returns_err().is_err());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SimError>();
    }
}
