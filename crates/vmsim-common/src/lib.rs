//! vmsim common types, errors, and configuration.
//!
//! This crate provides shared definitions used across all vmsim components.

pub mod config;
pub mod error;
pub mod types;

pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use types::{FrameId, PageId, PolicyKind};
