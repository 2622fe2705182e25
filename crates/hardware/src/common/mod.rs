//! Common types and constants shared across the simulator.
//!
//! This module provides the building blocks used by every component:
//! 1. **Constants:** Word size, register count, and shift masks.
//! 2. **Error Handling:** The error type for the external surface.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for configuration, loading, and the command surface.
pub mod error;

pub use error::SimError;
