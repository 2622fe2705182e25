//! System-level components outside the CPU core.
//!
//! Currently this is the segmented memory subsystem; the modeled machine has
//! no buses, devices, or interrupt fabric.

/// Segmented byte-addressable memory.
pub mod memory;

pub use memory::{Memory, MemoryRegion};
