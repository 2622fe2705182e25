//! CPU core (architectural state, pipeline, functional units).

/// Architectural state (PC, registers, scratch registers).
pub mod arch;

/// CPU state container and cycle protocol.
pub mod cpu;

/// Five-stage pipeline (latches, signals, stages).
pub mod pipeline;

/// Functional units (ALU).
pub mod units;

pub use cpu::Cpu;
