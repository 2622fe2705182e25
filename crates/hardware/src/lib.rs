//! Instruction-level simulator for a five-stage pipelined RV32 subset.
//!
//! This crate implements the execution core of a small pipelined machine:
//! 1. **Core:** Double-buffered architectural state, the four inter-stage
//!    latches, and the fetch/decode/execute/memory/writeback cycle engine.
//! 2. **Memory:** A fixed table of named byte-addressable regions with
//!    little-endian word access; unmapped accesses are defined, not faults.
//! 3. **ISA:** Field decoding, the total operation-dispatch mapping, and a
//!    disassembler for the load/store/immediate/register-register subset.
//! 4. **Simulation:** Program image loading, the driving facade, and
//!    counters.
//!
//! The modeled machine is deliberately incomplete: no branches or jumps, no
//! hazard handling, no exceptions, unsigned-only immediates, and aliased
//! shift/compare variants. Those are properties of the machine being
//! simulated, documented where they appear; the simulator reproduces them
//! exactly.

/// Common types and constants (word size, errors).
pub mod common;
/// Simulator configuration (memory map, text base).
pub mod config;
/// CPU core (architectural state, pipeline, functional units).
pub mod core;
/// Instruction set (field decoder, dispatch tables, disassembler).
pub mod isa;
/// Program loader and simulator facade.
pub mod sim;
/// Segmented memory.
pub mod soc;
/// Cycle and instruction counters.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds state, latches, memory, and counters.
pub use crate::core::Cpu;
/// Top-level simulator facade; construct with `Simulator::new`.
pub use crate::sim::Simulator;
