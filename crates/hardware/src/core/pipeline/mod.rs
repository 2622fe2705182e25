//! Instruction pipeline implementation.
//!
//! The five-stage, straight-line pipeline:
//! 1. **Latches:** Inter-stage buffers, double-buffered as committed and
//!    shadow sets.
//! 2. **Signals:** Decode-time operation tags and the total dispatch
//!    mapping.
//! 3. **Stages:** Fetch, Decode, Execute, Memory, and Writeback.
//!
//! Hazard detection, forwarding, stalling, and branch handling are
//! acknowledged gaps of the modeled machine, not missing pieces of this
//! implementation.

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Decode-time operation tags and dispatch mapping.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;
