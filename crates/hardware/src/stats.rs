//! Simulation statistics collection.
//!
//! Tracks the counters the modeled machine maintains:
//! 1. **Cycles:** Total cycles committed since construction or reset.
//! 2. **Instructions:** Instructions retired by the writeback stage, with a
//!    mix breakdown (ALU, load, store).
//!
//! Both counters increase monotonically until reset. Pipeline fill and the
//! zero words fetched from unmapped addresses never retire, so they are not
//! counted.

/// Counters maintained by the cycle engine and writeback stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total cycles committed.
    pub cycles: u64,
    /// Number of instructions retired by writeback.
    pub instructions_retired: u64,
    /// Count of ALU (register-register and immediate) instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
}

impl SimStats {
    /// Returns cycles per retired instruction, or 0.0 before any retire.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }
}
