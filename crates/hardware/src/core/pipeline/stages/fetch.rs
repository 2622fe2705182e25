//! Instruction Fetch (IF) Stage.
//!
//! Captures the instruction word at the committed program counter and the
//! carried PC (fetch address plus 4) into the IF/ID latch. There is no
//! branch or jump evaluation: the carried PC is always the sequential
//! successor, and the committed PC only ever changes through the carried-PC
//! propagation path that ends at writeback.

use tracing::trace;

use crate::common::constants::WORD_BYTES;
use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::IfIdLatch;

/// Executes the instruction fetch stage.
///
/// Reads the word at the current (committed) PC and stages the IF/ID latch
/// for the next cycle. An unmapped PC fetches zero, which executes as a
/// no-op downstream.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn fetch_stage(cpu: &mut Cpu) {
    let pc = cpu.state.pc;
    let ir = cpu.memory.read32(pc);

    trace!(target: "pipesim::pipeline", pc, ir, "IF");

    cpu.latch_shadow.if_id = IfIdLatch {
        pc: pc.wrapping_add(WORD_BYTES),
        ir,
    };
}
