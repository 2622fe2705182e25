//! Instruction Decode (ID) Stage.
//!
//! Propagates the IF/ID latch into ID/EX, resolving instruction fields:
//! 1. **Operand slots:** rs1 and rs2 enter the latch as register *indices*;
//!    values are read later, against the committed register file.
//! 2. **Auxiliary slot:** the funct7 bits, which Execute packs back together
//!    with the rs2 field to reconstruct the raw 12-bit immediate.
//! 3. **Operation tag:** the total (opcode, funct3, funct7) mapping is
//!    resolved here, once, so Execute dispatches on an enumerated tag.
//!
//! There is no hazard detection, forwarding, or stalling: every stage
//! advances unconditionally every cycle.

use tracing::trace;

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::IdExLatch;
use crate::core::pipeline::signals::Operation;
use crate::isa::decode::decode;

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn decode_stage(cpu: &mut Cpu) {
    let if_id = cpu.latch.if_id.clone();
    let d = decode(if_id.ir);
    let op = Operation::select(&d);

    trace!(target: "pipesim::pipeline", ir = if_id.ir, ?op, "ID");

    cpu.latch_shadow.id_ex = IdExLatch {
        pc: if_id.pc,
        ir: if_id.ir,
        a: d.rs1 as u32,
        b: d.rs2 as u32,
        imm: d.funct7,
        op,
    };
}
