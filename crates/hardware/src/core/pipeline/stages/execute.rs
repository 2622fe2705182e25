//! Execute (EX) Stage.
//!
//! Propagates the ID/EX latch into EX/MEM, resolving operand A from a
//! register index to a value against the committed register file, then
//! dispatches on the decode-time operation tag:
//!
//! - **Load/Store:** effective address = A + the raw 12-bit immediate.
//!   Stores also resolve operand B to its register value here: a store's
//!   data is known at Execute, while a load's data only exists after the
//!   memory stage.
//! - **Immediate ALU:** evaluates the tag with the raw 12-bit immediate,
//!   reconstructed by packing the auxiliary (funct7) bits with the rs2
//!   field carried in slot B.
//! - **Register-register:** resolves operand B and evaluates the tag on
//!   the two register values.
//! - **Unsupported:** the result slot is left unset; a silent no-op.

use tracing::trace;

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::ExMemLatch;
use crate::core::pipeline::signals::Operation;
use crate::core::units::alu;

/// Executes the execute stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn execute_stage(cpu: &mut Cpu) {
    let id_ex = cpu.latch.id_ex.clone();

    let a = cpu.state.regs.read(id_ex.a as usize);
    // The raw 12-bit immediate: auxiliary bits packed with the rs2 field.
    let imm = (id_ex.imm << 5) | id_ex.b;
    let mut b = id_ex.b;

    let alu_out = match id_ex.op {
        Operation::Load => a.wrapping_add(imm),
        Operation::Store => {
            b = cpu.state.regs.read(id_ex.b as usize);
            a.wrapping_add(imm)
        }
        Operation::Immediate(op) => alu::execute(op, a, imm),
        Operation::Register(op) => {
            b = cpu.state.regs.read(id_ex.b as usize);
            alu::execute(op, a, b)
        }
        Operation::Unsupported => 0,
    };

    trace!(target: "pipesim::pipeline", ir = id_ex.ir, a, b, alu = alu_out, "EX");

    cpu.latch_shadow.ex_mem = ExMemLatch {
        pc: id_ex.pc,
        ir: id_ex.ir,
        a,
        b,
        imm: id_ex.imm,
        alu: alu_out,
    };
}
