//! Writeback (WB) Stage.
//!
//! The final stage. Selects the register-write value by opcode class (ALU
//! result for register-register and immediate instructions, loaded data
//! for loads, nothing for stores) and writes it into the *next*
//! architectural state. Retired instructions are counted here; with no
//! branch or jump support every recognized instruction that reaches
//! writeback retires.
//!
//! The next program counter is set unconditionally to the carried PC from
//! the MEM/WB latch: the value captured at fetch four cycles earlier and
//! threaded through every latch. That propagation path, not any notion of
//! the retiring instruction's own PC, is how this machine advances.

use tracing::trace;

use crate::core::cpu::Cpu;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::opcodes;

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn wb_stage(cpu: &mut Cpu) {
    let wb = cpu.latch.mem_wb.clone();
    let rd = wb.ir.rd();

    match wb.ir.opcode() {
        opcodes::OP_REG | opcodes::OP_IMM => {
            cpu.next.regs.write(rd, wb.alu);
            cpu.stats.instructions_retired += 1;
            cpu.stats.inst_alu += 1;
            trace!(target: "pipesim::pipeline", rd, value = wb.alu, "WB");
        }
        opcodes::OP_LOAD => {
            cpu.next.regs.write(rd, wb.lmd);
            cpu.stats.instructions_retired += 1;
            cpu.stats.inst_load += 1;
            trace!(target: "pipesim::pipeline", rd, value = wb.lmd, "WB load");
        }
        opcodes::OP_STORE => {
            cpu.stats.instructions_retired += 1;
            cpu.stats.inst_store += 1;
        }
        _ => {}
    }

    cpu.next.pc = wb.pc;
}
