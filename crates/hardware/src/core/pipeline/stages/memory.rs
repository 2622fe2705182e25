//! Memory Access (MEM) Stage.
//!
//! Propagates the EX/MEM latch into MEM/WB. Loads read memory at the
//! computed effective address into the loaded-data slot; stores write
//! operand B's value (resolved at Execute) to the effective address. All
//! other instruction classes pass through untouched.

use tracing::trace;

use crate::core::cpu::Cpu;
use crate::core::pipeline::latches::MemWbLatch;
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::opcodes;

/// Executes the memory access stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn mem_stage(cpu: &mut Cpu) {
    let ex_mem = cpu.latch.ex_mem.clone();

    let mut lmd = 0;
    match ex_mem.ir.opcode() {
        opcodes::OP_LOAD => {
            lmd = cpu.memory.read32(ex_mem.alu);
            trace!(target: "pipesim::pipeline", addr = ex_mem.alu, lmd, "MEM load");
        }
        opcodes::OP_STORE => {
            cpu.memory.write32(ex_mem.alu, ex_mem.b);
            trace!(target: "pipesim::pipeline", addr = ex_mem.alu, value = ex_mem.b, "MEM store");
        }
        _ => {}
    }

    cpu.latch_shadow.mem_wb = MemWbLatch {
        pc: ex_mem.pc,
        ir: ex_mem.ir,
        a: ex_mem.a,
        b: ex_mem.b,
        imm: ex_mem.imm,
        alu: ex_mem.alu,
        lmd,
    };
}
