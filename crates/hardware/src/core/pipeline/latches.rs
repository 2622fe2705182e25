//! Pipeline latch structures for inter-stage communication.
//!
//! Four latches carry one instruction's in-flight data per stage boundary:
//! IF/ID, ID/EX, EX/MEM, MEM/WB. There is no valid flag: a latch is always
//! considered populated, and there is no bubble or flush concept. During
//! pipeline fill the latches simply hold zero words, which execute as
//! silent no-ops.
//!
//! The CPU keeps two complete latch sets, the committed set every stage
//! reads and a shadow set the stages write, swapped atomically at cycle
//! end. Each stage is therefore a pure function of (committed state,
//! incoming latch) → outgoing latch, with no dependence on stage ordering.

use crate::core::pipeline::signals::Operation;

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IfIdLatch {
    /// Carried PC: the fetch address plus 4.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub ir: u32,
}

/// ID/EX latch (Decode to Execute).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdExLatch {
    /// Carried PC, threaded through from fetch.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub ir: u32,
    /// Operand slot A: the rs1 register *index*, not yet a value.
    pub a: u32,
    /// Operand slot B: the rs2 register *index*, not yet a value.
    pub b: u32,
    /// Auxiliary slot: the funct7 bits of the encoding.
    pub imm: u32,
    /// Operation tag resolved at decode time.
    pub op: Operation,
}

/// EX/MEM latch (Execute to Memory access).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExMemLatch {
    /// Carried PC, threaded through from fetch.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub ir: u32,
    /// Operand slot A, now resolved to the rs1 register value.
    pub a: u32,
    /// Operand slot B: the rs2 value for stores and register-register
    /// operations, still the rs2 index otherwise.
    pub b: u32,
    /// Auxiliary slot: the funct7 bits of the encoding.
    pub imm: u32,
    /// ALU result or computed effective address.
    pub alu: u32,
}

/// MEM/WB latch (Memory access to Writeback).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemWbLatch {
    /// Carried PC; writeback commits this as the next program counter.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub ir: u32,
    /// Operand slot A.
    pub a: u32,
    /// Operand slot B.
    pub b: u32,
    /// Auxiliary slot.
    pub imm: u32,
    /// ALU result or computed effective address.
    pub alu: u32,
    /// Data loaded from memory (for load instructions).
    pub lmd: u32,
}

/// One complete set of the four inter-stage latches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Latches {
    /// Fetch → Decode.
    pub if_id: IfIdLatch,
    /// Decode → Execute.
    pub id_ex: IdExLatch,
    /// Execute → Memory access.
    pub ex_mem: ExMemLatch,
    /// Memory access → Writeback.
    pub mem_wb: MemWbLatch,
}
