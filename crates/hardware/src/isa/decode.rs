//! Instruction field decoder.
//!
//! Extracts a 32-bit instruction encoding into a structured [`Decoded`]
//! value: opcode, register indices, function codes, and the raw 12-bit
//! immediate (bits 31:20).
//!
//! The immediate is zero-extended, never sign-extended. That is a modeled
//! property of this machine, shared by the immediate-ALU, load, and store
//! formats, all of which read the same bits 31:20 field.

use crate::isa::instruction::{Decoded, InstructionBits};

/// Decodes a 32-bit instruction into its constituent fields.
///
/// Pure bit extraction: no validation is performed and every input is
/// decodable. Whether the field combination names a supported operation is
/// decided separately by the dispatch mapping.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.opcode(),
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct7: inst.funct7(),
        imm: inst.imm12(),
    }
}
