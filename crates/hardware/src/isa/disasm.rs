//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for inspection tooling, program listings, and test diagnostics.
//! The disassembler is stateless and independent of the execution path:
//! it renders what the encoding says, not what the pipeline will compute.
//!
//! Registers are printed by literal index (`x5`), not ABI name, and
//! immediates are printed as the unsigned values the machine actually
//! carries.
//!
//! # Usage
//!
//! ```
//! use pipesim_core::isa::disasm::disassemble;
//! let text = disassemble(0x003100B3); // ADD x1, x2, x3
//! assert_eq!(text.as_deref(), Some("add x1 x2 x3"));
//! ```

use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes};

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns `None` for any opcode or funct3/funct7 combination outside the
/// supported subset; an unrecognized encoding is an absent result, never an
/// error.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> Option<String> {
    let rd = inst.rd();
    let rs1 = inst.rs1();
    let rs2 = inst.rs2();
    let funct3 = inst.funct3();
    let funct7 = inst.funct7();
    let imm = inst.imm12();

    match inst.opcode() {
        opcodes::OP_REG => {
            let mn = reg_mnemonic(funct3, funct7)?;
            Some(format!("{mn} x{rd} x{rs1} x{rs2}"))
        }
        opcodes::OP_IMM => {
            let mn = imm_mnemonic(funct3, imm)?;
            Some(format!("{mn} x{rd} x{rs1} {imm}"))
        }
        opcodes::OP_LOAD => {
            let mn = load_mnemonic(funct3)?;
            Some(format!("{mn} x{rd} {imm}(x{rs1})"))
        }
        opcodes::OP_STORE => {
            let mn = store_mnemonic(funct3)?;
            // S-format: the immediate is split across the funct7 and rd
            // field positions.
            let imm_s = (funct7 << 5) | rd as u32;
            Some(format!("{mn} x{rs2} {imm_s}(x{rs1})"))
        }
        _ => None,
    }
}

/// Selects the register-register mnemonic for a (funct3, funct7) pair.
fn reg_mnemonic(funct3: u32, funct7: u32) -> Option<&'static str> {
    match funct3 {
        f3::ADD_SUB => match funct7 {
            f7::DEFAULT => Some("add"),
            f7::ALT => Some("sub"),
            _ => None,
        },
        f3::SLL => Some("sll"),
        f3::SLT => Some("slt"),
        f3::SLTU => Some("sltu"),
        f3::XOR => Some("xor"),
        f3::SRL_SRA => match funct7 {
            f7::DEFAULT => Some("srl"),
            f7::ALT => Some("sra"),
            _ => None,
        },
        f3::OR => Some("or"),
        f3::AND => Some("and"),
        _ => None,
    }
}

/// Selects the immediate-ALU mnemonic for a funct3 and raw immediate.
///
/// The shift-right family splits on bits 11:5 of the immediate, which
/// occupy the funct7 position of the encoding.
fn imm_mnemonic(funct3: u32, imm: u32) -> Option<&'static str> {
    match funct3 {
        f3::ADD_SUB => Some("addi"),
        f3::SLL => Some("slli"),
        f3::SLT => Some("slti"),
        f3::SLTU => Some("sltiu"),
        f3::XOR => Some("xori"),
        f3::SRL_SRA => match imm >> 5 {
            f7::DEFAULT => Some("srli"),
            f7::ALT => Some("srai"),
            _ => None,
        },
        f3::OR => Some("ori"),
        f3::AND => Some("andi"),
        _ => None,
    }
}

/// Selects the load mnemonic for a funct3 value.
fn load_mnemonic(funct3: u32) -> Option<&'static str> {
    match funct3 {
        f3::LB => Some("lb"),
        f3::LH => Some("lh"),
        f3::LW => Some("lw"),
        f3::LBU => Some("lbu"),
        f3::LHU => Some("lhu"),
        _ => None,
    }
}

/// Selects the store mnemonic for a funct3 value.
fn store_mnemonic(funct3: u32) -> Option<&'static str> {
    match funct3 {
        f3::SB => Some("sb"),
        f3::SH => Some("sh"),
        f3::SW => Some("sw"),
        _ => None,
    }
}
