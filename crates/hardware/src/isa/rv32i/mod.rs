//! Base integer instruction set tables for the supported RV32 subset.

/// Function code field 3 values.
pub mod funct3;

/// Function code field 7 values.
pub mod funct7;

/// Major opcode values.
pub mod opcodes;
