//! Function codes (funct7) for the supported instruction classes.
//!
//! The `funct7` field (bits 31-25) distinguishes between operations that
//! share the same `funct3` (e.g., ADD vs SUB, SRL vs SRA).

/// Default operation (ADD, SRL, SRLI).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA, SRAI).
pub const ALT: u32 = 0b0100000;

/// The single bit that selects the alternate encoding.
///
/// For shift-right immediates this is bit 10 of the raw immediate; the
/// decode-time dispatch tests it in isolation.
pub const ALT_BIT: u32 = 0b0100000;
