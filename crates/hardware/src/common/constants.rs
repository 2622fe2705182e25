//! Global system constants.

/// Size of one machine word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose registers.
pub const GPR_COUNT: usize = 32;

/// Bit mask for shift amounts (5 bits: 0-31).
///
/// Shift operands are masked to the register width before shifting, so
/// oversized shift amounts wrap instead of faulting.
pub const SHAMT_MASK: u32 = 0x1F;
