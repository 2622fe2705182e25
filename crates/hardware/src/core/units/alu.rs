//! ALU operation evaluation.
//!
//! Evaluates the arithmetic/logical operations on 32-bit operands. All
//! arithmetic wraps; shift amounts are masked to 5 bits so oversized
//! amounts (including the alternate-encoding bit a shift-right immediate
//! carries in its upper bits) select only the low bits.
//!
//! Two evaluations are deliberately aliased, matching the modeled machine:
//! `Sra` performs the logical shift (no sign extension), and `Sltu` uses
//! the same signed comparison as `Slt`. Replacing either with the
//! ISA-correct form is an extension point, not a bug fix.

use crate::common::constants::SHAMT_MASK;
use crate::core::pipeline::signals::AluOp;

/// Evaluates an ALU operation on two 32-bit operands.
///
/// # Arguments
///
/// * `op` - The operation selector.
/// * `a`  - First operand (rs1 value).
/// * `b`  - Second operand (rs2 value or zero-extended immediate).
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Sll => a.wrapping_shl(b & SHAMT_MASK),
        // Sra is aliased to the logical shift.
        AluOp::Srl | AluOp::Sra => a.wrapping_shr(b & SHAMT_MASK),
        // Sltu uses the same signed comparison as Slt.
        AluOp::Slt | AluOp::Sltu => ((a as i32) < (b as i32)) as u32,
        AluOp::Xor => a ^ b,
        AluOp::Or => a | b,
        AluOp::And => a & b,
    }
}
