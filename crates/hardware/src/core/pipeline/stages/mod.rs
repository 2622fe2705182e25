//! Pipeline stage implementations.
//!
//! The five stages of the instruction pipeline:
//! 1. **Fetch:** Captures the instruction word at the committed PC.
//! 2. **Decode:** Extracts register indices, the auxiliary bits, and the
//!    operation tag.
//! 3. **Execute:** Resolves operands and evaluates ALU results and
//!    effective addresses.
//! 4. **Memory:** Performs data loads and stores.
//! 5. **Writeback:** Commits results into next-state registers and the PC.
//!
//! Every stage reads the committed latch set and writes the shadow set, so
//! each is a pure function of last cycle's state.

/// Instruction decode stage implementation.
pub mod decode;

/// Execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
