//! CPU: architectural state, latches, memory, and the cycle protocol.
//!
//! One `Cpu` value owns everything the engine mutates; there is no ambient
//! state, so independent instances coexist and tests run in parallel. A
//! cycle evaluates the five stages against the committed state and latch
//! set, then commits: next-state becomes current, the shadow latches become
//! the committed latches, the cycle counter increments, and the termination
//! bound is checked. Because the check runs after commit, the machine halts
//! one cycle after the logical overrun.

use tracing::debug;

use crate::common::SimError;
use crate::common::constants::WORD_BYTES;
use crate::config::Config;
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::Latches;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::soc::Memory;
use crate::stats::SimStats;

/// The processor: double-buffered architectural state, double-buffered
/// latches, memory, and counters.
#[derive(Debug, Clone)]
pub struct Cpu {
    /// Committed architectural state, readable by all stages.
    pub state: ArchState,
    /// Architectural state being written this cycle.
    pub next: ArchState,
    /// Committed latch set, read by the stages.
    pub latch: Latches,
    /// Shadow latch set, written by the stages.
    pub latch_shadow: Latches,
    /// The segmented memory.
    pub memory: Memory,
    /// Cycle and retired-instruction counters.
    pub stats: SimStats,
    /// Whether the engine is still running (cleared by the termination
    /// bound).
    pub running: bool,
    /// Base address of the instruction segment.
    pub text_base: u32,
    /// Loaded program size in words.
    pub program_len: u32,
}

impl Cpu {
    /// Creates a CPU from configuration with an empty program.
    ///
    /// Validates the configured memory map; the PC starts at the text base.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        let memory = Memory::new(&config.regions)?;
        let state = ArchState {
            pc: config.text_base,
            ..ArchState::default()
        };
        let next = state.clone();
        Ok(Self {
            state,
            next,
            latch: Latches::default(),
            latch_shadow: Latches::default(),
            memory,
            stats: SimStats::default(),
            running: true,
            text_base: config.text_base,
            program_len: 0,
        })
    }

    /// Advances the machine by one cycle.
    ///
    /// Evaluates the five stages, commits next-state and the shadow
    /// latches, increments the cycle counter, and applies the termination
    /// bound to the freshly committed PC.
    pub fn cycle(&mut self) {
        wb_stage(self);
        mem_stage(self);
        execute_stage(self);
        decode_stage(self);
        fetch_stage(self);

        self.state = self.next.clone();
        self.latch = self.latch_shadow.clone();
        self.stats.cycles += 1;

        if self.state.pc > self.program_bound() {
            debug!(
                target: "pipesim::core",
                pc = self.state.pc,
                cycles = self.stats.cycles,
                "program bound exceeded, halting"
            );
            self.running = false;
        }
    }

    /// The first address past the loaded program.
    ///
    /// The committed PC strictly exceeding this bound halts the machine.
    pub const fn program_bound(&self) -> u32 {
        self.text_base
            .wrapping_add(self.program_len.wrapping_mul(WORD_BYTES))
    }
}
