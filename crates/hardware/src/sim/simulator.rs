//! Simulator: owns the CPU and the loaded program image.
//!
//! This is the surface the command loop (and tests) drive: cycle stepping,
//! bounded and unbounded runs, reset, register and memory pokes, and state
//! queries. The program image is retained so reset can reload it.

use tracing::debug;

use crate::common::SimError;
use crate::common::constants::{GPR_COUNT, WORD_BYTES};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::ArchState;
use crate::core::pipeline::latches::Latches;
use crate::stats::SimStats;

/// Top-level simulator: CPU plus the retained program image.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// The processor.
    pub cpu: Cpu,
    program: Vec<u32>,
}

impl Simulator {
    /// Creates a simulator from configuration with an empty program.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        Ok(Self {
            cpu: Cpu::new(config)?,
            program: Vec::new(),
        })
    }

    /// Loads a program image.
    ///
    /// Writes each word sequentially starting at the text base address and
    /// records the image for reload on reset. The word count becomes the
    /// program size used by the termination bound.
    pub fn load_program(&mut self, words: &[u32]) {
        self.program = words.to_vec();
        self.write_program();
        self.cpu.program_len = words.len() as u32;
    }

    /// Advances one cycle.
    ///
    /// Returns `false`, without touching any state, when the machine has
    /// already halted.
    pub fn step(&mut self) -> bool {
        if !self.cpu.running {
            return false;
        }
        self.cpu.cycle();
        true
    }

    /// Runs for at most `cycles` cycles.
    ///
    /// Stops early when the termination bound fires. Returns the number of
    /// cycles actually executed; a request after halt is a no-op returning
    /// 0.
    pub fn run(&mut self, cycles: u64) -> u64 {
        let mut executed = 0;
        for _ in 0..cycles {
            if !self.step() {
                break;
            }
            executed += 1;
        }
        executed
    }

    /// Runs until the termination bound fires.
    ///
    /// Returns the number of cycles executed.
    pub fn run_to_completion(&mut self) -> u64 {
        let mut executed = 0;
        while self.step() {
            executed += 1;
        }
        debug!(target: "pipesim::sim", executed, "run to completion finished");
        executed
    }

    /// Resets the machine and reloads the program.
    ///
    /// Zeroes registers, scratch registers, memory, latches, and counters;
    /// rewrites the program image; sets the PC to the text base; copies
    /// current state into next state; re-enables the run state.
    pub fn reset(&mut self) {
        self.cpu.state = ArchState {
            pc: self.cpu.text_base,
            ..ArchState::default()
        };
        self.cpu.next = self.cpu.state.clone();
        self.cpu.latch = Latches::default();
        self.cpu.latch_shadow = Latches::default();
        self.cpu.memory.reset();
        self.write_program();
        self.cpu.stats = SimStats::default();
        self.cpu.running = true;
    }

    /// Whether the engine is still running.
    pub const fn is_running(&self) -> bool {
        self.cpu.running
    }

    /// The committed architectural state.
    pub const fn state(&self) -> &ArchState {
        &self.cpu.state
    }

    /// The committed contents of the four pipeline latches.
    pub const fn latches(&self) -> &Latches {
        &self.cpu.latch
    }

    /// The cycle and instruction counters.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }

    /// The loaded program image.
    pub fn program(&self) -> &[u32] {
        &self.program
    }

    /// The configured text base address.
    pub const fn text_base(&self) -> u32 {
        self.cpu.text_base
    }

    /// Reads a 32-bit memory word.
    pub fn read_memory(&self, addr: u32) -> u32 {
        self.cpu.memory.read32(addr)
    }

    /// Writes a 32-bit memory word.
    pub fn write_memory(&mut self, addr: u32, value: u32) {
        self.cpu.memory.write32(addr, value);
    }

    /// Sets a general-purpose register in both current and next state.
    ///
    /// Both copies are written so the value survives the next cycle commit,
    /// whichever state the pipeline reads first.
    pub fn set_register(&mut self, idx: usize, value: u32) -> Result<(), SimError> {
        if idx >= GPR_COUNT {
            return Err(SimError::InvalidRegister(idx));
        }
        self.cpu.state.regs.write(idx, value);
        self.cpu.next.regs.write(idx, value);
        Ok(())
    }

    /// Sets the HI scratch register in both current and next state.
    pub fn set_hi(&mut self, value: u32) {
        self.cpu.state.hi = value;
        self.cpu.next.hi = value;
    }

    /// Sets the LO scratch register in both current and next state.
    pub fn set_lo(&mut self, value: u32) {
        self.cpu.state.lo = value;
        self.cpu.next.lo = value;
    }

    /// Writes the retained program image into the text segment.
    fn write_program(&mut self) {
        for (i, word) in self.program.iter().enumerate() {
            let addr = self
                .cpu
                .text_base
                .wrapping_add(i as u32 * WORD_BYTES);
            self.cpu.memory.write32(addr, *word);
        }
    }
}
