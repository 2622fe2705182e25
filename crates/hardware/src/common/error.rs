//! Error types for the simulator's external surface.
//!
//! The stage engine itself is total: unmapped memory reads return zero,
//! unmapped writes are dropped, and unrecognized encodings execute as silent
//! no-ops. Errors arise only at the edges: configuration validation,
//! program loading, and checked preconditions on the inspection/command API.

use std::io;

use thiserror::Error;

/// Errors reported by the simulator's construction, loading, and command
/// surface.
#[derive(Debug, Error)]
pub enum SimError {
    /// Two configured memory regions overlap.
    #[error("memory regions `{0}` and `{1}` overlap")]
    OverlappingRegions(String, String),

    /// A configured memory region has zero size.
    #[error("memory region `{0}` is empty")]
    EmptyRegion(String),

    /// A configured memory region extends past the top of the address space.
    #[error("memory region `{0}` extends past the end of the address space")]
    RegionOutOfRange(String),

    /// A register index outside 0-31 was supplied to the command surface.
    #[error("register index {0} out of range (0-31)")]
    InvalidRegister(usize),

    /// The program file could not be read.
    #[error("failed to read program file `{path}`")]
    ProgramRead {
        /// Path of the program file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The program file contained a token that is not a 32-bit hex word.
    #[error("invalid hex word `{token}` on line {line}")]
    ProgramParse {
        /// The offending token.
        token: String,
        /// 1-based line number.
        line: usize,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration")]
    ConfigParse(#[from] serde_json::Error),
}
