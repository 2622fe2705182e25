//! Program image loading.
//!
//! A program image is a text file of 32-bit hexadecimal words, one
//! instruction slot per whitespace-separated token (an optional `0x` prefix
//! is accepted). The words are loaded contiguously at the text base
//! address; the token count is the program size.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::SimError;

/// Reads a program image file into a word vector.
///
/// I/O failures and malformed tokens are reported as typed errors; the
/// loader never aborts the process.
///
/// # Arguments
///
/// * `path` - Path of the program file.
pub fn load_words(path: &Path) -> Result<Vec<u32>, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::ProgramRead {
        path: path.display().to_string(),
        source,
    })?;
    let words = parse_words(&text)?;
    info!(target: "pipesim::loader", path = %path.display(), words = words.len(), "program loaded");
    Ok(words)
}

/// Parses program text into a word vector.
///
/// # Arguments
///
/// * `text` - Whitespace-separated hexadecimal 32-bit words.
pub fn parse_words(text: &str) -> Result<Vec<u32>, SimError> {
    let mut words = Vec::new();
    for (line_idx, line) in text.lines().enumerate() {
        for token in line.split_whitespace() {
            let digits = token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token);
            let word = u32::from_str_radix(digits, 16).map_err(|_| SimError::ProgramParse {
                token: token.to_owned(),
                line: line_idx + 1,
            })?;
            words.push(word);
        }
    }
    Ok(words)
}
