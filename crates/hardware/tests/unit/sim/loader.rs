//! Loader Unit Tests.
//!
//! Verifies hex-word program parsing: token forms, error reporting with
//! line numbers, and file I/O failures.

use std::io::Write;

use pipesim_core::common::SimError;
use pipesim_core::sim::loader::{load_words, parse_words};

#[test]
fn parses_one_word_per_line() {
    let words = parse_words("00500093\n0040A103\n").unwrap();
    assert_eq!(words, vec![0x0050_0093, 0x0040_A103]);
}

#[test]
fn accepts_multiple_words_per_line_and_blank_lines() {
    let words = parse_words("13 93\n\n   00000033  \n").unwrap();
    assert_eq!(words, vec![0x13, 0x93, 0x33]);
}

#[test]
fn accepts_0x_prefixes() {
    let words = parse_words("0x00500093\n0XDEADBEEF\n").unwrap();
    assert_eq!(words, vec![0x0050_0093, 0xDEAD_BEEF]);
}

#[test]
fn empty_input_is_an_empty_program() {
    assert_eq!(parse_words("").unwrap(), Vec::<u32>::new());
}

#[test]
fn reports_bad_tokens_with_line_numbers() {
    let err = parse_words("00000013\nnotahex\n").unwrap_err();
    match err {
        SimError::ProgramParse { token, line } => {
            assert_eq!(token, "notahex");
            assert_eq!(line, 2);
        }
        other => panic!("expected ProgramParse, got {other:?}"),
    }
}

#[test]
fn rejects_words_wider_than_32_bits() {
    let err = parse_words("123456789").unwrap_err();
    assert!(matches!(err, SimError::ProgramParse { .. }));
}

#[test]
fn loads_words_from_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "00500093").unwrap();
    writeln!(file, "00A00113").unwrap();

    let words = load_words(file.path()).unwrap();
    assert_eq!(words, vec![0x0050_0093, 0x00A0_0113]);
}

#[test]
fn missing_file_is_a_typed_error() {
    let err = load_words(std::path::Path::new("/no/such/program.hex")).unwrap_err();
    assert!(matches!(err, SimError::ProgramRead { .. }));
}
