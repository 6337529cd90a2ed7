// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Decodes a raw byte stream into a bytecode word stream, and resolves the
//! CLI's `[infile.bc] [outfile.txt]` argument surface.


use crate::bytecode::Program;
use std::fmt;
use std::path::Path;

/// A malformed byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The stream's length was not a multiple of 8.
    TruncatedWord {
        /// Total byte count, not divisible by 8.
        len: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedWord { len } => {
                write!(f, "byte stream length {len} is not a multiple of 8")
            }
        }
    }
}

/// Decode a byte stream into a [`Program`].
///
/// Bytes are grouped into little-endian 64-bit words: for each 8-byte group
/// `b0..b7`, `word = b0 | (b1<<8) | .. | (b7<<56)`.
///
/// # Errors
/// Returns [`DecodeError::TruncatedWord`] if `bytes.len()` is not a multiple
/// of 8.
pub fn decode(bytes: &[u8]) -> Result<Program, DecodeError> {
    if bytes.len() % 8 != 0 {
        return Err(DecodeError::TruncatedWord { len: bytes.len() });
    }
    let code = bytes
        .chunks_exact(8)
        .map(|chunk| {
            let mut word = 0u64;
            for (i, &byte) in chunk.iter().enumerate() {
                word |= u64::from(byte) << (i * 8);
            }
            word
        })
        .collect();
    Ok(Program::new(code))
}

/// Where the CLI should read bytecode from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input.
    Stdin,
    /// A file, resolved by its `.bc` suffix or explicit position.
    File(std::path::PathBuf),
}

/// Where the CLI should write the printed result to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Standard output.
    Stdout,
    /// A file, resolved by its `.txt` suffix or explicit position.
    File(std::path::PathBuf),
}

/// An argument list the CLI does not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError;

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "usage: scheme-vm [infile.bc] [outfile.txt]")
    }
}

/// Resolve the process's positional arguments into an `(Input, Output)` pair.
///
/// - Zero arguments: stdin and stdout.
/// - One argument: resolved by suffix — `.bc` is an input file (stdout for
///   output), `.txt` is an output file (stdin for input).
/// - Two arguments: input then output, in that order.
/// - Any other combination is a [`UsageError`].
///
/// # Errors
/// Returns [`UsageError`] if `args` doesn't match one of the shapes above,
/// or if a single argument's suffix is neither `.bc` nor `.txt`.
pub fn resolve_args(args: &[String]) -> Result<(Input, Output), UsageError> {
    match args {
        [] => Ok((Input::Stdin, Output::Stdout)),
        [only] => resolve_single(only),
        [infile, outfile] => Ok((
            Input::File(infile.into()),
            Output::File(outfile.into()),
        )),
        _ => Err(UsageError),
    }
}

fn resolve_single(arg: &str) -> Result<(Input, Output), UsageError> {
    let path = Path::new(arg);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("bc") => Ok((Input::File(path.into()), Output::Stdout)),
        Some("txt") => Ok((Input::Stdin, Output::File(path.into()))),
        _ => Err(UsageError),
    }
}
