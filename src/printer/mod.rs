// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Printer for tagged values.
//!
//! Converts a [`Value`] back to its textual representation, writing
//! directly to any [`io::Write`] sink rather than building a `String` —
//! the heap it reads from has no bound on nesting depth, so there is no
//! reason to materialize the whole rendering before emitting it.


use crate::heap::Heap;
use crate::value::Value;
use std::io::{self, Write};

/// A tag the printer does not recognize. Distinct from [`crate::vm::VmError`]
/// because it can surface after a successful run, once the result is handed
/// off for printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTag(pub u64);

impl std::fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot print word with unrecognized tag: {:#x}", self.0)
    }
}

/// Render `value` to `out`, reading compound objects from `heap` as needed.
///
/// # Errors
/// Returns [`UnknownTag`] if `value` (or a value reachable from it) carries
/// no recognizable tag. Propagates the sink's I/O errors as-is.
pub fn print_value<W: Write>(
    value: Value,
    heap: &Heap,
    out: &mut W,
) -> io::Result<Result<(), UnknownTag>> {
    let Some(kind) = value.kind() else {
        return Ok(Err(UnknownTag(value.to_raw())));
    };
    match kind {
        crate::value::Kind::Fixnum => write!(out, "{}", value.untag_fixnum())?,
        crate::value::Kind::Bool => {
            out.write_all(if value.untag_bool() { b"#t" } else { b"#f" })?;
        }
        crate::value::Kind::Char => print_char(value.untag_char(), out)?,
        crate::value::Kind::EmptyList => out.write_all(b"()")?,
        crate::value::Kind::Pair => return print_pair(value, heap, out),
        crate::value::Kind::String => print_string(value, heap, out)?,
        crate::value::Kind::Vector => return print_vector(value, heap, out),
        crate::value::Kind::Closure => out.write_all(b"function")?,
    }
    Ok(Ok(()))
}

fn print_char<W: Write>(byte: u8, out: &mut W) -> io::Result<()> {
    if byte == b'\n' {
        out.write_all(b"#\\newline")
    } else {
        write!(out, "#\\{}", byte as char)
    }
}

fn print_string<W: Write>(value: Value, heap: &Heap, out: &mut W) -> io::Result<()> {
    out.write_all(b"\"")?;
    out.write_all(&heap.string_bytes(value))?;
    out.write_all(b"\"")
}

fn print_pair<W: Write>(
    value: Value,
    heap: &Heap,
    out: &mut W,
) -> io::Result<Result<(), UnknownTag>> {
    let pair = heap.read_pair(value);
    out.write_all(b"(")?;
    if let Err(e) = print_value(pair.car, heap, out)? {
        return Ok(Err(e));
    }
    out.write_all(b" . ")?;
    if let Err(e) = print_value(pair.cdr, heap, out)? {
        return Ok(Err(e));
    }
    out.write_all(b")")?;
    Ok(Ok(()))
}

fn print_vector<W: Write>(
    value: Value,
    heap: &Heap,
    out: &mut W,
) -> io::Result<Result<(), UnknownTag>> {
    out.write_all(b"#(")?;
    for elem in heap.vector_elements(value) {
        if let Err(e) = print_value(elem, heap, out)? {
            return Ok(Err(e));
        }
        out.write_all(b" ")?;
    }
    out.write_all(b")")?;
    Ok(Ok(()))
}
