// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Scheme VM
//!
//! Back end for a small Scheme toolchain.
//!
//! This crate provides:
//! - A tagged 64-bit word value representation (`value`)
//! - An append-only heap for pairs, strings, vectors, and closures (`heap`)
//! - A stack-based bytecode virtual machine (`vm`)
//! - A loader that decodes a raw byte stream into a bytecode program (`loader`)
//! - A printer that renders values back to source-level syntax (`printer`)
//!
//! The front end — the grammar-driven parser and the bytecode compiler —
//! lives outside this crate. This crate consumes a finished stream of
//! 64-bit instruction words and produces one printed result.

pub mod bytecode;
pub mod heap;
pub mod loader;
pub mod printer;
pub mod stack;
pub mod value;
pub mod vm;

pub use heap::Heap;
pub use printer::print_value;
pub use stack::Stack;
pub use value::Value;
pub use vm::{Vm, VmError};
