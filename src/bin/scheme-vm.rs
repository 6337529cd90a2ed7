// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Command-line entry point: decode a bytecode stream, run it, print the
//! result.

use scheme_vm::loader::{self, Input, Output};
use scheme_vm::print_value;
use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("scheme-vm: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let (input, output) = loader::resolve_args(args).map_err(|e| e.to_string())?;

    let mut bytes = Vec::new();
    match input {
        Input::Stdin => {
            io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|e| format!("reading stdin: {e}"))?;
        }
        Input::File(path) => {
            bytes = std::fs::read(&path).map_err(|e| format!("reading {}: {e}", path.display()))?;
        }
    }

    let program = loader::decode(&bytes).map_err(|e| e.to_string())?;

    let mut vm = scheme_vm::Vm::new(program);
    let result = vm.run().map_err(|e| e.to_string())?;

    let mut rendered = Vec::new();
    print_value(result, vm.heap(), &mut rendered)
        .map_err(|e| format!("formatting output: {e}"))?
        .map_err(|e| e.to_string())?;
    rendered.push(b'\n');

    match output {
        Output::Stdout => {
            io::stdout()
                .write_all(&rendered)
                .map_err(|e| format!("writing stdout: {e}"))?;
        }
        Output::File(path) => {
            std::fs::write(&path, &rendered)
                .map_err(|e| format!("writing {}: {e}", path.display()))?;
        }
    }

    Ok(())
}
