// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::process::ExitCode;

// Errors are reported as their Display text ("Invalid input: ...") rather than the Debug form
// main() -> Result would print.
fn main() -> ExitCode {
    match randfasta::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
