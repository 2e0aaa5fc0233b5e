// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::Cursor;
use std::path::{Path, PathBuf};

use randfasta::errors::GenError;
use randfasta::runner::{run_with, Options};

/// Answers to the four prompts, one per line, in prompt order.
#[allow(dead_code)]
pub fn answers(length: &str, id: &str, description: &str, name: &str) -> String {
    format!("{}\n{}\n{}\n{}\n", length, id, description, name)
}

#[allow(dead_code)]
pub fn seeded_options(dir: &Path, seed: u64) -> Options {
    Options {
        seed: Some(seed),
        out_dir: Some(dir.to_path_buf()),
        ..Options::default()
    }
}

/// Runs the whole program against `typed` as console input. Returns the result and everything
/// printed to the console.
#[allow(dead_code)]
pub fn run_session(opts: &Options, typed: &str) -> (Result<PathBuf, GenError>, String) {
    let mut console: Vec<u8> = Vec::new();
    let res = run_with(opts, Cursor::new(typed.to_string()), &mut console);
    let printed = String::from_utf8(console).expect("console output is UTF-8");
    (res, printed)
}

#[allow(dead_code)]
pub fn dir_is_empty(dir: &Path) -> bool {
    std::fs::read_dir(dir)
        .expect("read scratch dir")
        .next()
        .is_none()
}
