// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{fmt, io};

#[derive(Debug)]
pub enum GenError {
    Io(io::Error),
    InvalidInput(String),
    EmptyComposition,
    Config(String),
}

// These allow conversion to GenError, required for run() to return Result<()> and for '?' to
// work.

impl From<io::Error> for GenError {
    fn from(e: io::Error) -> Self {
        GenError::Io(e)
    }
}

impl From<serde_json::Error> for GenError {
    fn from(e: serde_json::Error) -> Self {
        GenError::Config(e.to_string())
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Io(e) => write!(f, "I/O error: {}", e),
            GenError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GenError::EmptyComposition => write!(
                f,
                "Computation error: no nucleotides left once the name is removed, cannot compute percentages"
            ),
            GenError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Io(e) => Some(e),
            _ => None,
        }
    }
}
