// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

pub mod base;
pub mod fasta;
pub mod insert;
pub mod record;
pub mod stats;
pub mod synth;
