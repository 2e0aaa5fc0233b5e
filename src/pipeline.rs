// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::num::NonZeroUsize;

use log::{debug, info};
use rand::Rng;

use crate::errors::GenError;
use crate::seq::insert::insert_name;
use crate::seq::record::SeqRecord;
use crate::seq::stats::{compute_statistics, RemovalMode, Statistics};
use crate::seq::synth::generate_sequence;

/// Everything the user is asked for.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub length: NonZeroUsize,
    pub id: String,
    pub description: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Generated {
    pub record: SeqRecord,
    /// Where the name was inserted, in bases from the start.
    pub offset: usize,
    pub stats: Statistics,
}

/// Output file name for a sequence ID: the ID, verbatim, plus ".fasta".
pub fn output_filename(id: &str) -> String {
    format!("{}.fasta", id)
}

/// Synthesis, name insertion and statistics, in that order. No I/O.
pub fn generate<R: Rng + ?Sized>(
    inputs: &Inputs,
    mode: RemovalMode,
    rng: &mut R,
) -> Result<Generated, GenError> {
    let sequence = generate_sequence(inputs.length, rng);
    info!("Generated {} random bases", inputs.length);
    debug!("raw sequence: {}", sequence);

    let annotated = insert_name(&sequence, &inputs.name, rng);
    info!("Inserted '{}' at offset {}", inputs.name, annotated.offset);

    let stats = compute_statistics(&annotated, &inputs.name, mode)?;
    debug!("removal mode: {}, stats: {:?}", mode, stats);

    Ok(Generated {
        offset: annotated.offset,
        record: SeqRecord {
            id: inputs.id.clone(),
            description: inputs.description.clone(),
            sequence: annotated.sequence,
        },
        stats,
    })
}
