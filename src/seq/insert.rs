// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::ops::Range;

use rand::Rng;

/// A sequence with a name spliced into it, remembering where the name went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    pub sequence: String,
    /// Insertion point, in characters of the original sequence (0 = before the first one).
    pub offset: usize,
    // Byte range of the inserted name within `sequence`.
    name_span: Range<usize>,
}

impl Annotated {
    pub fn name_span(&self) -> Range<usize> {
        self.name_span.clone()
    }

    /// The annotated sequence with exactly the inserted copy of the name cut out.
    pub fn without_inserted_name(&self) -> String {
        let mut clean = String::with_capacity(self.sequence.len() - self.name_span.len());
        clean.push_str(&self.sequence[..self.name_span.start]);
        clean.push_str(&self.sequence[self.name_span.end..]);
        clean
    }
}

/// Inserts `name` at an offset drawn uniformly from the `n + 1` insertion points of `sequence`
/// (both ends included).
pub fn insert_name<R: Rng + ?Sized>(sequence: &str, name: &str, rng: &mut R) -> Annotated {
    let n = sequence.chars().count();
    let offset = rng.gen_range(0..=n);
    insert_at(sequence, name, offset)
}

/// Returns `sequence[..offset] + name + sequence[offset..]`, `offset` counted in characters.
/// Offsets past the end append.
pub fn insert_at(sequence: &str, name: &str, offset: usize) -> Annotated {
    let split = sequence
        .char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(sequence.len());
    let offset = sequence[..split].chars().count();

    let mut annotated = String::with_capacity(sequence.len() + name.len());
    annotated.push_str(&sequence[..split]);
    annotated.push_str(name);
    annotated.push_str(&sequence[split..]);

    Annotated {
        sequence: annotated,
        offset,
        name_span: split..split + name.len(),
    }
}
