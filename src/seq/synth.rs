// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{iter, num::NonZeroUsize};

use rand::Rng;

use crate::seq::base::Base;

/// Draws `length` bases independently and uniformly, with replacement, from {A, C, G, T}.
///
/// The caller owns the random source; pass a seeded generator for reproducible output.
pub fn generate_sequence<R: Rng + ?Sized>(length: NonZeroUsize, rng: &mut R) -> String {
    iter::repeat_with(|| Base::ALL[rng.gen_range(0..Base::ALL.len())].as_char())
        .take(length.get())
        .collect()
}
