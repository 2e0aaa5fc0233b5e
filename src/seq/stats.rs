// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use log::{debug, warn};
use serde::Deserialize;

use crate::errors::GenError;
use crate::seq::base::Base;
use crate::seq::insert::Annotated;

/// How the name is taken out of the annotated sequence before counting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum RemovalMode {
    /// Remove every non-overlapping occurrence of the name, left to right. A name that also
    /// occurs by chance in the random sequence (eg "AC") takes those bases with it.
    #[default]
    #[serde(rename = "all")]
    AllOccurrences,
    /// Remove only the copy that was inserted, by position.
    #[serde(rename = "inserted")]
    InsertedOnly,
}

impl fmt::Display for RemovalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RemovalMode::AllOccurrences => "all",
            RemovalMode::InsertedOnly => "inserted",
        };
        write!(f, "{}", s)
    }
}

/// A percentage with one decimal, stored exactly as tenths of a percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(u64);

impl Percent {
    /// `100 * part / total` rounded to one decimal, ties to even. The rounding is done on the
    /// exact rational value, so 1/16 = 6.25% gives 6.2 and 3/16 = 18.75% gives 18.8.
    ///
    /// `total` must be non-zero.
    pub fn of(part: usize, total: usize) -> Percent {
        let num = 1000 * part as u64;
        let total = total as u64;
        let mut tenths = num / total;
        let twice_rem = 2 * (num % total);
        if twice_rem > total || (twice_rem == total && tenths % 2 == 1) {
            tenths += 1;
        }
        Percent(tenths)
    }

    pub fn tenths(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 10.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statistics {
    counts: [usize; 4],
    total: usize,
    removed_copies: usize,
    percents: [Percent; 4],
    gc: Percent,
}

impl Statistics {
    pub fn count(&self, base: Base) -> usize {
        self.counts[base.index()]
    }

    pub fn percent(&self, base: Base) -> Percent {
        self.percents[base.index()]
    }

    pub fn gc_percent(&self) -> Percent {
        self.gc
    }

    /// Length of the sequence the percentages are relative to.
    pub fn total(&self) -> usize {
        self.total
    }

    /// How many copies of the name were cut out before counting.
    pub fn removed_copies(&self) -> usize {
        self.removed_copies
    }
}

/// Removes every non-overlapping occurrence of `name`, returning the clean sequence and the
/// number of copies removed. An empty name removes nothing.
pub fn remove_all_occurrences(sequence: &str, name: &str) -> (String, usize) {
    if name.is_empty() {
        return (sequence.to_string(), 0);
    }
    let copies = sequence.matches(name).count();
    (sequence.replace(name, ""), copies)
}

/// Counts A, C, G and T in `clean`. Percentages are relative to the full length of `clean`,
/// so characters outside the alphabet still count towards the total.
pub fn composition(clean: &str, removed_copies: usize) -> Result<Statistics, GenError> {
    let mut counts = [0usize; 4];
    let mut total = 0;
    for c in clean.chars() {
        total += 1;
        if let Some(base) = Base::from_char(c) {
            counts[base.index()] += 1;
        }
    }
    if total == 0 {
        return Err(GenError::EmptyComposition);
    }

    let percents = counts.map(|count| Percent::of(count, total));
    let gc = Percent::of(counts[Base::C.index()] + counts[Base::G.index()], total);
    debug!("counts: {:?}, total: {}", counts, total);

    Ok(Statistics {
        counts,
        total,
        removed_copies,
        percents,
        gc,
    })
}

/// Composition of `annotated` once `name` has been taken out according to `mode`.
pub fn compute_statistics(
    annotated: &Annotated,
    name: &str,
    mode: RemovalMode,
) -> Result<Statistics, GenError> {
    let (clean, copies) = match mode {
        RemovalMode::AllOccurrences => remove_all_occurrences(&annotated.sequence, name),
        RemovalMode::InsertedOnly => {
            let copies = usize::from(!annotated.name_span().is_empty());
            (annotated.without_inserted_name(), copies)
        }
    };
    if copies > 1 {
        warn!(
            "name '{}' occurs {} times; all copies were removed before counting",
            name, copies
        );
    }
    composition(&clean, copies)
}
