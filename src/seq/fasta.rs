// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;

use crate::seq::record::SeqRecord;

/// Residues per sequence line in written FastA.
pub const LINE_WIDTH: usize = 60;

/// Splits `sequence` into consecutive lines of `LINE_WIDTH` characters; the last line holds the
/// remainder. Empty input gives no lines. Concatenating the lines gives back `sequence`.
pub fn wrap_sequence(sequence: &str) -> Vec<String> {
    wrap(sequence, LINE_WIDTH)
}

fn wrap(sequence: &str, width: usize) -> Vec<String> {
    sequence
        .chars()
        .chunks(width)
        .into_iter()
        .map(|chunk| chunk.collect())
        .collect()
}

/// The full text of a single-record FastA file, trailing newline included.
pub fn format_fasta(record: &SeqRecord) -> String {
    let mut text = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(text, ">{}", record.header());
    for line in wrap_sequence(&record.sequence) {
        let _ = writeln!(text, "{}", line);
    }
    text
}

/// Writes `record` to `path`, replacing any existing file.
pub fn write_fasta_file<P: AsRef<Path>>(path: P, record: &SeqRecord) -> Result<(), std::io::Error> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(format_fasta(record).as_bytes())?;
    out.flush()
}

pub fn read_fasta_file<P: AsRef<Path>>(path: P) -> Result<Vec<SeqRecord>, std::io::Error> {
    let file = File::open(path)?;
    let mut result: Vec<SeqRecord> = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in BufReader::new(file).lines() {
        let l = line?;
        if let Some(hdr) = l.strip_prefix('>') {
            if let Some((header, sequence)) = current.take() {
                result.push(SeqRecord::from_header(&header, sequence));
            }
            current = Some((hdr.to_string(), String::new()));
        } else if let Some((_, sequence)) = current.as_mut() {
            sequence.push_str(l.trim_end());
        }
        // Lines before the first header are ignored.
    }
    if let Some((header, sequence)) = current {
        result.push(SeqRecord::from_header(&header, sequence));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(seq: &str) -> SeqRecord {
        SeqRecord {
            id: String::from("test1"),
            description: String::from("demo"),
            sequence: String::from(seq),
        }
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap_sequence("").is_empty());
    }

    #[test]
    fn test_wrap_line_lengths() {
        for n in [1, 59, 60, 61, 119, 120, 121, 500] {
            let seq = "A".repeat(n);
            let lines = wrap_sequence(&seq);
            assert_eq!((n + LINE_WIDTH - 1) / LINE_WIDTH, lines.len());
            let (last, rest) = lines.split_last().unwrap();
            assert!(rest.iter().all(|l| l.len() == LINE_WIDTH));
            assert!((1..=LINE_WIDTH).contains(&last.len()));
            assert_eq!(seq, lines.concat());
        }
    }

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        let seq = format!("{}Zoë{}", "A".repeat(58), "C".repeat(10));
        let lines = wrap_sequence(&seq);
        assert_eq!(2, lines.len());
        assert_eq!(LINE_WIDTH, lines[0].chars().count());
        assert!(lines[0].ends_with("Zo"));
        assert!(lines[1].starts_with("ë"));
        assert_eq!(seq, lines.concat());
    }

    #[test]
    fn test_format_short() {
        assert_eq!(">test1 demo\nACGTABobCGTAC\n", format_fasta(&record("ACGTABobCGTAC")));
    }

    #[test]
    fn test_format_wraps_at_60() {
        let seq = "ACGT".repeat(20);
        let text = format_fasta(&record(&seq));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(vec![">test1 demo", &seq[..60], &seq[60..]], lines);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_header_split() {
        let rec = SeqRecord::from_header("seq1 some longer description", String::new());
        assert_eq!("seq1", rec.id);
        assert_eq!("some longer description", rec.description);
        let bare = SeqRecord::from_header("seq2", String::new());
        assert_eq!("seq2", bare.id);
        assert_eq!("", bare.description);
    }
}
