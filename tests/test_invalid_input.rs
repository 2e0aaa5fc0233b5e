// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use tempfile::tempdir;

use crate::common::utils;

use randfasta::errors::GenError;
use randfasta::prompt::LENGTH_PROMPT;
use randfasta::runner::Options;

fn assert_rejected(length: &str) {
    let dir = tempdir().expect("scratch dir");
    let opts = utils::seeded_options(dir.path(), 1);
    let (res, printed) = utils::run_session(&opts, &utils::answers(length, "test1", "demo", "Bob"));
    match res {
        Err(e @ GenError::InvalidInput(_)) => {
            assert!(e.to_string().starts_with("Invalid input: "))
        }
        other => panic!("length {:?} accepted: {:?}", length, other),
    }
    // Nothing past the length prompt, and no file.
    assert_eq!(LENGTH_PROMPT, printed);
    assert!(utils::dir_is_empty(dir.path()));
}

#[test]
fn zero_length_rejected() {
    assert_rejected("0");
}

#[test]
fn negative_length_rejected() {
    assert_rejected("-5");
}

#[test]
fn non_numeric_length_rejected() {
    assert_rejected("lots");
    assert_rejected("");
}

#[test]
fn command_line_length_validated_too() {
    let dir = tempdir().expect("scratch dir");
    let opts = Options {
        length: Some(String::from("-5")),
        ..utils::seeded_options(dir.path(), 1)
    };
    let (res, printed) = utils::run_session(&opts, "test1\ndemo\nBob\n");
    assert!(matches!(res, Err(GenError::InvalidInput(_))));
    assert!(printed.is_empty());
    assert!(utils::dir_is_empty(dir.path()));
}

#[test]
fn name_consuming_sequence_writes_nothing() {
    // Length 1 and a one-base name: whenever the base matches the name, nothing is left to
    // count. Try seeds until that happens.
    let mut hit = false;
    for seed in 0..64 {
        let dir = tempdir().expect("scratch dir");
        let opts = utils::seeded_options(dir.path(), seed);
        let (res, _) = utils::run_session(&opts, &utils::answers("1", "tiny", "demo", "G"));
        if let Err(GenError::EmptyComposition) = res {
            assert!(utils::dir_is_empty(dir.path()));
            hit = true;
            break;
        }
    }
    assert!(hit);
}
