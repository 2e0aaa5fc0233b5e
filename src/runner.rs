// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use log::info;

use clap::{Parser, ValueEnum};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{find_config, GenConfig};
use crate::errors::GenError;
use crate::pipeline::{generate, output_filename, Inputs};
use crate::prompt::{
    parse_length, Prompter, DESCRIPTION_PROMPT, ID_PROMPT, LENGTH_PROMPT, NAME_PROMPT,
};
use crate::seq::base::Base;
use crate::seq::fasta::write_fasta_file;
use crate::seq::stats::{RemovalMode, Statistics};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Sequence length (prompted for if absent)
    #[arg(short, long, allow_hyphen_values = true)]
    length: Option<String>,

    /// Sequence ID, also the output file name stem (prompted for if absent)
    #[arg(short, long)]
    id: Option<String>,

    /// Sequence description (prompted for if absent)
    #[arg(short, long)]
    description: Option<String>,

    /// Name to embed in the sequence (prompted for if absent)
    #[arg(short, long)]
    name: Option<String>,

    /// Seed for the random source (default: from the OS)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Which copies of the name to leave out of the statistics
    #[arg(short, long, value_enum,
        help = "Name removal before counting [all|inserted]; default: all",
        hide_possible_values = true,
    )]
    removal: Option<RemovalArg>,

    /// Directory for the output file (default: current directory)
    #[arg(short, long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Ignore .randfastaconfig
    #[arg(long = "no-config")]
    no_config: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum RemovalArg {
    #[clap(name = "all")]
    #[clap(alias = "a")]
    All,
    #[clap(name = "inserted")]
    #[clap(alias = "i")]
    Inserted,
}

impl From<RemovalArg> for RemovalMode {
    fn from(arg: RemovalArg) -> Self {
        match arg {
            RemovalArg::All => RemovalMode::AllOccurrences,
            RemovalArg::Inserted => RemovalMode::InsertedOnly,
        }
    }
}

/// Settings for one run, after merging the config file and the command line. Inputs left as
/// `None` are prompted for.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub length: Option<String>,
    pub id: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub seed: Option<u64>,
    pub removal: RemovalMode,
    pub out_dir: Option<PathBuf>,
}

impl Options {
    fn from_cli(cli: Cli, config: GenConfig) -> Options {
        Options {
            length: cli.length,
            id: cli.id,
            description: cli.description,
            name: cli.name,
            seed: cli.seed.or(config.seed),
            removal: cli
                .removal
                .map(RemovalMode::from)
                .or(config.removal)
                .unwrap_or_default(),
            out_dir: cli.out_dir,
        }
    }
}

fn answer<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    given: &Option<String>,
    question: &str,
) -> Result<String, GenError> {
    match given {
        Some(value) => Ok(value.trim().to_string()),
        None => prompter.ask(question),
    }
}

// The length comes first and is checked before anything else is asked.
fn gather_inputs<R: BufRead, W: Write>(
    opts: &Options,
    prompter: &mut Prompter<R, W>,
) -> Result<Inputs, GenError> {
    let length_text = answer(prompter, &opts.length, LENGTH_PROMPT)?;
    let length = parse_length(&length_text)?;
    let id = answer(prompter, &opts.id, ID_PROMPT)?;
    let description = answer(prompter, &opts.description, DESCRIPTION_PROMPT)?;
    let name = answer(prompter, &opts.name, NAME_PROMPT)?;
    Ok(Inputs {
        length,
        id,
        description,
        name,
    })
}

/// Prints where the sequence went and its composition.
pub fn write_report<W: Write>(
    out: &mut W,
    filename: &str,
    stats: &Statistics,
) -> Result<(), io::Error> {
    writeln!(out)?;
    writeln!(out, "The sequence was saved to the file {}", filename)?;
    writeln!(out, "Sequence statistics:")?;
    for base in Base::ALL {
        writeln!(out, "{}: {}%", base, stats.percent(base))?;
    }
    writeln!(out, "%CG: {}", stats.gc_percent())?;
    out.flush()
}

/// One complete run: gather inputs, generate, write the FastA file, report. Returns the path
/// of the written file. Nothing is written if any step before the write fails.
pub fn run_with<R: BufRead, W: Write>(
    opts: &Options,
    input: R,
    output: &mut W,
) -> Result<PathBuf, GenError> {
    let inputs = {
        let mut prompter = Prompter::new(input, &mut *output);
        gather_inputs(opts, &mut prompter)?
    };

    let mut rng = match opts.seed {
        Some(seed) => {
            info!("Seeding random source with {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };
    let generated = generate(&inputs, opts.removal, &mut rng)?;

    let filename = output_filename(&inputs.id);
    let path = match &opts.out_dir {
        Some(dir) => dir.join(&filename),
        None => PathBuf::from(&filename),
    };
    write_fasta_file(&path, &generated.record)?;
    info!("Wrote {}", path.display());

    write_report(output, &path.display().to_string(), &generated.stats)?;
    Ok(path)
}

pub fn run() -> Result<(), GenError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = if cli.no_config {
        GenConfig::default()
    } else if let Some(path) = find_config() {
        info!("Reading config from {}", path.display());
        GenConfig::from_file(&path)?
    } else {
        GenConfig::default()
    };
    let opts = Options::from_cli(cli, config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_with(&opts, stdin.lock(), &mut stdout)?;
    Ok(())
}
