//! Passmint CLI
//!
//! Generates passwords or passphrases per the parsed flags, annotates
//! them with entropy and breach information on request, and renders
//! the batch as text, ndjson, or CSV.

use clap::Parser;
use thiserror::Error;
use tracing::warn;

use passmint::cli::Cli;
use passmint::output::{self, CsvDestination, OutputError, Record};
use passmint::pool::{PoolError, Wordlist, WordlistError};
use passmint::sampler::{SampleError, SecureSampler};
use passmint::{shannon_bits, BreachChecker};

/// Printed once at startup, unconditionally. Goes to stderr so that
/// ndjson and CSV on stdout stay machine-readable.
const BANNER: &str = "RESPONSIBLE USE: this tool is for authorized testing and credentials you own.\n\
Do not use it against systems or accounts that are not yours.\n";

/// Fatal failures; breach lookups degrade instead of landing here.
#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Wordlist(#[from] WordlistError),
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// The resolved draw source for a run.
enum Source {
    Chars(Vec<char>),
    Words(Wordlist),
}

fn main() {
    // Initialize logging on stderr; stdout belongs to the records.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    eprintln!("{}", BANNER);

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let mut sampler = SecureSampler::from_os_entropy();

    let source = if cli.passphrase {
        Source::Words(Wordlist::load(cli.wordlist.as_deref())?)
    } else {
        Source::Chars(cli.character_classes().build_pool()?)
    };

    // Capability resolved once; call sites branch on the checker,
    // not on the feature.
    let checker = if cli.check_breach {
        if !BreachChecker::available() {
            warn!("breach checking requested but not compiled in, results will be unavailable");
        }
        Some(BreachChecker::new())
    } else {
        None
    };

    let mut records = Vec::with_capacity(cli.count as usize);

    for _ in 0..cli.count {
        let value = match &source {
            Source::Chars(pool) => sampler.draw_string(pool, cli.length as usize)?,
            Source::Words(list) => sampler.draw_phrase(list.words(), cli.words as usize)?,
        };

        let mut record = Record::new(value);
        if cli.wants_entropy() {
            let bits = shannon_bits(&record.value);
            record = record.with_entropy(bits);
        }
        if let Some(checker) = &checker {
            let status = checker.check(&record.value);
            record = record.with_breach(status);
        }

        if !cli.buffered_output() {
            output::print_record(&record);
        }
        records.push(record);
    }

    if cli.json {
        output::write_ndjson(&records, std::io::stdout().lock())?;
    }

    if let Some(raw) = &cli.csv {
        let dest = CsvDestination::parse(raw);
        output::write_records(&records, &dest)?;
        if let CsvDestination::Path(path) = &dest {
            println!("csv written to {}", path.display());
        }
    }

    Ok(())
}
