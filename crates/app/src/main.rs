use std::num::NonZeroU64;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use edge_annotator::prelude::*;
use log::{error, info};

fn main() -> ExitCode {
    let CliOpts {
        input_file_name,
        option,
        max_weight,
        seed,
        verbose,
    } = CliOpts::new();

    init_logging(verbose);

    let annotator = Annotator::new(Mode::from_option(option), max_weight);
    let annotator = match seed {
        Some(seed) => annotator.seed(seed),
        None => annotator,
    };
    println!("{}", annotator.mode().status());

    match annotator.annotate(&input_file_name) {
        Ok(annotated) => {
            info!(
                "Annotated {} edges into {:?}",
                annotated.records, annotated.output
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Annotating {input_file_name:?} failed");
            eprintln!("Error: {}", error_chain(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Append synthetic weights and/or timestamps to an edge list",
    arg_required_else_help = true
)]
struct CliOpts {
    /// Input edge list, the last four characters of its name are replaced
    /// by the output suffix
    input_file_name: PathBuf,

    /// 1 = weights, 2 = timestamps, 3 = timestamps and weights,
    /// any other integer = both
    #[arg(allow_negative_numbers = true)]
    option: i64,

    /// Inclusive upper bound for the random weights
    max_weight: NonZeroU64,

    /// Seed for the weight generator
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity, RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl CliOpts {
    fn new() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        CliOpts::command().debug_assert();
    }

    #[test]
    fn parse_positional_arguments() {
        let opts = CliOpts::try_parse_from(["append_values", "edges.txt", "3", "10"]).unwrap();

        assert_eq!(opts.input_file_name, PathBuf::from("edges.txt"));
        assert_eq!(opts.option, 3);
        assert_eq!(opts.max_weight.get(), 10);
        assert_eq!(opts.seed, None);
        assert_eq!(opts.verbose, 0);
    }

    #[test]
    fn parse_negative_option() {
        let opts = CliOpts::try_parse_from(["append_values", "edges.txt", "-1", "10"]).unwrap();

        assert_eq!(Mode::from_option(opts.option), Mode::Both);
    }

    #[test]
    fn parse_seed_and_verbosity() {
        let opts = CliOpts::try_parse_from([
            "append_values",
            "-vv",
            "--seed",
            "42",
            "edges.txt",
            "1",
            "5",
        ])
        .unwrap();

        assert_eq!(opts.seed, Some(42));
        assert_eq!(opts.verbose, 2);
    }

    #[test]
    fn reject_invalid_arguments() {
        for args in [
            vec!["append_values", "edges.txt", "two", "10"],
            vec!["append_values", "edges.txt", "2", "ten"],
            vec!["append_values", "edges.txt", "2", "0"],
            vec!["append_values", "edges.txt", "2"],
            vec!["append_values", "edges.txt", "2", "10", "extra"],
        ] {
            assert!(CliOpts::try_parse_from(args).is_err());
        }
    }

    #[test]
    fn error_chain_includes_causes() {
        let err = Error::Input {
            path: PathBuf::from("edges.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        assert_eq!(
            error_chain(&err),
            "error while reading input file \"edges.txt\": not found"
        );
    }
}
