// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for the hitting-set engines.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use minhit::{Hypergraph, MhsAlgorithm, Mmcs, Rs};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Parallel MMCS.
    Pmmcs,
    /// Alias for pmmcs.
    Mmcs,
    /// Parallel RS.
    Prs,
    /// Alias for prs.
    Rs,
}

#[derive(Debug, Parser)]
#[command(name = "minhit", version, about = "Enumerate the minimal hitting sets of a hypergraph")]
struct Args {
    /// Input hypergraph file, one edge per line.
    input: PathBuf,

    /// Output transversals file.
    #[arg(default_value = "out.dat")]
    output: PathBuf,

    /// Algorithm to use.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Pmmcs)]
    algorithm: Algorithm,

    /// Number of threads to run in parallel.
    #[arg(short = 't', long, default_value_t = 1)]
    num_threads: usize,

    /// Maximum size set to return (0: no limit).
    #[arg(short = 'c', long, default_value_t = 0)]
    cutoff_size: usize,

    /// Verbose debugging output (1: debug, 2: trace).
    #[arg(short, long, default_value_t = 0)]
    verbosity: u8,
}

fn main() -> ExitCode {
    if std::env::args().len() <= 1 {
        let _ = Args::command().print_help();
        return ExitCode::from(1);
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp => ExitCode::from(1),
                ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(2),
            };
        }
    };

    if args.num_threads == 0 {
        eprintln!("minhit: --num-threads must be at least 1");
        return ExitCode::from(2);
    }

    let level = match args.verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("minhit: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> minhit::Result<()> {
    debug!("loading hypergraph from {}", args.input.display());
    let h = Hypergraph::from_file(&args.input)?;
    debug!("loading complete");

    println!(
        "Input has {} vertices and {} edges.",
        h.num_verts(),
        h.num_edges()
    );

    let algorithm: Box<dyn MhsAlgorithm> = match args.algorithm {
        Algorithm::Pmmcs | Algorithm::Mmcs => {
            Box::new(Mmcs::new(args.num_threads, args.cutoff_size))
        }
        Algorithm::Prs | Algorithm::Rs => Box::new(Rs::new(args.num_threads, args.cutoff_size)),
    };

    debug!("running algorithm {:?}", args.algorithm);
    let transversals = algorithm.transversal(&h)?;
    debug!("algorithm complete");

    println!("Found {} hitting sets.", transversals.num_edges());

    debug!("writing result file {}", args.output.display());
    transversals.write_to_file(&args.output)?;
    debug!("writing complete");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["minhit", "in.dat"]).unwrap();
        assert_eq!(args.output, PathBuf::from("out.dat"));
        assert_eq!(args.algorithm, Algorithm::Pmmcs);
        assert_eq!(args.num_threads, 1);
        assert_eq!(args.cutoff_size, 0);
        assert_eq!(args.verbosity, 0);
    }

    #[test]
    fn test_args_full() {
        let args = Args::try_parse_from([
            "minhit", "in.dat", "result.dat", "-a", "prs", "-t", "4", "-c", "3", "-v", "2",
        ])
        .unwrap();
        assert_eq!(args.output, PathBuf::from("result.dat"));
        assert_eq!(args.algorithm, Algorithm::Prs);
        assert_eq!(args.num_threads, 4);
        assert_eq!(args.cutoff_size, 3);
        assert_eq!(args.verbosity, 2);
    }

    #[test]
    fn test_args_reject_unknown_algorithm() {
        assert!(Args::try_parse_from(["minhit", "in.dat", "-a", "berge"]).is_err());
    }
}
