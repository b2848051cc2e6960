// crates/dbs26-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use std::num::NonZeroUsize;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use dbs26_scheduler::{write_sequences, Sink, Solver};
use tracing::info;

/// Generate all binary De Bruijn sequences with subsequence length 6 (all 67108864 of them).
#[derive(Parser, Debug)]
#[command(
    name = "dbs26",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate all binary De Bruijn sequences with subsequence length 6 (all 67108864 of them)",
    long_about = "Generate all binary De Bruijn sequences with subsequence length 6 (all 67108864 of them).\n\n\
                  When no arguments are given, computes the sequences using all available logical\n\
                  CPUs and saves them to a file named dbs26.bin in the current directory. Output\n\
                  data is always raw binary u64 data in the native endianness.\n\n\
                  Specifying the output file as a dash ('-') prints the sequences to standard\n\
                  output in binary mode. Only do this when redirecting the output to a file or\n\
                  another program.\n\n\
                  Note: the size of the raw output is 512 MiB - be careful!"
)]
struct Cli {
    /// Save output to <file> (dbs26.bin)
    #[arg(short, long, value_name = "FILE", conflicts_with = "benchmark")]
    output: Option<String>,

    /// Use <n> threads (omit to autodetect available logical CPUs)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    threads: Option<u32>,

    /// Only benchmark the search, don't write any output
    #[arg(short, long, conflicts_with = "output")]
    benchmark: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap already wrote the help/usage text to the right stream.
            let _ = e.print();
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dbs26: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // No timestamp, target, or level prefix, and routed to stderr instead of
    // fmt::layer()'s stdout default: the diagnostics this CLI emits ("Using N
    // threads", "Generated N sequences in X ms", "Saving to <path>") are meant
    // to read exactly like the reference binary's plain fprintf(stderr, ...)
    // lines, never sharing the stream the sequence data is written to.
    let fmt_layer = fmt::layer()
        .without_time()
        .with_target(false)
        .with_level(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let output = if cli.benchmark {
        None
    } else {
        Some(cli.output.unwrap_or_else(|| "dbs26.bin".to_string()))
    };

    let n_workers = resolve_thread_count(cli.threads);
    info!("Using {n_workers} threads");

    let start = Instant::now();
    let solver = Solver::new(n_workers);
    let (slots, total) = solver.solve().context("running the parallel search")?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!("Generated {total} sequences in {elapsed_ms:.3} ms");

    if let Some(path) = output {
        let sink = Sink::from_arg(&path);
        write_sequences(&slots, total, Some(&sink)).context("writing output")?;
    }

    Ok(())
}

/// Resolve the `--threads` argument: omitted means "autodetect", falling
/// back to a single thread if the platform can't report available
/// parallelism. An explicit `0` is rejected by the argument parser before
/// this function ever sees it.
fn resolve_thread_count(threads: Option<u32>) -> usize {
    match threads {
        Some(n) => n as usize,
        None => std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn benchmark_and_output_conflict() {
        let err = Cli::try_parse_from(["dbs26", "-b", "-o", "out.bin"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn threads_and_benchmark_combine_freely() {
        let cli = Cli::try_parse_from(["dbs26", "-b", "-t", "4"]).unwrap();
        assert!(cli.benchmark);
        assert_eq!(cli.threads, Some(4));
    }

    #[test]
    fn zero_threads_is_rejected() {
        let err = Cli::try_parse_from(["dbs26", "-t", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn omitted_threads_autodetects() {
        assert!(resolve_thread_count(None) >= 1);
    }

    #[test]
    fn nonzero_threads_pass_through() {
        assert_eq!(resolve_thread_count(Some(7)), 7);
    }
}
