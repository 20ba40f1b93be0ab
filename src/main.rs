//! Demo binary exercising the duolog entry protocol end to end: the four
//! severity levels, multi-fragment and multi-line entries, and concurrent
//! writers sharing the global logger.

use anyhow::{anyhow, Result};
use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::thread;

/// Mirror a handful of log entries to the console and a log file
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Explicit log file path (default: a timestamped file under logs/)
    #[clap(short = 'f', long)]
    log_file: Option<PathBuf>,

    /// Number of entries each worker thread writes
    #[clap(short = 'n', long, default_value_t = 5)]
    entries: usize,

    /// Number of worker threads
    #[clap(short = 't', long, default_value_t = 2)]
    threads: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let logger = duolog::init(args.log_file.as_deref(), None);

    duolog::info().append("This is a logging message.");
    duolog::warning().append("This is a warning message.");
    duolog::error().append("This is an error message.");
    duolog::debug().append("This is a debug message.");

    // Multi-fragment and multi-line entries each carry a single prefix.
    {
        let mut entry = duolog::info();
        entry.append("assembled from ");
        entry.append("three ");
        entry.append("fragments");
    }
    duolog::warning().append("first line\nsecond line stays aligned");

    let workers: Vec<_> = (0..args.threads)
        .map(|worker| {
            let entries = args.entries;
            thread::spawn(move || {
                for i in 0..entries {
                    let mut entry = duolog::debug();
                    let _ = write!(entry, "worker {worker} entry {i}");
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().map_err(|_| anyhow!("worker thread panicked"))?;
    }

    if let Some(path) = logger.file_path() {
        duolog::info().append(format_args!("log file: {}", path.display()));
    }
    Ok(())
}
