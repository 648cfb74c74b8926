// Copyright (c) 2024-present, window-scan
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! CLI tool for running window scans from the command line

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
    registry::Registry,
};
use window_scan::{longest_unique_substr, max_window_sum, min_cover_str, min_window_sum};

macro_rules! die {
    ($fmt:literal, $($arg:tt)*) => {{
        eprintln!($fmt, $($arg)*);
        std::process::exit(1);
    }};

    ($msg:literal) => {{
        eprintln!($msg);
        std::process::exit(1);
    }};
}

#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};

pub fn init_tracing(quiet: bool, verbose: u8) -> LevelFilter {
    let level_filter = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    // Bridge log crate macros to tracing (for library code that uses log::*)
    tracing_log::LogTracer::init().expect("Failed to set log tracer");

    let registry = Registry::default();

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("WSCAN_LOG")
        .from_env_lossy();

    let subscriber = registry.with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .compact(),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        die!("INTERNAL ERROR: setting default tracing::subscriber failed");
    }

    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing_panic::panic_hook(info);
        prev_hook(info); // daisy-chain to old panic hook
    }));

    level_filter
}

/// CLI tool for running window scans
#[derive(Parser, Debug)]
#[command(name = "wscan")]
#[command(about = "CLI tool for running window scans")]
struct ToolArgs {
    /// Suppress all output except for errors. This overrides the -v flag.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Turn on verbose output. Supply -v multiple times to increase verbosity.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Command to run
    #[command(subcommand)]
    command: ToolCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ToolCommand {
    /// Length of the longest substring without repeated characters
    UniqueRun {
        /// The string to scan
        text: String,
    },
    /// Extreme sums over all windows of a fixed size
    WindowSum {
        /// Window size
        size: usize,

        /// The integers to scan
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Shortest substring of SOURCE covering all characters of TARGET
    Cover {
        /// The string to scan
        source: String,

        /// The characters the window must contain, with multiplicity
        target: String,
    },
}

fn main() {
    let args = ToolArgs::parse();

    init_tracing(args.quiet, args.verbose);

    match args.command {
        ToolCommand::UniqueRun { text } => {
            info!("scanning {} chars", text.chars().count());
            println!("{}", longest_unique_substr(&text));
        }
        ToolCommand::WindowSum { size, values } => {
            info!("scanning {} values, window size {size}", values.len());

            let max = max_window_sum(&values, size);
            let min = min_window_sum(&values, size);

            match (max, min) {
                (Ok(max), Ok(min)) => {
                    println!("max = {max}");
                    println!("min = {min}");
                }
                (Err(e), _) | (_, Err(e)) => die!("{e}"),
            }
        }
        ToolCommand::Cover { source, target } => {
            info!(
                "scanning {} chars for a cover of {} chars",
                source.chars().count(),
                target.chars().count(),
            );

            match min_cover_str(&source, &target) {
                Some(window) => println!("{window}"),
                None => die!("no covering window"),
            }
        }
    }
}
