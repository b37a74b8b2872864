// deny in CI, only warn here
#![warn(clippy::all, clippy::pedantic)]

use std::io::{stdout, Write};

use anyhow::Result;
use arg_types::{Color, Operation, OverflowPolicy};
use plain::{Evaluation, Plain};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use clap::Parser;

mod arg_types;
mod plain;

/// What we print when no numbers are given on the command line.
const DEFAULT_NUMBERS: [i32; 3] = [5, 3, 9];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Integers to raise to the selected power.
    ///
    /// Defaults to 5, 3 and 9.
    #[arg(value_name = "N", allow_negative_numbers = true)]
    numbers: Vec<i32>,

    /// Which power to compute.
    #[arg(long, value_enum, default_value_t = Operation::Cube)]
    operation: Operation,

    /// What to do when a result does not fit in a 32-bit signed integer.
    ///
    /// "wrapping" (the default) wraps around in two's complement,
    /// "saturating" clamps to the smallest or largest value, and "checked"
    /// stops with an error.
    #[arg(long, value_enum, default_value_t = OverflowPolicy::Wrapping)]
    overflow: OverflowPolicy,

    /// Whether or not to use colors.
    ///
    /// You can select between "auto", "never", "always". If "auto" (the
    /// default), colors will be used if stdout is a terminal. If you pipe the
    /// output to a file, colors will be disabled by default.
    #[arg(long, value_enum, default_value_t = Color::Auto)]
    color: Color,

    /// Show detailed info about processing.
    ///
    /// For debugging purposes. Logs go to stderr. `RUST_LOG` takes precedence.
    #[arg(long, hide = true)]
    verbose: bool,
}

impl Args {
    fn numbers(&self) -> &[i32] {
        if self.numbers.is_empty() {
            &DEFAULT_NUMBERS
        } else {
            &self.numbers
        }
    }
}

fn main_() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let power = algebra::Power::from(args.operation);
    let overflow = algebra::Overflow::from(args.overflow);
    info!("computing the {power} of {:?} with {overflow:?} overflow", args.numbers());

    let use_color = args.color.active();
    let mut stdout = stdout().lock();
    for &input in args.numbers() {
        let result = power.apply(input, overflow)?;
        debug!(input, result, "evaluated");

        let evaluation = Evaluation {
            power,
            input,
            result,
        };
        Plain::print_evaluation(&mut stdout, use_color, &evaluation)?;
    }
    stdout.flush()?;

    Ok(())
}

/// Logs go to stderr so that stdout only carries results.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Wrapper to handle <https://github.com/rust-lang/rust/issues/46016>
fn main() -> Result<()> {
    match main_() {
        Err(e) if is_broken_pipe(&e) => std::process::exit(141),
        result => result,
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.root_cause()
        .downcast_ref::<std::io::Error>()
        .is_some_and(|io_error| io_error.kind() == std::io::ErrorKind::BrokenPipe)
}

#[cfg(test)]
mod tests {
    use super::{is_broken_pipe, Args, DEFAULT_NUMBERS};
    use anyhow::Context;
    use clap::Parser;
    use std::io::{Error, ErrorKind};
    use std::ops::Not;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn no_numbers_means_defaults() {
        let args = Args::parse_from(["algebra-demo"]);
        assert_eq!(args.numbers(), DEFAULT_NUMBERS);
    }

    #[test]
    fn negative_numbers_are_not_flags() {
        let args = Args::parse_from(["algebra-demo", "--operation", "square", "-3", "4"]);
        assert_eq!(args.numbers(), [-3, 4]);
    }

    #[test]
    fn broken_pipe_is_found_through_context() {
        let e = Err::<(), _>(Error::from(ErrorKind::BrokenPipe))
            .context("writing result")
            .unwrap_err();
        assert!(is_broken_pipe(&e));
    }

    #[test]
    fn other_errors_are_not_broken_pipe() {
        assert!(is_broken_pipe(&anyhow::Error::from(Error::from(ErrorKind::Other))).not());
        assert!(is_broken_pipe(&anyhow::Error::from(algebra::Error::Overflow {
            power: algebra::Power::Cube,
            input: 1291,
        }))
        .not());
    }
}
