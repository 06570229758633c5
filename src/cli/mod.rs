//! Command-line front end: flags, prompts and the generate-print-copy flow.

mod args;
mod context;
pub mod prompts;
mod quiet;

use std::io;

use thiserror::Error;

use coverpass::pass::{GenerateError, MAX_LENGTH};

pub use args::Args;
pub use context::Context;

/// Why a session ended early.
#[derive(Debug, Error)]
pub enum Abort {
    #[error("Invalid input. Please enter a whole number for length.")]
    InvalidLength,

    #[error("Length must be a positive integer.")]
    NonPositiveLength,

    #[error("Length must be at most {max} characters.", max = MAX_LENGTH)]
    LengthTooLong,

    #[error("You must enable at least one character type. Exiting.")]
    NoClasses,

    #[error("Invalid number. Exiting.")]
    InvalidCount,

    #[error("Number of passwords must be at least 1.")]
    NonPositiveCount,

    #[error("Input closed before all settings were given.")]
    InputClosed,

    #[error("Error: {0}")]
    Generate(#[from] GenerateError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Run the CLI against the real terminal.
pub fn run(args: Args) -> Result<(), Abort> {
    quiet::set(args.quiet);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    Context::new(args).run(&mut input, &mut out)
}
