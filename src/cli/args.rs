use clap::Parser;

use coverpass::pass::MAX_LENGTH;

use super::prompts::{NumberError, parse_positive};

/// Generate passwords with at least one character from every selected class.
///
/// Run without --length to be asked for each setting interactively.
#[derive(Debug, Parser)]
#[command(name = "coverpass", version)]
pub struct Args {
    /// Characters per password. Omit to answer prompts instead.
    #[arg(short, long, value_name = "N", value_parser = password_length)]
    pub length: Option<usize>,

    /// How many passwords to generate (default: 1)
    #[arg(short, long, value_name = "N", value_parser = positive)]
    pub number: Option<usize>,

    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols (!@#$%^&*()-_=+[]{};:,.<>/?)
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy the last password to the clipboard (always attempted when interactive)
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Never touch the clipboard
    #[arg(long, conflicts_with = "clipboard")]
    pub no_clipboard: bool,

    /// Suppress everything except passwords and errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn password_length(s: &str) -> Result<usize, String> {
    let length = positive(s)?;
    if length > MAX_LENGTH {
        return Err(format!("must be at most {MAX_LENGTH}"));
    }
    Ok(length)
}

fn positive(s: &str) -> Result<usize, String> {
    parse_positive(s).map_err(|e| match e {
        NumberError::NotANumber => format!("`{s}` is not a whole number"),
        NumberError::NotPositive => "must be at least 1".to_owned(),
    })
}
