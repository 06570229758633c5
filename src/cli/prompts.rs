//! Centralized prompts, warnings and messages for CLI output.

use std::io::{BufRead, Write};

use crossterm::style::{Stylize, style};

use super::{Abort, quiet};

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{}", style(msg).yellow());
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{}", style(msg).red());
}

/// Write an informational line - suppressed in quiet mode
pub fn info<W: Write>(out: &mut W, msg: &str) -> std::io::Result<()> {
    if quiet::enabled() {
        return Ok(());
    }
    writeln!(out, "{msg}")
}

/// Print clipboard copied confirmation
pub fn clipboard_copied<W: Write>(out: &mut W) -> std::io::Result<()> {
    info(out, "\nThe last password was copied to your clipboard.")
}

/// Clipboard could not be reached; tell the user how to get it working
pub fn clipboard_unavailable<W: Write>(out: &mut W, reason: &str) -> std::io::Result<()> {
    log::warn!("clipboard unavailable: {reason}");
    info(
        out,
        "\nTip: clipboard copy needs a running clipboard service (X11/Wayland on Linux); pass --no-clipboard to skip it.",
    )
}

/// Why a positive-integer answer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    NotANumber,
    NotPositive,
}

/// Parse a whole number that must be at least 1.
///
/// Negative and zero values are recognised as numbers so the caller can tell
/// "not a number" apart from "too small".
pub fn parse_positive(input: &str) -> Result<usize, NumberError> {
    let value: i128 = input.trim().parse().map_err(|_| NumberError::NotANumber)?;
    if value <= 0 {
        return Err(NumberError::NotPositive);
    }
    usize::try_from(value).map_err(|_| NumberError::NotANumber)
}

/// Interpret a yes/no answer. Empty means `default`; unrecognised is `None`.
pub fn parse_yes_no(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Prompt and read one line. End of input aborts the session.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String, Abort> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Abort::InputClosed);
    }
    Ok(line.trim().to_owned())
}

/// Ask a yes/no question until a recognisable answer is given.
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    default: bool,
) -> Result<bool, Abort> {
    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        let answer = ask(input, out, &format!("{prompt} ({hint}): "))?;
        match parse_yes_no(&answer, default) {
            Some(choice) => return Ok(choice),
            None => writeln!(out, "Please answer 'y' or 'n'.")?,
        }
    }
}
