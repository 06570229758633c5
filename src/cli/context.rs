//! CLI context - turns flags or prompt answers into passwords, then prints and copies them.

use std::io::{BufRead, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use coverpass::pass::{self, ClassFlags, MAX_LENGTH, Password, charset};

use super::prompts::{self, NumberError};
use super::{Abort, Args, quiet};
use crate::terminal;

const DEFAULT_COUNT: usize = 1;

/// Everything needed to produce a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub length: usize,
    pub flags: ClassFlags,
    pub count: usize,
    pub copy: bool,
}

/// Application context for one CLI session.
#[derive(Debug)]
pub struct Context {
    args: Args,
    decorate: bool,
}

impl Context {
    pub fn new(args: Args) -> Self {
        Self {
            args,
            decorate: quiet::is_terminal_output(),
        }
    }

    /// Collect the request, generate, print and optionally copy the last password.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> Result<(), Abort> {
        let interactive = self.args.length.is_none();
        let request = match self.args.length {
            Some(length) => self.request_from_flags(length),
            None => self.request_from_prompts(input, out)?,
        };
        log::debug!(
            "request: length {}, count {}, {:?}",
            request.length,
            request.count,
            request.flags
        );

        let (classes, pool) = charset::build(request.flags);
        let passwords = pass::generate_batch(request.count, request.length, &classes, &pool)?;

        if interactive {
            prompts::info(out, "\nGenerated password(s):")?;
        }
        for password in &passwords {
            writeln!(out, "{password}")?;
        }
        out.flush()?;

        if request.copy
            && let Some(last) = passwords.last()
        {
            copy_to_clipboard(last, out)?;
        }

        if interactive {
            prompts::info(out, "Done.")?;
        }
        Ok(())
    }

    fn class_flags(&self) -> ClassFlags {
        ClassFlags::new(
            !self.args.no_lower,
            !self.args.no_upper,
            !self.args.no_digits,
            !self.args.no_symbols,
        )
    }

    fn request_from_flags(&self, length: usize) -> Request {
        Request {
            length,
            flags: self.class_flags(),
            count: self.args.number.unwrap_or(DEFAULT_COUNT),
            copy: self.args.clipboard,
        }
    }

    /// Interactive flow. Class flags given on the command line become the prompt defaults.
    fn request_from_prompts<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Request, Abort> {
        terminal::banner(out, "Password Generator - Secure, configurable, simple", self.decorate)?;

        let answer = prompts::ask(input, out, "Enter password length (suggested 12-24): ")?;
        let length = prompts::parse_positive(&answer).map_err(|e| match e {
            NumberError::NotANumber => Abort::InvalidLength,
            NumberError::NotPositive => Abort::NonPositiveLength,
        })?;
        if length > MAX_LENGTH {
            return Err(Abort::LengthTooLong);
        }

        let defaults = self.class_flags();
        let flags = ClassFlags::new(
            prompts::ask_yes_no(input, out, "Include lowercase letters?", defaults.lower)?,
            prompts::ask_yes_no(input, out, "Include uppercase letters?", defaults.upper)?,
            prompts::ask_yes_no(input, out, "Include digits (0-9)?", defaults.digits)?,
            prompts::ask_yes_no(input, out, "Include symbols (e.g. !@#$%)?", defaults.symbols)?,
        );
        if !flags.any() {
            return Err(Abort::NoClasses);
        }

        let count = match self.args.number {
            Some(count) => count,
            None => {
                let answer = prompts::ask(input, out, "How many passwords to generate? (default 1): ")?;
                if answer.is_empty() {
                    DEFAULT_COUNT
                } else {
                    prompts::parse_positive(&answer).map_err(|e| match e {
                        NumberError::NotANumber => Abort::InvalidCount,
                        NumberError::NotPositive => Abort::NonPositiveCount,
                    })?
                }
            }
        };

        Ok(Request {
            length,
            flags,
            count,
            copy: !self.args.no_clipboard,
        })
    }
}

/// Place `password` on the system clipboard. An unreachable clipboard is not an error.
fn copy_to_clipboard<W: Write>(password: &Password, out: &mut W) -> Result<(), Abort> {
    let mut ctx = match ClipboardContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::clipboard_unavailable(out, &e.to_string())?;
            return Ok(());
        }
    };

    match ctx.set_contents(password.as_str().to_owned()) {
        Ok(()) => {
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            prompts::clipboard_copied(out)?;
        }
        Err(e) => {
            log::warn!("clipboard write failed: {e}");
            prompts::warn(&format!("Clipboard error: {e}"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::*;

    fn context(args: &[&str]) -> Context {
        let args = Args::try_parse_from(
            std::iter::once("coverpass")
                .chain(args.iter().copied())
                .chain(std::iter::once("--no-clipboard")),
        )
        .unwrap();
        Context {
            args,
            decorate: false,
        }
    }

    fn run(args: &[&str], answers: &str) -> (Result<(), Abort>, String) {
        let ctx = context(args);
        let mut input = Cursor::new(answers.to_owned());
        let mut out = Vec::new();
        let result = ctx.run(&mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    /// Lines that follow the "Generated password(s):" header, up to "Done.".
    fn generated(output: &str) -> Vec<String> {
        output
            .lines()
            .skip_while(|line| *line != "Generated password(s):")
            .skip(1)
            .take_while(|line| *line != "Done.")
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn flag_mode_prints_requested_passwords() {
        let (result, output) = run(&["-l", "16", "-n", "3"], "");
        result.unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 16));
    }

    #[test]
    fn flag_mode_respects_disabled_classes() {
        let (result, output) = run(&["-l", "40", "--no-symbols", "--no-upper"], "");
        result.unwrap();
        let line = output.trim_end();
        assert_eq!(line.len(), 40);
        assert!(line.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert!(line.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn flag_mode_with_every_class_disabled() {
        let (result, _) = run(
            &["-l", "8", "--no-lower", "--no-upper", "--no-digits", "--no-symbols"],
            "",
        );
        assert!(matches!(
            result,
            Err(Abort::Generate(pass::GenerateError::EmptyPool))
        ));
    }

    #[test]
    fn flag_mode_length_too_short() {
        let (result, output) = run(&["-l", "3"], "");
        assert!(matches!(
            result,
            Err(Abort::Generate(pass::GenerateError::InsufficientLength {
                length: 3,
                required: 4
            }))
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn interactive_defaults() {
        let (result, output) = run(&[], "12\n\n\n\n\n\n");
        result.unwrap();
        let passwords = generated(&output);
        assert_eq!(passwords.len(), 1);
        let pass = &passwords[0];
        assert_eq!(pass.len(), 12);
        assert!(pass.chars().any(|c| c.is_ascii_lowercase()));
        assert!(pass.chars().any(|c| c.is_ascii_uppercase()));
        assert!(pass.chars().any(|c| c.is_ascii_digit()));
        assert!(pass.chars().any(|c| c.is_ascii_punctuation()));
        assert!(output.ends_with("Done.\n"));
    }

    #[test]
    fn interactive_custom_batch() {
        let (result, output) = run(&[], "6\ny\nn\nyes\nno\n4\n");
        result.unwrap();
        let passwords = generated(&output);
        assert_eq!(passwords.len(), 4);
        for pass in passwords {
            assert_eq!(pass.len(), 6);
            assert!(pass.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn interactive_reasks_yes_no() {
        let (result, output) = run(&[], "5\nperhaps\ny\ny\ny\ny\n\n");
        result.unwrap();
        assert!(output.contains("Please answer 'y' or 'n'."));
        assert_eq!(generated(&output).len(), 1);
    }

    #[test]
    fn interactive_bad_length() {
        let (result, _) = run(&[], "twelve\n");
        assert!(matches!(result, Err(Abort::InvalidLength)));
        let (result, _) = run(&[], "0\n");
        assert!(matches!(result, Err(Abort::NonPositiveLength)));
    }

    #[test]
    fn interactive_length_above_limit() {
        let (result, output) = run(&[], "18446744073709551615\n");
        assert!(matches!(result, Err(Abort::LengthTooLong)));
        // Rejected before any class question
        assert!(!output.contains("Include lowercase"));

        let answers = format!("{}\n", MAX_LENGTH + 1);
        let (result, _) = run(&[], &answers);
        assert!(matches!(result, Err(Abort::LengthTooLong)));
    }

    #[test]
    fn interactive_no_classes() {
        let (result, output) = run(&[], "10\nn\nn\nn\nn\n");
        assert!(matches!(result, Err(Abort::NoClasses)));
        // Aborts before asking for a count
        assert!(!output.contains("How many passwords"));
    }

    #[test]
    fn interactive_bad_count() {
        let (result, _) = run(&[], "10\n\n\n\n\nlots\n");
        assert!(matches!(result, Err(Abort::InvalidCount)));
        let (result, _) = run(&[], "10\n\n\n\n\n-2\n");
        assert!(matches!(result, Err(Abort::NonPositiveCount)));
    }

    #[test]
    fn interactive_length_below_class_count() {
        let (result, output) = run(&[], "2\n\n\n\n\n\n");
        assert!(matches!(
            result,
            Err(Abort::Generate(pass::GenerateError::InsufficientLength { .. }))
        ));
        assert!(generated(&output).is_empty());
    }

    #[test]
    fn interactive_skips_count_prompt_when_given() {
        let (result, output) = run(&["-n", "2"], "8\n\n\n\n\n");
        result.unwrap();
        assert!(!output.contains("How many passwords"));
        assert_eq!(generated(&output).len(), 2);
    }

    #[test]
    fn class_flags_become_prompt_defaults() {
        let (result, output) = run(&["--no-symbols"], "8\n\n\n\n\n\n");
        result.unwrap();
        assert!(output.contains("Include symbols (e.g. !@#$%)? (y/N): "));
        let pass = &generated(&output)[0];
        assert!(pass.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn interactive_eof_aborts() {
        let (result, _) = run(&[], "12\ny\n");
        assert!(matches!(result, Err(Abort::InputClosed)));
    }
}
