//! Positional bias check - generates passwords and reports, per position, how
//! often each character class lands there.
//!
//! Usage:
//!   ./bias_check                        # 20 chars, all classes, 100,000 samples
//!   ./bias_check -l 8 -n 1000000        # short passwords, more samples
//!   ./bias_check -l 6 --no-symbols      # subset of classes
//!
//! With an unbiased shuffle every position shows the same class shares, close to
//! each class's expected share of a whole password.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use coverpass::pass::{self, CharClass, ClassFlags, ClassSet, charset};
use coverpass::rand::SecureRng;

#[derive(Debug, Parser)]
#[command(name = "bias_check", about = "Report per-position class frequencies")]
struct Args {
    /// Characters per password
    #[arg(short, long, default_value_t = 20)]
    length: usize,

    /// Number of passwords to sample
    #[arg(short, long, default_value_t = 100_000)]
    number: usize,

    #[arg(long)]
    no_lower: bool,
    #[arg(long)]
    no_upper: bool,
    #[arg(long)]
    no_digits: bool,
    #[arg(long)]
    no_symbols: bool,
}

fn class_of(classes: &ClassSet, c: char) -> Option<usize> {
    classes.iter().position(|class| class.contains(c))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let flags = ClassFlags::new(!args.no_lower, !args.no_upper, !args.no_digits, !args.no_symbols);
    let (classes, pool) = charset::build(flags);

    let mut counts = vec![vec![0u64; classes.len()]; args.length];
    let mut rng = SecureRng::new();

    for _ in 0..args.number {
        let password = match pass::generate_with(&mut rng, args.length, &classes, &pool) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("bias_check: {e}");
                return ExitCode::FAILURE;
            }
        };
        for (pos, c) in password.chars().enumerate() {
            if let Some(idx) = class_of(&classes, c) {
                counts[pos][idx] += 1;
            }
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if report(&mut out, &classes, &counts, args.number).is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn report<W: Write>(
    out: &mut W,
    classes: &ClassSet,
    counts: &[Vec<u64>],
    samples: usize,
) -> io::Result<()> {
    let names: Vec<&str> = classes.iter().map(CharClass::name).collect();
    writeln!(out, "pos  {}", names.iter().map(|n| format!("{n:>9}")).collect::<String>())?;

    let samples = samples.max(1) as f64;
    let mut worst = 0.0f64;
    let columns = classes.len();

    // Reference share per class: average over all positions
    let expected: Vec<f64> = (0..columns)
        .map(|idx| {
            counts.iter().map(|row| row[idx] as f64).sum::<f64>() / (samples * counts.len().max(1) as f64)
        })
        .collect();

    for (pos, row) in counts.iter().enumerate() {
        write!(out, "{pos:>3}  ")?;
        for (idx, &count) in row.iter().enumerate() {
            let share = count as f64 / samples;
            worst = worst.max((share - expected[idx]).abs());
            write!(out, "{:>8.3}%", share * 100.0)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "max deviation from positional mean: {:.3}%", worst * 100.0)
}
