use std::process::ExitCode;

use clap::Parser;

mod cli;
mod exits;
mod terminal;

fn main() -> ExitCode {
    exits::harden();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::debug!("entropy source: {}", coverpass::rand::entropy_source());

    let args = cli::Args::parse();

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(abort) => exits::fail(&abort),
    }
}
