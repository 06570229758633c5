//! Exit handling: process hardening and exit codes.

use std::process::ExitCode;

use crate::cli::{Abort, prompts};

pub const INVALID_INPUT: u8 = 1;
pub const GENERATION_FAILED: u8 = 2;
pub const ENTROPY_FAILED: u8 = 3;
pub const IO_FAILED: u8 = 4;

/// Keep passwords out of core dumps and away from same-user ptrace.
#[cfg(target_os = "linux")]
pub fn harden() {
    // SAFETY: prctl with PR_SET_DUMPABLE takes a plain integer argument and has no
    // memory-safety preconditions.
    let rc = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
    if rc != 0 {
        log::warn!("prctl(PR_SET_DUMPABLE) failed: {}", std::io::Error::last_os_error());
    }
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}

/// Exit code for a session that ended early.
pub fn code_for(abort: &Abort) -> u8 {
    match abort {
        Abort::InvalidLength
        | Abort::NonPositiveLength
        | Abort::LengthTooLong
        | Abort::NoClasses
        | Abort::InvalidCount
        | Abort::NonPositiveCount
        | Abort::InputClosed => INVALID_INPUT,
        Abort::Generate(e) if e.is_fatal() => ENTROPY_FAILED,
        Abort::Generate(_) => GENERATION_FAILED,
        Abort::Io(_) => IO_FAILED,
    }
}

/// Print the reason and hand back the matching exit code.
pub fn fail(abort: &Abort) -> ExitCode {
    match abort {
        Abort::Generate(e) if e.is_fatal() => log::error!("aborting: {e}"),
        // A closed stdout (e.g. `| head`) is not worth a red message
        Abort::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            return ExitCode::from(IO_FAILED);
        }
        _ => {}
    }
    prompts::error(&abort.to_string());
    ExitCode::from(code_for(abort))
}
