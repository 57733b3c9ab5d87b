//! The entry routine: init, report, quit.

use std::fmt;
use std::io::Write;
use std::process::ExitCode;

use tracing::warn;

use crate::subsystem::{InitGuard, VideoSubsystem};

/// Printed before the library's error text when init fails.
pub const INIT_ERROR_PREFIX: &str = "SDL_Init Error: ";

/// Printed, without a trailing newline, when init succeeds.
pub const GREETING: &str = "Hello World!!";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The subsystem came up, greeted, and was shut down.
    Initialized,
    /// The subsystem failed to initialize.
    InitFailed,
}

impl RunOutcome {
    /// Process exit status: 0 or 1.
    pub fn code(self) -> u8 {
        match self {
            Self::Initialized => 0,
            Self::InitFailed => 1,
        }
    }
}

impl From<RunOutcome> for ExitCode {
    fn from(outcome: RunOutcome) -> Self {
        ExitCode::from(outcome.code())
    }
}

/// Bring `subsystem` up once, write the result to `out`, and tear it down.
///
/// On failure nothing is torn down. Write errors on `out` are logged and do
/// not change the outcome.
pub fn run<S, W>(subsystem: &mut S, out: &mut W) -> RunOutcome
where
    S: VideoSubsystem + ?Sized,
    W: Write + ?Sized,
{
    let guard = match InitGuard::acquire(subsystem) {
        Ok(guard) => guard,
        Err(err) => {
            warn!(error = %err, "video subsystem failed to initialize");
            emit(out, format_args!("{INIT_ERROR_PREFIX}{err}\n"));
            return RunOutcome::InitFailed;
        }
    };

    emit(out, format_args!("{GREETING}"));
    drop(guard);
    RunOutcome::Initialized
}

fn emit<W: Write + ?Sized>(out: &mut W, args: fmt::Arguments<'_>) {
    if let Err(err) = out.write_fmt(args).and_then(|()| out.flush()) {
        warn!(error = %err, "failed to write to stdout");
    }
}
