//! sdl-hello
//!
//! Initializes the SDL2 video subsystem and reports the result on stdout.
//!
//! Usage:
//!   sdl-hello
//!
//! Arguments are ignored. Set `SDL_HELLO_LIBRARY` to load SDL2 from a
//! specific path and `RUST_LOG` to see diagnostics on stderr.

use std::io;
use std::process::ExitCode;

use sdl_hello::{Config, Sdl2, logging, run};
use tracing::debug;

fn main() -> ExitCode {
    logging::init();

    let config = Config::from_env();
    debug!(?config, "configuration loaded");

    let mut sdl = Sdl2::from_config(&config);
    let outcome = run(&mut sdl, &mut io::stdout().lock());
    debug!(?outcome, code = outcome.code(), "exiting");
    outcome.into()
}
