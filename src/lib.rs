//! Brings up the SDL2 video subsystem, prints a greeting, and shuts it down.
//!
//! The entry routine [`run`] talks to the library only through the
//! [`VideoSubsystem`] trait. [`Sdl2`] is the real backend: it opens the SDL2
//! shared library at runtime, so the binary builds without SDL2 headers.
//!
//! Output contract:
//! - success: `Hello World!!` (no newline), exit status 0, one `SDL_Quit`
//! - failure: `SDL_Init Error: <message>` plus newline, exit status 1, no teardown

mod app;
mod config;
mod error;
pub mod logging;
mod sdl;
mod subsystem;

pub use app::{GREETING, INIT_ERROR_PREFIX, RunOutcome, run};
pub use config::{Config, LIBRARY_ENV};
pub use error::{InitError, InitResult};
pub use sdl::{DEFAULT_LIBRARY_NAMES, LibrarySource, SDL_INIT_VIDEO, Sdl2};
pub use subsystem::{InitGuard, VideoSubsystem};
