//! Error types for bringing up the video subsystem.

use thiserror::Error;

/// Result type for subsystem operations.
pub type InitResult<T> = Result<T, InitError>;

/// Ways the video subsystem can fail to come up.
#[derive(Debug, Error)]
pub enum InitError {
    /// `SDL_Init` returned a non-zero status. Holds the text of `SDL_GetError`.
    #[error("{0}")]
    Sdl(String),

    /// No SDL2 shared library could be opened.
    #[error("could not load SDL2: {0}")]
    LibraryLoad(String),

    /// The library opened but lacks a required entry point.
    #[error("SDL2 library has no symbol {symbol}: {reason}")]
    MissingSymbol {
        symbol: &'static str,
        reason: String,
    },
}
