//! Runtime configuration, read from the environment.
//!
//! Command-line arguments are never consulted.

use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming an explicit SDL2 shared library.
pub const LIBRARY_ENV: &str = "SDL_HELLO_LIBRARY";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Path to the SDL2 shared library. `None` searches the platform defaults.
    pub library: Option<PathBuf>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let library = lookup(LIBRARY_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self { library }
    }
}
