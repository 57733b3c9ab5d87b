//! SDL2 backend, loaded from the shared library at runtime.
//!
//! Only three entry points are used: `SDL_Init`, `SDL_GetError` and
//! `SDL_Quit`. The library is opened on the first `init` and stays loaded
//! until the [`Sdl2`] value is dropped.

use std::ffi::{CStr, OsStr, c_char, c_int};
use std::fmt;
use std::path::PathBuf;

use libloading::Library;
use tracing::debug;

use crate::config::Config;
use crate::error::{InitError, InitResult};
use crate::subsystem::VideoSubsystem;

/// `SDL_INIT_VIDEO` from `SDL.h`.
pub const SDL_INIT_VIDEO: u32 = 0x0000_0020;

/// File names tried when no explicit library path is configured.
#[cfg(target_os = "windows")]
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &["SDL2.dll"];

/// File names tried when no explicit library path is configured.
#[cfg(target_os = "macos")]
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &["libSDL2-2.0.0.dylib", "libSDL2.dylib"];

/// File names tried when no explicit library path is configured.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &["libSDL2-2.0.so.0", "libSDL2-2.0.so", "libSDL2.so"];

type InitFn = unsafe extern "C" fn(u32) -> c_int;
type GetErrorFn = unsafe extern "C" fn() -> *const c_char;
type QuitFn = unsafe extern "C" fn();

/// Where to find the SDL2 shared library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibrarySource {
    /// A single path; no fallback.
    Explicit(PathBuf),
    /// Candidate names handed to the platform loader, tried in order.
    Search(&'static [&'static str]),
}

impl LibrarySource {
    fn candidates(&self) -> Vec<&OsStr> {
        match self {
            Self::Explicit(path) => vec![path.as_os_str()],
            Self::Search(names) => names.iter().map(OsStr::new).collect(),
        }
    }
}

impl Default for LibrarySource {
    fn default() -> Self {
        Self::Search(DEFAULT_LIBRARY_NAMES)
    }
}

// Function pointers are only valid while `_library` is loaded.
struct Api {
    init: InitFn,
    get_error: GetErrorFn,
    quit: QuitFn,
    _library: Library,
}

impl Api {
    fn open(source: &LibrarySource) -> InitResult<Self> {
        let mut failures = Vec::new();
        for candidate in source.candidates() {
            debug!(candidate = %candidate.to_string_lossy(), "opening SDL2 library");
            // SAFETY: opening SDL2 only runs its library initializers.
            match unsafe { Library::new(candidate) } {
                Ok(library) => return Self::resolve(library),
                Err(err) => failures.push(err.to_string()),
            }
        }
        Err(InitError::LibraryLoad(failures.join("; ")))
    }

    fn resolve(library: Library) -> InitResult<Self> {
        // SAFETY: the signatures match the declarations in SDL.h and SDL_error.h.
        let (init, get_error, quit) = unsafe {
            (
                symbol::<InitFn>(&library, "SDL_Init")?,
                symbol::<GetErrorFn>(&library, "SDL_GetError")?,
                symbol::<QuitFn>(&library, "SDL_Quit")?,
            )
        };
        Ok(Self {
            init,
            get_error,
            quit,
            _library: library,
        })
    }

    fn init_video(&self) -> InitResult<()> {
        debug!(flags = SDL_INIT_VIDEO, "calling SDL_Init");
        // SAFETY: called from the thread that owns the library handle.
        let status = unsafe { (self.init)(SDL_INIT_VIDEO) };
        if status == 0 {
            return Ok(());
        }
        Err(InitError::Sdl(self.last_error()))
    }

    fn last_error(&self) -> String {
        // SAFETY: SDL_GetError returns a NUL-terminated string owned by SDL,
        // valid until the next SDL call. It is copied out immediately.
        unsafe {
            let message = (self.get_error)();
            if message.is_null() {
                return String::new();
            }
            CStr::from_ptr(message).to_string_lossy().into_owned()
        }
    }
}

unsafe fn symbol<T: Copy>(library: &Library, name: &'static str) -> InitResult<T> {
    // SAFETY: the caller guarantees `T` is the symbol's real type.
    unsafe { library.get::<T>(name.as_bytes()) }
        .map(|sym| *sym)
        .map_err(|err| InitError::MissingSymbol {
            symbol: name,
            reason: err.to_string(),
        })
}

/// The SDL2 video subsystem.
pub struct Sdl2 {
    source: LibrarySource,
    api: Option<Api>,
}

impl Sdl2 {
    /// Create a backend that will load SDL2 from `source` on first `init`.
    pub fn new(source: LibrarySource) -> Self {
        Self { source, api: None }
    }

    /// Use the configured library path, or the platform's default names.
    pub fn from_config(config: &Config) -> Self {
        let source = match &config.library {
            Some(path) => LibrarySource::Explicit(path.clone()),
            None => LibrarySource::default(),
        };
        Self::new(source)
    }

    pub fn source(&self) -> &LibrarySource {
        &self.source
    }

    /// Whether the shared library has been opened.
    pub fn is_loaded(&self) -> bool {
        self.api.is_some()
    }
}

impl fmt::Debug for Sdl2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sdl2")
            .field("source", &self.source)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl VideoSubsystem for Sdl2 {
    fn init(&mut self) -> InitResult<()> {
        let api = match self.api.take() {
            Some(api) => api,
            None => Api::open(&self.source)?,
        };
        self.api.insert(api).init_video()
    }

    fn quit(&mut self) {
        if let Some(api) = &self.api {
            // SAFETY: SDL_Quit is safe to call whether or not SDL_Init succeeded.
            unsafe { (api.quit)() };
        }
    }
}
