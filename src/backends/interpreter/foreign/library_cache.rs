//! Dynamic-Library Cache (C4).
//!
//! One of these lives inside each `ClassEntry`. Opens libraries lazily on
//! first use by a method of that class; releases them all, in registration
//! order, when the owning class is finalized (§4.4).

use std::path::{Path, PathBuf};

use libloading::Library;
use smallvec::SmallVec;
use tracing::{debug, warn};

use super::error::ForeignError;

/// Floor mandated by spec §3 (`N_LIB >= 10`); the crate uses a slightly
/// larger default so the common case of a handful of bound libraries never
/// spills onto the heap.
pub const N_LIB: usize = 16;

/// Default search directory, per spec §6 ("Environment"): `./`. Never
/// altered by configuration — only the search directory used when
/// `YAOXIANG_FFI_LIB_DIR` is unset.
pub const DEFAULT_LIB_DIR: &str = "./";

/// Environment variable that may override the search directory. The
/// `./lib<name>.so` *filename* convention itself is never overridden — see
/// spec §6 and §4.4.
pub const LIB_DIR_ENV_VAR: &str = "YAOXIANG_FFI_LIB_DIR";

/// Resolve the directory libraries are searched in, per the config
/// hierarchy this crate follows elsewhere (env > project/user config >
/// default): `YAOXIANG_FFI_LIB_DIR` if set, else `[foreign] lib_search_dir`
/// from the user config, else the fixed default `./`. The config lookup is
/// best-effort — a missing or unparsable config file falls through to the
/// default exactly as if `foreign.lib_search_dir` had been absent.
pub fn search_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(LIB_DIR_ENV_VAR) {
        return PathBuf::from(dir);
    }
    if let Ok(config) = crate::util::config::load_user_config() {
        if let Some(dir) = config.foreign.lib_search_dir {
            return dir;
        }
    }
    PathBuf::from(DEFAULT_LIB_DIR)
}

/// Translate a short library name to the spec-mandated default file name:
/// `lib<name>.so`, resolved under `dir`.
fn default_library_path(dir: &Path, short_name: &str) -> PathBuf {
    dir.join(format!("lib{}.so", short_name))
}

/// A platform-native fallback file name, tried only if the mandatory
/// default above does not resolve. This is the parametrisation spec §4.4
/// explicitly allows implementers to add, as long as the default is still
/// honoured first.
#[cfg(target_os = "windows")]
fn platform_fallback_path(dir: &Path, short_name: &str) -> PathBuf {
    dir.join(format!("{}.dll", short_name))
}

#[cfg(target_os = "macos")]
fn platform_fallback_path(dir: &Path, short_name: &str) -> PathBuf {
    dir.join(format!("lib{}.dylib", short_name))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_fallback_path(dir: &Path, short_name: &str) -> PathBuf {
    // same as the default on unix-like targets; kept as a distinct function
    // so the call site doesn't need a cfg of its own.
    default_library_path(dir, short_name)
}

/// Per-class cache of loaded library handles, keyed by short name.
#[derive(Debug, Default)]
pub struct LibraryCache {
    handles: SmallVec<[(String, Library); N_LIB]>,
}

impl LibraryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find-or-load a library by its script-level short name (§4.4).
    pub fn get_or_load(&mut self, short_name: &str) -> Result<&Library, ForeignError> {
        if let Some(pos) = self.handles.iter().position(|(name, _)| name == short_name) {
            return Ok(&self.handles[pos].1);
        }

        if self.handles.len() >= N_LIB {
            warn!(short_name, "FFI library cache exhausted (N_LIB = {})", N_LIB);
            return Err(ForeignError::LibraryLoadFailed);
        }

        let dir = search_dir();
        let default_path = default_library_path(&dir, short_name);
        let loaded = unsafe { Library::new(&default_path) }.or_else(|_| {
            let fallback = platform_fallback_path(&dir, short_name);
            unsafe { Library::new(&fallback) }
        });

        let library = loaded.map_err(|_| ForeignError::LibraryLoadFailed)?;
        debug!(short_name, path = %default_path.display(), "opened FFI dynamic library");
        self.handles.push((short_name.to_string(), library));
        Ok(&self.handles.last().unwrap().1)
    }

    /// Release every cached handle, in registration order (§4.4, §3
    /// Lifecycle). Library destructors run as each `Library` is dropped.
    pub fn close_all(&mut self) {
        for (name, library) in self.handles.drain(..) {
            debug!(short_name = name, "closing FFI dynamic library");
            drop(library);
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
