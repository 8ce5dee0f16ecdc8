//! Error kinds for the foreign-class bridge.
//!
//! Every variant corresponds to exactly one of the abort points the
//! dispatch trampoline can hit (§7 of the design doc). The `Display`
//! message is the fixed, stable text that gets written into the script's
//! aborted-fiber error value — it must never be reworded, since scripts may
//! match on it.

use thiserror::Error;

/// Errors surfaced by the foreign-class bridge.
///
/// Every variant aborts the active fiber rather than the host process; see
/// `HostVm::abort_with_message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForeignError {
    /// §4.5 step 1: the call receiver did not resolve to a registered FFI
    /// class or one of its instances.
    #[error("FFI foreign class not found or not properly registered")]
    UnregisteredClass,

    /// §4.5 step 6: `extern_dll` was never populated for this method.
    #[error("Missing FFI metadata")]
    MissingMetadata,

    /// §4.4: the short name did not resolve to an openable shared library,
    /// or the class's library cache is already at `N_LIB` capacity.
    #[error("Failed to load dynamic library")]
    LibraryLoadFailed,

    /// §4.5 step 7: the library loaded, but the C symbol was absent.
    #[error("Function not found in library")]
    SymbolNotFound,

    /// §4.5 step 8: an `args`/`ret` tag outside `{int, i64, char*, bool, void}`.
    #[error("Unsupported FFI type")]
    UnsupportedType,

    /// §4.5 step 9: libffi failed to prepare the call-interface descriptor.
    #[error("FFI preparation failed")]
    CifPrepFailed,
}

impl ForeignError {
    /// The fixed message surfaced to the script, independent of `Display`
    /// formatting flags (kept as an explicit accessor since the trampoline
    /// writes this into a call-API slot, not a formatter).
    pub fn script_message(&self) -> &'static str {
        match self {
            ForeignError::UnregisteredClass => {
                "FFI foreign class not found or not properly registered"
            }
            ForeignError::MissingMetadata => "Missing FFI metadata",
            ForeignError::LibraryLoadFailed => "Failed to load dynamic library",
            ForeignError::SymbolNotFound => "Function not found in library",
            ForeignError::UnsupportedType => "Unsupported FFI type",
            ForeignError::CifPrepFailed => "FFI preparation failed",
        }
    }
}
