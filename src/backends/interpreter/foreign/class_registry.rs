//! Class Registry (C2).
//!
//! Captures FFI-marked classes at class-binding time — only then is the
//! superclass chain authoritatively visible on the operand stack (§4.2).

use tracing::debug;

use super::host::{ClassHandle, HostVm};
use super::library_cache::LibraryCache;

/// Direct-superclass name that opts a script class into the bridge.
pub const FFI_MARKER_NAME: &str = "FFI";

/// Per-class record: identity, its `(module, class)` name pair, and its
/// lazily-populated dynamic-library cache (§3).
#[derive(Debug)]
pub struct ClassEntry {
    pub module_name: String,
    pub class_name: String,
    pub class_handle: ClassHandle,
    pub library_cache: LibraryCache,
}

/// Flat table of `ClassEntry`, scanned linearly — acceptable at the scale
/// this bridge operates at (§4.2: "linear scan is acceptable at this
/// scale").
#[derive(Debug, Default)]
pub struct ClassRegistry {
    entries: Vec<ClassEntry>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a newly-bound class. Registers a `ClassEntry` iff the class's
    /// direct superclass name equals [`FFI_MARKER_NAME`]; otherwise a no-op.
    ///
    /// Returns `true` if the class was registered.
    pub fn on_class_bound(
        &mut self,
        host: &impl HostVm,
        module: &str,
        class_name: &str,
        class_handle: ClassHandle,
    ) -> bool {
        if host.class_superclass_name(class_handle).as_deref() != Some(FFI_MARKER_NAME) {
            return false;
        }
        debug!(module, class = class_name, "registering FFI foreign class");
        self.entries.push(ClassEntry {
            module_name: module.to_string(),
            class_name: class_name.to_string(),
            class_handle,
            library_cache: LibraryCache::new(),
        });
        true
    }

    pub fn find_by_names(&self, module: &str, class_name: &str) -> Option<&ClassEntry> {
        self.entries
            .iter()
            .find(|e| e.module_name == module && e.class_name == class_name)
    }

    pub fn find_by_handle(&self, class_handle: ClassHandle) -> Option<&ClassEntry> {
        self.entries.iter().find(|e| e.class_handle == class_handle)
    }

    pub fn find_by_handle_mut(&mut self, class_handle: ClassHandle) -> Option<&mut ClassEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.class_handle == class_handle)
    }

    /// Release every cached library handle for a finalized class, in
    /// registration order, and drop its entry (§3 Lifecycle).
    pub fn on_class_finalized(&mut self, class_handle: ClassHandle) {
        if let Some(idx) = self
            .entries
            .iter()
            .position(|e| e.class_handle == class_handle)
        {
            let mut entry = self.entries.remove(idx);
            debug!(
                module = entry.module_name,
                class = entry.class_name,
                "finalizing FFI foreign class"
            );
            entry.library_cache.close_all();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Snapshot of every currently-registered class identity, used by
    /// `ForeignBridge::shutdown_ffi` to finalize them all without holding a
    /// live borrow of `self` across the loop.
    pub fn handles(&self) -> Vec<ClassHandle> {
        self.entries.iter().map(|e| e.class_handle).collect()
    }
}
