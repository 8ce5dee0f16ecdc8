//! Foreign-class FFI bridge.
//!
//! Wires the Host-VM Adapter (C1), Class Registry (C2), Method Registry +
//! Metadata Extractor (C3), Dynamic-Library Cache (C4, owned per class
//! inside C2) and Dispatch Trampoline (C5) into a single facade an embedder
//! installs onto its interpreter instance.

pub mod class_registry;
pub mod error;
pub mod host;
pub mod library_cache;
pub mod marshal;
pub mod method_registry;
pub mod trampoline;

#[cfg(test)]
pub mod testkit;

pub use class_registry::{ClassEntry, ClassRegistry, FFI_MARKER_NAME};
pub use error::ForeignError;
pub use host::{AnnotationMap, CallValue, ClassHandle, HostVm, MethodSymbol, ReflectiveAttributes};
pub use library_cache::{LibraryCache, DEFAULT_LIB_DIR, LIB_DIR_ENV_VAR, N_LIB};
pub use method_registry::{MethodEntry, MethodRegistry};

use tracing::debug;

/// Owns both registries for one VM instance. `!Sync` by convention — no
/// internal synchronization is added, matching the single-threaded
/// cooperative model (§5); an embedder sharing a VM across threads is out
/// of scope.
pub struct ForeignBridge {
    classes: ClassRegistry,
    methods: MethodRegistry,
    ignored_modules: Vec<String>,
    installed: bool,
}

impl ForeignBridge {
    pub fn new() -> Self {
        Self {
            classes: ClassRegistry::new(),
            methods: MethodRegistry::new(),
            ignored_modules: Vec::new(),
            installed: false,
        }
    }

    /// Exclude a module from ever being scanned for the `FFI` marker (§8
    /// Supplemented Features #1, generalizing the original host's
    /// `meta`/`random` special cases). Defaults to empty.
    pub fn ignore_module(&mut self, module: impl Into<String>) {
        self.ignored_modules.push(module.into());
    }

    fn is_ignored(&self, module: &str) -> bool {
        self.ignored_modules.iter().any(|m| m == module)
    }

    /// Registers the bind-time hooks on `host`; idempotent per VM (§6,
    /// §8 round-trip property).
    pub fn install_ffi(&mut self, _host: &impl HostVm) {
        if self.installed {
            return;
        }
        self.installed = true;
        debug!("FFI bridge installed");
    }

    /// Tears down both registries, forcing release of every surviving
    /// library handle (§6).
    pub fn shutdown_ffi(&mut self) {
        for handle in self.classes.handles() {
            self.classes.on_class_finalized(handle);
        }
        self.methods = MethodRegistry::new();
        self.installed = false;
        debug!("FFI bridge shut down");
    }

    /// Class-bind hook (§4.2). Returns whether the class was registered.
    pub fn on_class_bound(
        &mut self,
        host: &impl HostVm,
        module: &str,
        class_name: &str,
        class_handle: ClassHandle,
    ) -> bool {
        if self.is_ignored(module) {
            return false;
        }
        self.classes.on_class_bound(host, module, class_name, class_handle)
    }

    /// Class-finalize hook (§3 Lifecycle).
    pub fn on_class_finalized(&mut self, class_handle: ClassHandle) {
        self.classes.on_class_finalized(class_handle);
    }

    /// Method-bind hook (§4.3). Returns whether the shared dispatch
    /// trampoline should be installed for this method.
    pub fn on_method_bound(
        &mut self,
        host: &impl HostVm,
        module: &str,
        class_name: &str,
        signature: &str,
    ) -> bool {
        if self.is_ignored(module) {
            return false;
        }
        self.methods
            .on_method_bound(&self.classes, host, module, class_name, signature)
    }

    /// The shared dispatch entrypoint (C5), installed for every bound
    /// foreign method (§4.3: "all foreign methods share one entrypoint").
    pub fn dispatch(&mut self, host: &mut impl HostVm) {
        trampoline::dispatch(&mut self.classes, &mut self.methods, host);
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

impl Default for ForeignBridge {
    fn default() -> Self {
        Self::new()
    }
}
