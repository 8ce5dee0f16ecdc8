//! Method Registry + Metadata Extractor (C3).

use tracing::{debug, warn};

use super::class_registry::ClassRegistry;
use super::host::{ClassHandle, HostVm, MethodSymbol};

/// Per-method record (§3). Metadata fields are populated lazily, exactly
/// once, on first dispatch.
#[derive(Debug, Clone)]
pub struct MethodEntry {
    pub class_handle: ClassHandle,
    pub method_symbol: MethodSymbol,
    pub method_name: String,
    pub signature: String,
    pub extern_dll: Option<String>,
    pub extern_args: Option<String>,
    pub extern_ret: Option<String>,
    pub attrs_extracted: bool,
}

impl MethodEntry {
    fn new(class_handle: ClassHandle, method_symbol: MethodSymbol, signature: &str) -> Self {
        let method_name = signature
            .split('(')
            .next()
            .unwrap_or(signature)
            .to_string();
        Self {
            class_handle,
            method_symbol,
            method_name,
            signature: signature.to_string(),
            extern_dll: None,
            extern_args: None,
            extern_ret: None,
            attrs_extracted: false,
        }
    }
}

/// Flat table of `MethodEntry`, scanned linearly (same scale argument as
/// `ClassRegistry`, §4.2/§4.3).
#[derive(Debug, Default)]
pub struct MethodRegistry {
    entries: Vec<MethodEntry>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a method-binding request (§4.3). Returns `true` ("install the
    /// shared dispatch trampoline") only if `(module, class_name)` names a
    /// registered FFI class.
    pub fn on_method_bound(
        &mut self,
        classes: &ClassRegistry,
        host: &impl HostVm,
        module: &str,
        class_name: &str,
        signature: &str,
    ) -> bool {
        let Some(class_entry) = classes.find_by_names(module, class_name) else {
            return false;
        };
        let class_handle = class_entry.class_handle;
        let method_name = signature.split('(').next().unwrap_or(signature);

        let method_symbol = self.resolve_symbol(host, method_name);
        debug!(
            module,
            class = class_name,
            signature,
            symbol = method_symbol,
            "binding FFI foreign method"
        );

        if self.find(class_handle, method_symbol).is_none() {
            self.entries
                .push(MethodEntry::new(class_handle, method_symbol, signature));
        } else if method_symbol == 0 {
            // Two different unresolved methods on the same class both fall
            // back to symbol 0 (resolve_symbol); the uniqueness check above
            // means only the first one's skeleton entry survives, so this
            // method's own extern metadata is never recorded. Diagnostics
            // only — dispatch for a correctly-resolved method is unaffected.
            warn!(
                module,
                class = class_name,
                signature,
                "FFI method name collides with an existing unresolved-symbol entry; its metadata will not be tracked separately"
            );
        }
        true
    }

    /// Scan the interpreter's interned-method-name table for a name whose
    /// `(...)`-truncated form equals `method_name`. Symbol `0` (and a
    /// diagnostic warning) stands in when no such entry is found — that
    /// entry stays unreachable by the dispatcher but is kept for
    /// diagnostics, per §4.3.
    fn resolve_symbol(&self, host: &impl HostVm, method_name: &str) -> MethodSymbol {
        for candidate in 0..=MethodSymbol::MAX {
            if let Some(name) = host.resolve_method_name_by_symbol(candidate) {
                if name.split('(').next().unwrap_or(&name) == method_name {
                    return candidate;
                }
            }
        }
        warn!(method_name, "no interned symbol found for FFI method; keeping symbol = 0");
        0
    }

    pub fn find(&self, class_handle: ClassHandle, method_symbol: MethodSymbol) -> Option<&MethodEntry> {
        self.entries
            .iter()
            .find(|e| e.class_handle == class_handle && e.method_symbol == method_symbol)
    }

    pub fn find_mut(
        &mut self,
        class_handle: ClassHandle,
        method_symbol: MethodSymbol,
    ) -> Option<&mut MethodEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.class_handle == class_handle && e.method_symbol == method_symbol)
    }

    /// Insert a skeleton entry for a method the registry has never seen
    /// bound (§4.5 step 4: the trampoline may encounter a call for a method
    /// whose binding step was skipped, e.g. inherited `foreign` methods).
    pub fn find_or_insert(
        &mut self,
        class_handle: ClassHandle,
        method_symbol: MethodSymbol,
        host: &impl HostVm,
    ) -> &mut MethodEntry {
        if self.find(class_handle, method_symbol).is_none() {
            let signature = host
                .resolve_method_name_by_symbol(method_symbol)
                .unwrap_or_else(|| format!("<unknown symbol {}>", method_symbol));
            self.entries
                .push(MethodEntry::new(class_handle, method_symbol, &signature));
        }
        self.find_mut(class_handle, method_symbol).unwrap()
    }

    /// Idempotent metadata extraction (§4.3). Latched by `attrs_extracted`;
    /// a second call on an already-extracted entry is a no-op, matching the
    /// round-trip property in spec §8.
    pub fn extract_attrs(&mut self, host: &impl HostVm, class_handle: ClassHandle, method_symbol: MethodSymbol) {
        let Some(entry) = self.find_mut(class_handle, method_symbol) else {
            return;
        };
        if entry.attrs_extracted {
            return;
        }

        let Some(attrs) = host.class_reflective_attributes(class_handle) else {
            entry.attrs_extracted = true;
            return;
        };

        let signature_key = attrs
            .method_attrs
            .keys()
            .find(|key| {
                key.split_whitespace()
                    .last()
                    .map(|tail| tail == entry.signature.as_str())
                    .unwrap_or(false)
            })
            .cloned();

        let Some(signature_key) = signature_key else {
            entry.attrs_extracted = true;
            return;
        };

        if let Some(extern_group) = attrs.method_attrs[&signature_key].get("extern") {
            entry.extern_dll = extern_group.get("dll").and_then(|v| v.first()).cloned();
            entry.extern_args = extern_group.get("args").and_then(|v| v.first()).cloned();
            entry.extern_ret = extern_group.get("ret").and_then(|v| v.first()).cloned();
        }

        entry.attrs_extracted = true;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
