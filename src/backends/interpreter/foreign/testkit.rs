//! A reference `HostVm` used only by this crate's own tests.
//!
//! Modeled on the fiber/call-frame state `original_source/main.c`'s
//! `executeForeignFn` dumps before a foreign call (receiver slot, argument
//! slots, per-slot type tag) — a minimal in-memory stand-in for the real
//! bytecode interpreter's object model and operand stack.

use std::collections::HashMap;
use std::sync::Arc;

use super::host::{AnnotationMap, CallValue, ClassHandle, HostVm, MethodSymbol, ReflectiveAttributes};
use crate::backends::common::Handle;

struct ClassInfo {
    module: String,
    superclass: Option<String>,
    symbols: HashMap<MethodSymbol, String>,
    attrs: ReflectiveAttributes,
}

/// An in-memory stand-in for the embedded interpreter, sufficient to drive
/// `ForeignBridge` through a full bind-then-call cycle in tests.
pub struct TestHost {
    classes: HashMap<ClassHandle, ClassInfo>,
    next_handle: usize,

    // Active call-frame state, set up by `prepare_call` before dispatch.
    receiver: CallValue,
    args: Vec<CallValue>,
    active_symbol: Option<MethodSymbol>,

    // Observed outcome of the last dispatch.
    result_numeric: Option<f64>,
    result_boolean: Option<bool>,
    result_string: Option<String>,
    aborted_message: Option<String>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
            next_handle: 1,
            receiver: CallValue::Unit,
            args: Vec::new(),
            active_symbol: None,
            result_numeric: None,
            result_boolean: None,
            result_string: None,
            aborted_message: None,
        }
    }

    /// Register a new class with the given direct superclass name (`Some("FFI")`
    /// to opt into the bridge, as a script author would via `class Math extends FFI`).
    pub fn define_class(&mut self, module: &str, class_name: &str, superclass: Option<&str>) -> ClassHandle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        self.classes.insert(
            handle,
            ClassInfo {
                module: module.to_string(),
                superclass: superclass.map(str::to_string),
                symbols: HashMap::new(),
                attrs: ReflectiveAttributes::default(),
            },
        );
        let _ = class_name; // identity is the handle; name only matters to the registries
        handle
    }

    /// Intern a method name under a symbol, as the compiler's constant pool
    /// would when it first encounters a `CALL_n` to that name.
    pub fn define_method(&mut self, class_handle: ClassHandle, signature: &str, symbol: MethodSymbol) {
        if let Some(info) = self.classes.get_mut(&class_handle) {
            info.symbols.insert(symbol, signature.to_string());
        }
    }

    /// Attach an `extern { dll, args, ret }` annotation group to a method,
    /// as the frontend would from a parsed annotation block.
    pub fn set_extern(&mut self, class_handle: ClassHandle, signature: &str, dll: &str, args: &str, ret: &str) {
        if let Some(info) = self.classes.get_mut(&class_handle) {
            let mut attrs = HashMap::new();
            attrs.insert("dll".to_string(), vec![dll.to_string()]);
            attrs.insert("args".to_string(), vec![args.to_string()]);
            attrs.insert("ret".to_string(), vec![ret.to_string()]);

            let mut groups: AnnotationMap = HashMap::new();
            groups.insert("extern".to_string(), attrs);
            info.attrs.method_attrs.insert(signature.to_string(), groups);
        }
    }

    /// Arrange the call-API slots and active frame for one dispatch: slot 0
    /// is `receiver`, slots 1.. are `args`, and the frame's in-flight
    /// `CALL_n` operand is `method_symbol`.
    pub fn prepare_call(&mut self, receiver: CallValue, args: Vec<CallValue>, method_symbol: MethodSymbol) {
        self.receiver = receiver;
        self.args = args;
        self.active_symbol = Some(method_symbol);
        self.result_numeric = None;
        self.result_boolean = None;
        self.result_string = None;
        self.aborted_message = None;
    }

    pub fn class_receiver(class_handle: ClassHandle) -> CallValue {
        CallValue::Class(class_handle)
    }

    pub fn result_numeric(&self) -> Option<f64> {
        self.result_numeric
    }

    pub fn result_boolean(&self) -> Option<bool> {
        self.result_boolean
    }

    pub fn aborted_message(&self) -> Option<&str> {
        self.aborted_message.as_deref()
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostVm for TestHost {
    fn stack_top_class(&self) -> Option<ClassHandle> {
        self.receiver.receiver_class()
    }

    fn class_superclass_name(&self, class: ClassHandle) -> Option<String> {
        self.classes.get(&class).and_then(|c| c.superclass.clone())
    }

    fn class_reflective_attributes(&self, class: ClassHandle) -> Option<Arc<ReflectiveAttributes>> {
        self.classes.get(&class).map(|c| Arc::new(c.attrs.clone()))
    }

    fn resolve_method_name_by_symbol(&self, symbol: MethodSymbol) -> Option<String> {
        self.classes.values().find_map(|c| c.symbols.get(&symbol).cloned())
    }

    fn current_frame_method_symbol(&self) -> Option<MethodSymbol> {
        self.active_symbol
    }

    fn module_of_class(&self, class: ClassHandle) -> Option<String> {
        self.classes.get(&class).map(|c| c.module.clone())
    }

    fn receiver_slot(&self) -> CallValue {
        self.receiver.clone()
    }

    fn arg_slot(&self, index: usize) -> Option<CallValue> {
        self.args.get(index).cloned()
    }

    fn set_result_numeric(&mut self, value: f64) {
        self.result_numeric = Some(value);
    }

    fn set_result_boolean(&mut self, value: bool) {
        self.result_boolean = Some(value);
    }

    fn set_result_string(&mut self, value: &str) {
        self.result_string = Some(value.to_string());
    }

    fn abort_with_message(&mut self, message: &str) {
        self.aborted_message = Some(message.to_string());
    }
}
