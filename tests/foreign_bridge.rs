//! End-to-end tests for the foreign-class FFI bridge against a real
//! compiled shared library (`tests/fixtures/yx_ffi_fixture.c`, built by
//! `build.rs`), covering the six scenarios in spec section 8.

use std::collections::HashMap;
use std::sync::Arc;

use yaoxiang::backends::common::Handle;
use yaoxiang::backends::interpreter::foreign::{
    AnnotationMap, CallValue, ClassHandle, ForeignBridge, HostVm, MethodSymbol,
    ReflectiveAttributes,
};

/// Minimal `HostVm` driving one class (`Math`) through a bind-then-call
/// cycle, the same shape as the crate's own `foreign::testkit::TestHost`
/// but kept local since test-only crate internals aren't visible here.
struct MathHost {
    class_handle: ClassHandle,
    symbols: HashMap<MethodSymbol, String>,
    attrs: ReflectiveAttributes,
    receiver: CallValue,
    args: Vec<CallValue>,
    active_symbol: Option<MethodSymbol>,
    result_numeric: Option<f64>,
    result_boolean: Option<bool>,
    aborted_message: Option<String>,
}

impl MathHost {
    fn new() -> Self {
        Self {
            class_handle: Handle::new(1),
            symbols: HashMap::new(),
            attrs: ReflectiveAttributes::default(),
            receiver: CallValue::Unit,
            args: Vec::new(),
            active_symbol: None,
            result_numeric: None,
            result_boolean: None,
            aborted_message: None,
        }
    }

    fn define_method(&mut self, signature: &str, symbol: MethodSymbol, dll: &str, args: &str, ret: &str) {
        self.symbols.insert(symbol, signature.to_string());

        let mut extern_group = HashMap::new();
        extern_group.insert("dll".to_string(), vec![dll.to_string()]);
        extern_group.insert("args".to_string(), vec![args.to_string()]);
        extern_group.insert("ret".to_string(), vec![ret.to_string()]);
        let mut groups: AnnotationMap = HashMap::new();
        groups.insert("extern".to_string(), extern_group);
        self.attrs.method_attrs.insert(signature.to_string(), groups);
    }

    fn prepare_call(&mut self, args: Vec<CallValue>, symbol: MethodSymbol) {
        self.receiver = CallValue::Class(self.class_handle);
        self.args = args;
        self.active_symbol = Some(symbol);
        self.result_numeric = None;
        self.result_boolean = None;
        self.aborted_message = None;
    }
}

impl HostVm for MathHost {
    fn stack_top_class(&self) -> Option<ClassHandle> {
        self.receiver.receiver_class()
    }

    fn class_superclass_name(&self, _class: ClassHandle) -> Option<String> {
        Some("FFI".to_string())
    }

    fn class_reflective_attributes(&self, _class: ClassHandle) -> Option<Arc<ReflectiveAttributes>> {
        Some(Arc::new(self.attrs.clone()))
    }

    fn resolve_method_name_by_symbol(&self, symbol: MethodSymbol) -> Option<String> {
        self.symbols.get(&symbol).cloned()
    }

    fn current_frame_method_symbol(&self) -> Option<MethodSymbol> {
        self.active_symbol
    }

    fn module_of_class(&self, _class: ClassHandle) -> Option<String> {
        Some("main".to_string())
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

    fn set_result_string(&mut self, _value: &str) {}

    fn abort_with_message(&mut self, message: &str) {
        self.aborted_message = Some(message.to_string());
    }
}

fn fixture_dir() -> &'static str {
    env!("YX_FFI_FIXTURE_DIR")
}

fn harness() -> (ForeignBridge, MathHost) {
    // Safety: test-process-local env var, read back only by this crate's
    // own `search_dir()` on the same thread before any other test mutates it.
    unsafe { std::env::set_var("YAOXIANG_FFI_LIB_DIR", fixture_dir()); }

    let mut bridge = ForeignBridge::new();
    let mut host = MathHost::new();
    bridge.install_ffi(&host);
    let class_handle = host.class_handle;
    bridge.on_class_bound(&host, "main", "Math", class_handle);
    (bridge, host)
}

#[test]
fn no_args_int_return() {
    let (mut bridge, mut host) = harness();
    host.define_method("seven()", 1, "yx_ffi_fixture", "", "int");
    bridge.on_method_bound(&host, "main", "Math", "seven()");

    host.prepare_call(vec![], 1);
    bridge.dispatch(&mut host);

    assert_eq!(host.aborted_message, None);
    assert_eq!(host.result_numeric, Some(7.0));
}

#[test]
fn two_int_sum() {
    let (mut bridge, mut host) = harness();
    host.define_method("add(_,_)", 2, "yx_ffi_fixture", "int,int", "int");
    bridge.on_method_bound(&host, "main", "Math", "add(_,_)");

    host.prepare_call(vec![CallValue::Int(2), CallValue::Int(3)], 2);
    bridge.dispatch(&mut host);

    assert_eq!(host.aborted_message, None);
    assert_eq!(host.result_numeric, Some(5.0));
}

#[test]
fn i64_passthrough() {
    let (mut bridge, mut host) = harness();
    host.define_method("passthru(_)", 3, "yx_ffi_fixture", "i64", "i64");
    bridge.on_method_bound(&host, "main", "Math", "passthru(_)");

    host.prepare_call(vec![CallValue::Int(1_073_741_824)], 3);
    bridge.dispatch(&mut host);

    assert_eq!(host.aborted_message, None);
    assert_eq!(host.result_numeric, Some(1_073_741_824.0));
}

#[test]
fn string_length_via_char_ptr() {
    let (mut bridge, mut host) = harness();
    host.define_method("slen(_)", 4, "yx_ffi_fixture", "char*", "int");
    bridge.on_method_bound(&host, "main", "Math", "slen(_)");

    host.prepare_call(vec![CallValue::String(Arc::from("hello"))], 4);
    bridge.dispatch(&mut host);

    assert_eq!(host.aborted_message, None);
    assert_eq!(host.result_numeric, Some(5.0));
}

#[test]
fn bool_marshalling() {
    let (mut bridge, mut host) = harness();
    host.define_method("is_nonzero(_)", 5, "yx_ffi_fixture", "int", "bool");
    bridge.on_method_bound(&host, "main", "Math", "is_nonzero(_)");

    host.prepare_call(vec![CallValue::Int(0)], 5);
    bridge.dispatch(&mut host);
    assert_eq!(host.aborted_message, None);
    assert_eq!(host.result_boolean, Some(false));

    host.prepare_call(vec![CallValue::Int(7)], 5);
    bridge.dispatch(&mut host);
    assert_eq!(host.aborted_message, None);
    assert_eq!(host.result_boolean, Some(true));
}

#[test]
fn missing_library_aborts_but_leaves_vm_usable() {
    let (mut bridge, mut host) = harness();
    host.define_method("boom()", 6, "doesnotexist", "", "void");
    bridge.on_method_bound(&host, "main", "Math", "boom()");

    host.prepare_call(vec![], 6);
    bridge.dispatch(&mut host);
    assert_eq!(host.aborted_message.as_deref(), Some("Failed to load dynamic library"));

    // The VM remains usable for subsequent, unrelated calls.
    host.define_method("seven()", 1, "yx_ffi_fixture", "", "int");
    bridge.on_method_bound(&host, "main", "Math", "seven()");
    host.prepare_call(vec![], 1);
    bridge.dispatch(&mut host);
    assert_eq!(host.aborted_message, None);
    assert_eq!(host.result_numeric, Some(7.0));
}
