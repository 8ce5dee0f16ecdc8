//! Wires `ForeignBridge` against a minimal `HostVm` and calls through to a
//! compiled `libyx_ffi_fixture.so`, playing the role the original C `main()`
//! plays for `original_source/main.c`: a bind-time announcement followed by
//! one dispatch per scenario in spec.md section 8.
//!
//! Run with `cargo run --example foreign_bridge`.

use std::collections::HashMap;
use std::sync::Arc;

use yaoxiang::backends::common::Handle;
use yaoxiang::backends::interpreter::foreign::{
    AnnotationMap, CallValue, ClassHandle, ForeignBridge, HostVm, MethodSymbol,
    ReflectiveAttributes,
};

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

    fn define_method(&mut self, signature: &str, symbol: MethodSymbol, args: &str, ret: &str) {
        self.symbols.insert(symbol, signature.to_string());

        let mut extern_group = HashMap::new();
        extern_group.insert("dll".to_string(), vec!["yx_ffi_fixture".to_string()]);
        extern_group.insert("args".to_string(), vec![args.to_string()]);
        extern_group.insert("ret".to_string(), vec![ret.to_string()]);
        let mut groups: AnnotationMap = HashMap::new();
        groups.insert("extern".to_string(), extern_group);
        self.attrs.method_attrs.insert(signature.to_string(), groups);
    }

    fn call(&mut self, bridge: &mut ForeignBridge, args: Vec<CallValue>, symbol: MethodSymbol) {
        self.receiver = CallValue::Class(self.class_handle);
        self.args = args;
        self.active_symbol = Some(symbol);
        self.result_numeric = None;
        self.result_boolean = None;
        self.aborted_message = None;
        bridge.dispatch(self);
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

fn main() {
    tracing_subscriber::fmt::init();

    // Point the bridge at the fixture library `build.rs` compiled alongside
    // this crate, the same one `tests/foreign_bridge.rs` exercises.
    unsafe { std::env::set_var("YAOXIANG_FFI_LIB_DIR", env!("YX_FFI_FIXTURE_DIR")); }

    let mut bridge = ForeignBridge::new();
    let mut host = MathHost::new();
    bridge.install_ffi(&host);

    let class_handle = host.class_handle;
    bridge.on_class_bound(&host, "main", "Math", class_handle);

    host.define_method("seven()", 1, "", "int");
    bridge.on_method_bound(&host, "main", "Math", "seven()");
    host.call(&mut bridge, vec![], 1);
    println!("Math.seven() = {:?}", host.result_numeric);

    host.define_method("add(_,_)", 2, "int,int", "int");
    bridge.on_method_bound(&host, "main", "Math", "add(_,_)");
    host.call(&mut bridge, vec![CallValue::Int(2), CallValue::Int(3)], 2);
    println!("Math.add(2, 3) = {:?}", host.result_numeric);

    host.define_method("slen(_)", 3, "char*", "int");
    bridge.on_method_bound(&host, "main", "Math", "slen(_)");
    host.call(&mut bridge, vec![CallValue::String(Arc::from("hello"))], 3);
    println!("Math.slen(\"hello\") = {:?}", host.result_numeric);

    host.define_method("is_nonzero(_)", 4, "int", "bool");
    bridge.on_method_bound(&host, "main", "Math", "is_nonzero(_)");
    host.call(&mut bridge, vec![CallValue::Int(0)], 4);
    println!("Math.is_nonzero(0) = {:?}", host.result_boolean);

    host.call(&mut bridge, vec![CallValue::Int(7)], 4);
    println!("Math.is_nonzero(7) = {:?}", host.result_boolean);

    bridge.shutdown_ffi();
}
