//! Dispatch Trampoline (C5) — the shared entrypoint installed for every
//! bound foreign method (§4.5).

use libffi::middle::{Cif, CodePtr};
use libloading::Symbol;
use tracing::trace;

use super::class_registry::ClassRegistry;
use super::error::ForeignError;
use super::host::{CallValue, HostVm};
use super::marshal;
use super::method_registry::MethodRegistry;

/// Run the full algorithm of §4.5 for the call currently active on `host`'s
/// frame, surfacing any failure through `HostVm::abort_with_message` rather
/// than returning it — every foreign method shares this one function, so
/// there is no caller left to propagate a `Result` to.
pub fn dispatch<H: HostVm>(classes: &mut ClassRegistry, methods: &mut MethodRegistry, host: &mut H) {
    if let Err(err) = dispatch_inner(classes, methods, host) {
        host.abort_with_message(err.script_message());
    }
}

fn dispatch_inner<H: HostVm>(
    classes: &mut ClassRegistry,
    methods: &mut MethodRegistry,
    host: &mut H,
) -> Result<(), ForeignError> {
    // 1. Identify the target class from the receiver slot.
    let receiver = host.receiver_slot();
    let class_handle = receiver.receiver_class().ok_or(ForeignError::UnregisteredClass)?;

    let class_name = classes
        .find_by_handle(class_handle)
        .ok_or(ForeignError::UnregisteredClass)?
        .class_name
        .clone();

    // 2. Module name — diagnostics only.
    let module_name = host
        .module_of_class(class_handle)
        .unwrap_or_else(|| "<unknown>".to_string());

    // Supplemented feature (§8 #2): diagnostic trace of the receiver's
    // resolved class identity, mirroring the original host's pre-dispatch
    // type dump.
    trace!(module = %module_name, class = %class_name, "dispatching FFI foreign call");

    // 3. Method symbol from the active call frame.
    let method_symbol = host
        .current_frame_method_symbol()
        .ok_or(ForeignError::UnregisteredClass)?;

    // 4. Look up (or insert a skeleton for) the MethodEntry.
    methods.find_or_insert(class_handle, method_symbol, &*host);

    // 5. Ensure metadata has been extracted (idempotent).
    methods.extract_attrs(&*host, class_handle, method_symbol);

    let entry = methods
        .find(class_handle, method_symbol)
        .expect("find_or_insert above guarantees an entry exists");

    // 6. Defaults.
    let ret_tag = marshal::parse_ret(entry.extern_ret.as_deref())?;
    let args_raw = entry.extern_args.as_deref();
    let dll_short_name = entry
        .extern_dll
        .clone()
        .ok_or(ForeignError::MissingMetadata)?;
    let method_name = entry.method_name.clone();

    // 7. Resolve the library, then the C symbol fresh for this call (§4.4:
    // "symbol resolution... is always performed fresh per call").
    let class_entry = classes
        .find_by_handle_mut(class_handle)
        .ok_or(ForeignError::UnregisteredClass)?;
    let library = class_entry.library_cache.get_or_load(&dll_short_name)?;
    let symbol: Symbol<*const ()> = unsafe {
        library
            .get(method_name.as_bytes())
            .map_err(|_| ForeignError::SymbolNotFound)?
    };
    let code_ptr = CodePtr::from_ptr(*symbol as *const _);

    // 8. Parse the `args`/`ret` type strings and read the argument slots.
    let arg_tags = marshal::parse_args(args_raw)?;
    let slots: Vec<CallValue> = (0..arg_tags.len())
        .map(|i| host.arg_slot(i).unwrap_or(CallValue::Unit))
        .collect();
    let marshalled_args = marshal::marshal_args(&arg_tags, &slots)?;
    let ffi_args = marshalled_args.as_ffi_args();

    // 9. Construct the call-interface descriptor for the platform default
    // ABI.
    let ffi_arg_types = arg_tags.iter().map(|t| t.ffi_type()).collect::<Vec<_>>();
    let cif = Cif::new(ffi_arg_types, ret_tag.ffi_type());

    // 10 + 11. Invoke, then write the unmarshalled result into slot 0.
    // Safety: `code_ptr` was resolved from a symbol looked up by the exact
    // name declared in the method's `extern` annotation, and `cif` was
    // built from the types declared in the same annotation; a mismatch
    // here is a script authoring error the bridge cannot detect further.
    let result = unsafe { marshal::call(&cif, code_ptr, &ffi_args, ret_tag) };
    match result {
        marshal::NativeReturn::Void => {}
        marshal::NativeReturn::Int(v) => host.set_result_numeric(v as f64),
        marshal::NativeReturn::I64(v) => host.set_result_numeric(v as f64),
        marshal::NativeReturn::Bool(v) => host.set_result_boolean(v),
    }

    // 12. Per-call scratch (`marshalled_args`, `ffi_args`, `cif`) is
    // released here, on every path, since none of it escapes this function.
    Ok(())
}
