//! Host-VM Adapter (C1).
//!
//! A language-neutral capability set over whatever interpreter embeds this
//! bridge. The bridge never reaches past this trait into the VM's bytecode,
//! GC, or object model — those remain the embedder's concern (spec §1
//! Non-goals).

use std::sync::Arc;

use crate::backends::common::Handle;

/// Identity of a script class object, as seen by the bridge.
///
/// Reuses the crate's existing opaque-handle type (`backends::common::Handle`,
/// otherwise used for heap allocations) since both play the same role here:
/// an index compared only by identity, never dereferenced by the holder.
pub type ClassHandle = Handle;

/// The interpreter's interned-method-name index, as used by `CALL_n` opcodes.
pub type MethodSymbol = u16;

/// Annotation group map: group name (e.g. `"extern"`) -> attribute name
/// (e.g. `"dll"`) -> its attached list of strings.
pub type AnnotationMap = std::collections::HashMap<String, std::collections::HashMap<String, Vec<String>>>;

/// The reflective attribute container for one class: a pair of maps, per
/// spec §4.1 — class-level annotations, and a method-level map keyed by the
/// full `name(params)` signature.
#[derive(Debug, Clone, Default)]
pub struct ReflectiveAttributes {
    /// Annotations attached directly to the class.
    pub class_attrs: AnnotationMap,
    /// Annotations attached to each method, keyed by its full signature
    /// (the trailing whitespace-delimited token of the reflective key, per
    /// §4.3 and the Reflective-attribute-shape design note in §9).
    pub method_attrs: std::collections::HashMap<String, AnnotationMap>,
}

/// A tagged value as it crosses the call-API slots.
///
/// Deliberately a small, bridge-local lattice — the interpreter's internal
/// `RuntimeValue` carries far more (lists, dicts, closures, async values)
/// than marshalling ever needs; the adapter boundary (C1) only has to speak
/// in terms of what the trampoline reads from or writes to a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum CallValue {
    /// `null` in script terms.
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Arc<str>),
    /// The class value itself (e.g. a static foreign method's receiver).
    Class(ClassHandle),
    /// An instance of the named class.
    Instance(ClassHandle),
}

impl CallValue {
    /// Coerce to an integer the way §4.5's argument marshalling table
    /// requires for `int`/`i64` tags.
    pub fn to_int(&self) -> Option<i64> {
        match self {
            CallValue::Int(v) => Some(*v),
            CallValue::Float(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Borrow as a string for the `char*` marshalling rule (§4.5): the
    /// argument borrows the script string's internal buffer for the
    /// duration of the call.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CallValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The class this value's identity resolves to for dispatch purposes:
    /// itself if it already is a class, or its owning class if it is an
    /// instance. `None` for anything else (§4.5 step 1).
    pub fn receiver_class(&self) -> Option<ClassHandle> {
        match self {
            CallValue::Class(c) => Some(*c),
            CallValue::Instance(c) => Some(*c),
            _ => None,
        }
    }
}

/// The capability set the foreign-class bridge requires of its host
/// interpreter (§4.1).
///
/// Implementors own the actual bytecode VM, fiber, and object model; this
/// trait is the entirety of what the bridge is allowed to ask of them.
pub trait HostVm {
    /// Inspect the value currently at the top of the active operand stack;
    /// if it is a class value, return its identity.
    fn stack_top_class(&self) -> Option<ClassHandle>;

    /// The direct superclass name of a class, if any.
    fn class_superclass_name(&self, class: ClassHandle) -> Option<String>;

    /// The class's reflective attribute map, if the host tracks one for it.
    fn class_reflective_attributes(&self, class: ClassHandle) -> Option<Arc<ReflectiveAttributes>>;

    /// Reverse-lookup a method name from its interned symbol index.
    fn resolve_method_name_by_symbol(&self, symbol: MethodSymbol) -> Option<String>;

    /// The two-byte operand of the `CALL_n` instruction currently being
    /// executed by the innermost call frame — the symbol of the method the
    /// interpreter is in the middle of invoking.
    fn current_frame_method_symbol(&self) -> Option<MethodSymbol>;

    /// Identify the module a class was bound into, for diagnostics only
    /// (§4.5 step 2 — "does not affect correctness").
    fn module_of_class(&self, class: ClassHandle) -> Option<String>;

    /// Call-API slot 0 (the receiver).
    fn receiver_slot(&self) -> CallValue;

    /// Call-API slot `i + 1` (the i-th argument, 0-based).
    fn arg_slot(&self, index: usize) -> Option<CallValue>;

    /// Write a numeric return value into slot 0.
    fn set_result_numeric(&mut self, value: f64);

    /// Write a boolean return value into slot 0.
    fn set_result_boolean(&mut self, value: bool);

    /// Write a string return value into slot 0.
    fn set_result_string(&mut self, value: &str);

    /// Abort the active fiber, surfacing `message` as its error value.
    fn abort_with_message(&mut self, message: &str);
}
