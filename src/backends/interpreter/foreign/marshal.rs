//! Type-tag parsing and argument/return marshalling (§4.5 steps 8–11).
//!
//! The type vocabulary is intentionally tiny (`int, i64, char*, bool,
//! void`, §9 Design Notes "Type vocabulary") — extending it means touching
//! both the argument-side and return-side matches below.

use std::ffi::CString;
use std::os::raw::c_char;

use libffi::middle::{Arg, Cif, CodePtr, Type};

use super::error::ForeignError;
use super::host::CallValue;

/// One parsed native type tag, shared between the `args` and `ret` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    Int,
    I64,
    CharPtr,
    Bool,
    Void,
}

impl TypeTag {
    fn parse(raw: &str) -> Result<Self, ForeignError> {
        match raw.trim() {
            "int" => Ok(TypeTag::Int),
            "i64" => Ok(TypeTag::I64),
            "char*" => Ok(TypeTag::CharPtr),
            "bool" => Ok(TypeTag::Bool),
            "void" => Ok(TypeTag::Void),
            _ => Err(ForeignError::UnsupportedType),
        }
    }

    pub(crate) fn ffi_type(self) -> Type {
        match self {
            TypeTag::Int => Type::i32(),
            TypeTag::I64 => Type::i64(),
            TypeTag::CharPtr => Type::pointer(),
            TypeTag::Bool => Type::i32(),
            TypeTag::Void => Type::void(),
        }
    }
}

/// Parse `extern_args` (§4.5 step 8). `None` or an empty string both mean
/// "zero parameters" (§4.5 step 6 defaults). `bool` is a valid *return* tag
/// only (§4.5 step 8 argument table lists `int, i64, char*`) — reject it
/// here, mirroring how `parse_ret` rejects `char*`.
pub fn parse_args(raw: Option<&str>) -> Result<Vec<TypeTag>, ForeignError> {
    match raw {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => s
            .split(',')
            .map(|tag| {
                let tag = TypeTag::parse(tag)?;
                if tag == TypeTag::Bool {
                    return Err(ForeignError::UnsupportedType);
                }
                Ok(tag)
            })
            .collect(),
    }
}

/// Parse `extern_ret`. Absent means `void` (§4.5 step 6). `char*` is a
/// valid argument tag but never a valid return tag (§4.5 step 8 return
/// table only lists `void, int, i64, bool`).
pub fn parse_ret(raw: Option<&str>) -> Result<TypeTag, ForeignError> {
    match raw {
        None => Ok(TypeTag::Void),
        Some(s) => {
            let tag = TypeTag::parse(s)?;
            if tag == TypeTag::CharPtr {
                return Err(ForeignError::UnsupportedType);
            }
            Ok(tag)
        }
    }
}

/// Per-call scratch holding the native byte representation of each
/// argument. `char*` arguments borrow a `CString`'s buffer, so the strings
/// are kept alive here for exactly the marshalled call's scope (§4.5 step
/// 12: "per-call scratch... released on every exit path").
pub enum NativeScalar {
    Int(i32),
    I64(i64),
    Ptr(*const c_char),
}

pub struct MarshalledArgs {
    scalars: Vec<NativeScalar>,
    // Kept alive only so the pointers stashed in `scalars` remain valid;
    // never read directly.
    _owned_strings: Vec<CString>,
}

impl MarshalledArgs {
    pub fn as_ffi_args(&self) -> Vec<Arg<'_>> {
        self.scalars
            .iter()
            .map(|s| match s {
                NativeScalar::Int(v) => Arg::new(v),
                NativeScalar::I64(v) => Arg::new(v),
                NativeScalar::Ptr(p) => Arg::new(p),
            })
            .collect()
    }
}

/// Read each argument from its call-API slot into a `NativeScalar`,
/// according to the coercion rules in §4.5 step 8's argument table.
pub fn marshal_args(tags: &[TypeTag], slots: &[CallValue]) -> Result<MarshalledArgs, ForeignError> {
    let mut scalars = Vec::with_capacity(tags.len());
    let mut owned_strings = Vec::new();

    for (tag, value) in tags.iter().zip(slots.iter()) {
        match tag {
            TypeTag::Int => {
                let v = value.to_int().ok_or(ForeignError::UnsupportedType)?;
                scalars.push(NativeScalar::Int(v as i32));
            }
            TypeTag::I64 => {
                let v = value.to_int().ok_or(ForeignError::UnsupportedType)?;
                scalars.push(NativeScalar::I64(v));
            }
            TypeTag::CharPtr => {
                let s = value.as_str().ok_or(ForeignError::UnsupportedType)?;
                let cstr = CString::new(s).map_err(|_| ForeignError::UnsupportedType)?;
                scalars.push(NativeScalar::Ptr(cstr.as_ptr()));
                owned_strings.push(cstr);
            }
            // `parse_args` never yields `Bool`/`Void` — unreachable outside
            // tests that build a `Vec<TypeTag>` by hand.
            TypeTag::Bool | TypeTag::Void => return Err(ForeignError::UnsupportedType),
        }
    }

    Ok(MarshalledArgs {
        scalars,
        _owned_strings: owned_strings,
    })
}

/// The unmarshalled result of a native call (§4.5 step 11).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeReturn {
    Void,
    Int(i32),
    I64(i64),
    Bool(bool),
}

/// Invoke the resolved symbol through the prepared call-interface (§4.5
/// steps 9–10) and unmarshal its return value.
///
/// # Safety
/// `code_ptr` must point to a function whose real parameter and return
/// types exactly match those `cif` was built from.
pub unsafe fn call(cif: &Cif, code_ptr: CodePtr, args: &[Arg], ret_tag: TypeTag) -> NativeReturn {
    match ret_tag {
        TypeTag::Void => {
            let () = cif.call(code_ptr, args);
            NativeReturn::Void
        }
        TypeTag::Int => NativeReturn::Int(cif.call(code_ptr, args)),
        TypeTag::Bool => {
            let raw: i32 = cif.call(code_ptr, args);
            NativeReturn::Bool(raw != 0)
        }
        TypeTag::I64 => NativeReturn::I64(cif.call(code_ptr, args)),
        TypeTag::CharPtr => unreachable!("parse_ret rejects char* as a return tag"),
    }
}
