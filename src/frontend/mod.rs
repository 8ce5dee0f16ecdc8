//! Lexer, parser and module-loading types the rest of the crate still needs.
//!
//! The full compile pipeline (typecheck, const-eval, codegen) lived here in
//! the original language implementation; this revision doesn't compile
//! YaoXiang source to bytecode, so that machinery is gone. What remains is
//! the parser's AST vocabulary (`core`) and the module-loading types
//! (`module`) that `std` and the bytecode format still reference.

// Core algorithm layer (lexer, parser, type system primitives).
pub mod core;

// Module loading/resolution types (`Export`, `ModuleInfo`, ...).
pub mod module;

pub use crate::util::diagnostic;
