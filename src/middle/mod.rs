//! Intermediate Representation (IR) and bytecode format
//!
//! The original compile pipeline (codegen, monomorphization, lifetime/
//! escape-analysis passes) lived here; this revision consumes bytecode
//! rather than producing it, so only the IR's type vocabulary and the
//! bytecode wire format remain.

pub mod bytecode;
pub mod ir;

pub use bytecode::*;
pub use ir::*;
