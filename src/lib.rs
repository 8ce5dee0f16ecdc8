//! YaoXiang Programming Language
//!
//! A high-performance programming language with "everything is type" philosophy.
//!
//! # Example
//!
//! ```yaoxiang
//! fn main() {
//!     print("Hello, YaoXiang!")
//! }
//! ```
//!
//! # Crate Features
//!
//! - `wasm`: Enable WebAssembly support

#![doc(html_root_url = "https://docs.rs/yaoxiang")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod backends;
pub mod frontend;
pub mod middle;
pub mod std;

pub mod util;

/// Shared value/memory/scheduling types consumed by `backends::common::value`
/// (its `RuntimeValue` re-export resolves here). Not part of the public API
/// in its own right — reach it through `backends::common::RuntimeValue`.
mod runtime;

// Re-exports
pub use anyhow::{Context, Result};
pub use thiserror::Error;

// Backend re-exports
pub use backends::{Executor, DebuggableExecutor, ExecutorError, ExecutorResult, ExecutorConfig};
pub use backends::common::{RuntimeValue, Opcode, Heap, Handle, BumpAllocator};
pub use backends::interpreter::Interpreter;

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "YaoXiang (爻象)";

use ::std::fs;

// =============================================================================
// FFI End-to-End Tests
// =============================================================================

#[cfg(test)]
mod ffi_tests {
    use super::*;
    use crate::backends::common::RuntimeValue;
    use crate::backends::interpreter::ffi::FfiRegistry;

    /// Test compiling and running YaoXiang source with std.io functions
    #[test]
    fn test_e2e_std_io_compile_and_run() {
        // This test verifies the complete flow:
        // 1. Parse YaoXiang source with std.io calls
        // 2. Compile to bytecode (including CallNative generation)
        // 3. Execute with FFI registry

        // Test 1: Verify std.io functions are registered in FFI registry
        let registry = FfiRegistry::with_std();
        assert!(registry.has("std.io.println"));
        assert!(registry.has("std.io.print"));
        assert!(registry.has("std.io.read_file"));
        assert!(registry.has("std.io.write_file"));
        assert!(registry.has("std.io.append_file"));

        // Test 2: Short names are NOT registered - users must use `use std.io`
        assert!(!registry.has("println"));
        assert!(!registry.has("print"));

        // Test 3: Verify FFI call works
        let result = registry.call(
            "std.io.println",
            &[RuntimeValue::String("FFI test message".into())],
        );
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), RuntimeValue::Unit);

        // Test 4: Verify file operations
        let test_path = "test_std_io_e2e.txt";
        let write_result = registry.call(
            "std.io.write_file",
            &[
                RuntimeValue::String(test_path.into()),
                RuntimeValue::String("Hello, YaoXiang!".into()),
            ],
        );
        assert!(write_result.is_ok());

        let read_result = registry.call(
            "std.io.read_file",
            &[RuntimeValue::String(test_path.into())],
        );
        assert!(read_result.is_ok());
        if let RuntimeValue::String(content) = read_result.unwrap() {
            assert_eq!(content.to_string(), "Hello, YaoXiang!");
        } else {
            panic!("Expected String");
        }

        // Cleanup
        let _ = fs::remove_file(test_path);
    }

    /// Test user-defined native function binding flow
    #[test]
    fn test_e2e_user_native_function() {
        // Test user can register custom native functions
        let mut registry = FfiRegistry::new();

        // Register a custom function
        registry.register("my_add", |args| {
            let a = args.get(0).and_then(|v| v.to_int()).unwrap_or(0);
            let b = args.get(1).and_then(|v| v.to_int()).unwrap_or(0);
            Ok(RuntimeValue::Int(a + b))
        });

        // Verify registration
        assert!(registry.has("my_add"));

        // Call the function
        let result = registry.call("my_add", &[RuntimeValue::Int(10), RuntimeValue::Int(32)]);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), RuntimeValue::Int(42));
    }

    /// Test native function not found error
    #[test]
    fn test_e2e_nonexistent_native_function() {
        let registry = FfiRegistry::new();
        let result = registry.call("nonexistent.function", &[]);
        assert!(result.is_err());
    }
}
