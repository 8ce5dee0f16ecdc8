//! Compiles `tests/fixtures/yx_ffi_fixture.c` into a real shared library so
//! the foreign-class bridge's tests and demo can dlopen/dlsym against an
//! actual dynamic library rather than a mock `HostVm`-only stand-in — the
//! same approach the `libloading`/`libffi` ecosystem's own test suites use.
//!
//! `cc::Build` doesn't expose a "build a shared object" mode (it's built for
//! static libs/objects linked into the Rust binary), so this invokes the
//! resolved compiler directly with `-shared -fPIC`.

use std::path::PathBuf;
use std::process::Command;

fn main() {
    let fixture = PathBuf::from("tests/fixtures/yx_ffi_fixture.c");
    println!("cargo:rerun-if-changed={}", fixture.display());

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR set by cargo"));
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    let lib_name = match target_os.as_str() {
        "windows" => "yx_ffi_fixture.dll",
        "macos" => "libyx_ffi_fixture.dylib",
        _ => "libyx_ffi_fixture.so",
    };
    let out_lib = out_dir.join(lib_name);

    let compiler = cc::Build::new().get_compiler();
    let mut cmd = compiler.to_command();
    cmd.arg(&fixture);
    if target_os != "windows" {
        cmd.arg("-fPIC");
    }
    cmd.arg("-shared").arg("-o").arg(&out_lib);

    let status = cmd
        .status()
        .expect("failed to invoke C compiler for the FFI fixture library");
    assert!(status.success(), "building yx_ffi_fixture failed");

    // Tests/the demo read this to point `YAOXIANG_FFI_LIB_DIR` at a
    // directory that actually contains the compiled fixture.
    println!("cargo:rustc-env=YX_FFI_FIXTURE_DIR={}", out_dir.display());
}
