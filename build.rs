//! Build script for the AirDCC node firmware
//!
//! Makes the linker find `memory.x` when building the embedded binary.

fn main() {
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
        println!("cargo:rustc-link-search={dir}");
    }
}
