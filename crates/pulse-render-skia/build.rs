// File: crates/pulse-render-skia/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU.

fn main() {
    // Build scripts run on the host; ask Cargo about the target instead of using cfg!.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        // Skia's font manager reads the registry (RegOpenKeyExW, RegQueryInfoKeyW).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
