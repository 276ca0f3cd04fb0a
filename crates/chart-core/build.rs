// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU expect.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry lookups (RegOpenKeyExW) from the DirectWrite font manager.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
