// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // registry lookups used when enumerating system fonts
        println!("cargo:rustc-link-lib=advapi32");
    }
}
