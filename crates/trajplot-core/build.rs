// File: crates/trajplot-core/build.rs
// Summary: Links the Windows system libraries Skia/ICU depend on.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends live in advapi32
        println!("cargo:rustc-link-lib=advapi32");
    }
}
