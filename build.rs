use std::env;
use std::process::Command;

fn main() {
    // 1. Rebuild only when the toolchain changes
    println!("cargo:rerun-if-env-changed=RUSTC");
    println!("cargo:rerun-if-changed=build.rs");

    // 2. Ask the compiler that builds us for its version string
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string());

    let version = match version {
        Some(v) if !v.is_empty() => v,
        _ => {
            println!("cargo:warning=Unable to query {} --version. Reporting 'unknown'.", rustc);
            "unknown".to_string()
        }
    };

    // 3. Expose it to the crate as a compile-time env var
    println!("cargo:rustc-env=APPINFO_RUSTC_VERSION={}", version);
}
