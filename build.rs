//! Records the resolved wgpu and winit versions for `--version`

use std::{env, fs, path::Path};

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let lock_path = Path::new(&manifest_dir).join("Cargo.lock");
    println!("cargo:rerun-if-changed={}", lock_path.display());

    let lock = fs::read_to_string(&lock_path).unwrap_or_default();
    for (name, key) in [("wgpu", "DOTS_WGPU_VERSION"), ("winit", "DOTS_WINIT_VERSION")] {
        let version = locked_version(&lock, name).unwrap_or("unknown");
        println!("cargo:rustc-env={key}={version}");
    }
}

/// Version of the first `[[package]]` entry named exactly `name`
fn locked_version<'a>(lock: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("name = \"{name}\"");
    let mut lines = lock.lines();
    lines.find(|line| line.trim() == needle)?;
    lines
        .next()
        .and_then(|line| line.trim().strip_prefix("version = \""))
        .and_then(|rest| rest.strip_suffix('"'))
}
