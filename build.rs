use std::path::Path;
use std::process::Command;

// Stamps the build with a short git revision so the standalone palette can
// report it alongside the package version in its info message.
fn main() {
    let revision = git_revision().unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=POPUPPALETTE_GIT_HASH={revision}");

    for watched in [".git/HEAD", ".git/refs", ".git/packed-refs"] {
        if Path::new(watched).exists() {
            println!("cargo:rerun-if-changed={watched}");
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
}

fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!revision.is_empty()).then_some(revision)
}
