use std::path::PathBuf;
use std::process::Command;

/// Short commit id plus a `-dirty` suffix for uncommitted changes.
fn describe_head() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=8"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn main() {
    let version = describe_head().unwrap_or_else(|| "unknown".to_owned());
    println!("cargo:rustc-env=RASTERGRID_GIT_HASH={version}");

    // Re-stamp when HEAD moves or the index changes
    let git_dir = std::env::var_os("GIT_DIR").map_or_else(|| PathBuf::from(".git"), PathBuf::from);
    for name in ["HEAD", "index"] {
        let path = git_dir.join(name);
        if path.exists() {
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
    println!("cargo:rerun-if-changed=build.rs");
}
