//! Build script for showbill-web
//!
//! Stamps the binary with the identity shown in the startup log and in the
//! page footer: `GIT_HASH`, `BUILD_TIMESTAMP`, `BUILD_PROFILE`.

use std::env;
use std::process::Command;

use chrono::{DateTime, SecondsFormat, Utc};

fn main() {
    // Re-stamp when the checked-out commit moves, not on every source edit
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/refs/heads");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    println!("cargo:rustc-env=GIT_HASH={}", git_hash());
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp());
    println!(
        "cargo:rustc-env=BUILD_PROFILE={}",
        env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string())
    );
}

/// Short commit hash with a `-dirty` suffix for uncommitted changes;
/// "unknown" outside a git checkout (e.g. a source tarball)
fn git_hash() -> String {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=8", "--exclude=*"])
        .output();

    match output {
        Ok(output) if output.status.success() => {
            let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if hash.is_empty() {
                "unknown".to_string()
            } else {
                hash
            }
        }
        _ => "unknown".to_string(),
    }
}

/// RFC 3339 build time; honours SOURCE_DATE_EPOCH for reproducible builds
fn build_timestamp() -> String {
    let stamp = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.trim().parse::<i64>().ok())
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    stamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}
