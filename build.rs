//! Exports build metadata for the version key.

use std::env;

use chrono::{DateTime, Utc};

const DEFAULT_KEYBOARD: &str = "moonlander";
const DEFAULT_KEYMAP: &str = "joseasoler";

fn main() {
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rerun-if-env-changed=KEYMAP_KEYBOARD");
    println!("cargo:rerun-if-env-changed=KEYMAP_NAME");

    let keyboard = env::var("KEYMAP_KEYBOARD").unwrap_or_else(|_| DEFAULT_KEYBOARD.into());
    let keymap = env::var("KEYMAP_NAME").unwrap_or_else(|_| DEFAULT_KEYMAP.into());

    println!("cargo:rustc-env=KEYMAP_KEYBOARD={keyboard}");
    println!("cargo:rustc-env=KEYMAP_NAME={keymap}");
    println!(
        "cargo:rustc-env=KEYMAP_BUILD_DATE={}",
        build_time().format("%Y-%m-%d-%H:%M:%S")
    );
}

/// `SOURCE_DATE_EPOCH` if it's set, so builds are reproducible, otherwise now.
/// Always UTC, so a pinned build types the same date wherever it's built.
fn build_time() -> DateTime<Utc> {
    let Ok(epoch) = env::var("SOURCE_DATE_EPOCH") else {
        return Utc::now();
    };
    match epoch
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    {
        Some(time) => time,
        None => {
            println!("cargo:warning=ignoring SOURCE_DATE_EPOCH={epoch:?}, not a unix timestamp");
            Utc::now()
        }
    }
}
