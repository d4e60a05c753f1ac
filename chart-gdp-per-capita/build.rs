//! Build script for chart-gdp-per-capita.
//!
//! Embeds `fixtures/gdp_pcap.csv` and `fixtures/dashboard.toml` by copying
//! them into OUT_DIR for `include_str!`. The dataset is required; the config
//! is optional and an empty one means "all defaults".

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DATASET: &str = "../fixtures/gdp_pcap.csv";
const CONFIG: &str = "../fixtures/dashboard.toml";

fn embed(out_dir: &Path, src_path: &str, required: bool) {
    let src = Path::new(src_path);
    let dest = out_dir.join(src.file_name().expect("fixture path has a file name"));
    println!("cargo:rerun-if-changed={}", src_path);

    if src.exists() {
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src_path, dest.display(), e);
        });
    } else if required {
        panic!("Required fixture {} not found", src_path);
    } else {
        fs::write(&dest, "").unwrap();
        println!("cargo:warning={} not found, using defaults", src_path);
    }
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    embed(&out_dir, DATASET, true);
    embed(&out_dir, CONFIG, false);
    println!("cargo:rerun-if-changed=build.rs");
}
