//! Build script: validates example-messages.json at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let config_path: PathBuf = [&manifest_dir, "config", "example-messages.json"]
        .iter()
        .collect();
    println!("cargo:rerun-if-changed={}", config_path.display());
    let json = std::fs::read_to_string(&config_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. example-messages.json must exist and be valid.",
            config_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    struct ExampleEntry {
        label: String,
        text: String,
    }
    let entries: Vec<ExampleEntry> = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "example-messages.json is invalid JSON: {}. Fix the file and rebuild.",
            e
        )
    });
    if entries.is_empty() || entries.len() > 9 {
        panic!("example-messages.json must hold between 1 and 9 entries (Alt+1..Alt+9)");
    }
    for (i, entry) in entries.iter().enumerate() {
        if entry.label.trim().is_empty() || entry.text.trim().is_empty() {
            panic!("example-messages.json entry {}: label and text must be non-empty", i);
        }
    }
}
