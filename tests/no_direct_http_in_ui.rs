// tests/no_direct_http_in_ui.rs
// Fails if UI code talks to the network directly. All HTTP goes through the
// api client, driven by the catalog fetch/mutation systems.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

#[test]
fn no_direct_http_in_ui() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let ui_dir = Path::new(manifest_dir).join("src").join("ui");

    let mut files = Vec::new();
    collect_rs_files(&ui_dir, &mut files);
    assert!(!files.is_empty(), "expected source files under src/ui");

    // Patterns indicating a network call made from the UI layer
    let bad_patterns = [
        "reqwest::",
        "HttpClient::new(",
        ".spawn_background_task(",
    ];

    let mut offenders: Vec<(String, String)> = Vec::new();

    for file in files {
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };
        for pat in &bad_patterns {
            if content.contains(pat) {
                offenders.push((file.to_string_lossy().to_string(), pat.to_string()));
            }
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::from("Network calls found in UI code:\n");
        for (file, pat) in offenders {
            msg.push_str(&format!(
                "  {} contains pattern '{}': send a Request* event instead\n",
                file, pat
            ));
        }
        panic!("{}", msg);
    }
}
