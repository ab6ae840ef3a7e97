//! Hygiene — enforces coding standards at test time.
//!
//! The controller promises total, non-throwing behavior: malformed state
//! falls back, missing DOM pieces are skipped. Panicking constructs in
//! production code would break that promise, so the budget for them is
//! zero. Test files are exempt.

use std::fs;
use std::path::Path;

/// Panicking constructs banned from production sources.
const BANNED: &[&str] = &[
    ".unwrap()",
    ".expect(",
    "panic!(",
    "unreachable!(",
    "todo!(",
    "unimplemented!(",
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.file_name().unwrap_or_default().to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path.to_string_lossy().to_string(), content));
        }
    }
}

#[test]
fn production_code_never_panics() {
    let mut sources = Vec::new();
    production_sources(Path::new("src"), &mut sources);
    assert!(!sources.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for (path, content) in &sources {
        for (number, line) in content.lines().enumerate() {
            let code = line.trim_start();
            if code.starts_with("//") {
                continue;
            }
            for needle in BANNED {
                if code.contains(needle) {
                    violations.push(format!("{path}:{} uses {needle}", number + 1));
                }
            }
        }
    }
    assert!(violations.is_empty(), "panicking constructs in production code:\n{}", violations.join("\n"));
}
