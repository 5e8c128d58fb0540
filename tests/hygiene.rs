//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan `src/` (test files excluded) for antipatterns. Each has a
//! budget, currently zero everywhere. If you must add one, fix an existing
//! one first; the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

// Panics: these abort the wasm module.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "propagate or log instead" },
    Budget { pattern: ".expect(", max: 0, why: "propagate or log instead" },
    Budget { pattern: "panic!(", max: 0, why: "a panic kills the page" },
    Budget { pattern: "unreachable!(", max: 0, why: "model the case in the type" },
    Budget { pattern: "todo!(", max: 0, why: "ratchet down as stubs are implemented" },
    Budget { pattern: "unimplemented!(", max: 0, why: "ratchet down as stubs are implemented" },
];

// Silent loss: discards errors without inspecting.
const SILENT: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0, why: "log the error" },
    Budget { pattern: ".ok()", max: 0, why: "match and log the error" },
];

// Style / structure.
const STYLE: &[Budget] = &[
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
    Budget { pattern: "println!(", max: 0, why: "use leptos::logging" },
    Budget { pattern: "eprintln!(", max: 0, why: "use leptos::logging" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source<'a>(files: &'a [SourceFile], pattern: &str) -> Vec<(&'a str, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path.as_str(), count))
        })
        .collect()
}

fn format_hits(hits: &[(&str, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");
    for budget in budgets {
        let hits = count_in_source(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        assert!(
            count <= budget.max,
            "`{}` budget exceeded: found {count}, max {} ({}).\n{}",
            budget.pattern,
            budget.max,
            budget.why,
            format_hits(&hits)
        );
    }
}

#[test]
fn panic_budgets() {
    check(PANICS);
}

#[test]
fn silent_discard_budgets() {
    check(SILENT);
}

#[test]
fn style_budgets() {
    check(STYLE);
}

#[test]
fn raw_web_sys_stays_in_util() {
    let files = source_files();
    let outside: Vec<(&str, usize)> = count_in_source(&files, "web_sys::")
        .into_iter()
        .filter(|(path, _)| !Path::new(path).starts_with("src/util"))
        .collect();
    assert!(
        outside.is_empty(),
        "web_sys used outside src/util; add a helper there instead.\n{}",
        format_hits(&outside)
    );
}
