//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the kit's source tree for antipatterns that would let a
//! component panic in the browser or drop an error silently. Each has a
//! budget of zero; `_test.rs` files are exempt. If you must add one, you have
//! to fix an existing one first. The budget never grows.

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

/// Panics crash the WASM module and take the whole page with them.
const PANIC_RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0, why: "propagate or fall back instead" },
    Rule { pattern: ".expect(", budget: 0, why: "propagate or fall back instead" },
    Rule { pattern: "panic!(", budget: 0, why: "components must always render" },
    Rule { pattern: "unreachable!(", budget: 0, why: "model the state instead" },
    Rule { pattern: "todo!(", budget: 0, why: "finish the stub" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "finish the stub" },
];

/// Silent loss discards errors without inspecting or logging them.
const SILENT_RULES: &[Rule] = &[
    Rule { pattern: "let _ =", budget: 0, why: "log the error with `log::warn!`" },
    Rule { pattern: ".ok()", budget: 0, why: "match and log the error" },
];

/// Style / structure.
const STYLE_RULES: &[Rule] = &[
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "delete unused code" },
    Rule { pattern: "println!(", budget: 0, why: "use the `log` macros" },
    Rule { pattern: "dbg!(", budget: 0, why: "use the `log` macros" },
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
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn violations(files: &[SourceFile], rules: &[Rule]) -> Vec<String> {
    rules
        .iter()
        .filter_map(|rule| {
            let hits: Vec<String> = files
                .iter()
                .filter_map(|file| {
                    let count = file.content.lines().filter(|line| line.contains(rule.pattern)).count();
                    (count > 0).then(|| format!("    {}: {count}", file.path))
                })
                .collect();
            let found: usize = files
                .iter()
                .map(|file| file.content.matches(rule.pattern).count())
                .sum();
            (found > rule.budget).then(|| {
                format!(
                    "{} budget exceeded: found {found}, max {} ({})\n{}",
                    rule.pattern,
                    rule.budget,
                    rule.why,
                    hits.join("\n")
                )
            })
        })
        .collect()
}

fn assert_clean(rules: &[Rule]) {
    let files = source_files();
    assert!(!files.is_empty(), "no source files found; run from the crate root");
    let problems = violations(&files, rules);
    assert!(problems.is_empty(), "{}", problems.join("\n"));
}

#[test]
fn panic_budget() {
    assert_clean(PANIC_RULES);
}

#[test]
fn silent_discard_budget() {
    assert_clean(SILENT_RULES);
}

#[test]
fn style_budget() {
    assert_clean(STYLE_RULES);
}
