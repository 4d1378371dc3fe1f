//! Source-tree scanning for the layer contract tests.
//!
//! Violations are reported as `path:line: text` strings so a failing
//! assertion prints something that can be pasted into an editor.

use std::fs;
use std::path::{Path, PathBuf};

/// A Rust file under the crate root.
pub struct SourceFile {
    /// Path relative to the crate root, always `/`-separated.
    pub relative: String,
    pub content: String,
}

impl SourceFile {
    fn load(path: &Path) -> Self {
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
        let relative = path
            .strip_prefix(crate_root())
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        Self { relative, content }
    }

    pub fn is_mod_rs(&self) -> bool {
        self.relative.ends_with("/mod.rs")
    }

    /// Lines for which `breaks_rule` holds, formatted as violations.
    pub fn violations(&self, breaks_rule: impl Fn(&str) -> bool) -> Vec<String> {
        self.content
            .lines()
            .enumerate()
            .filter(|(_, line)| breaks_rule(line))
            .map(|(idx, line)| format!("{}:{}: {}", self.relative, idx + 1, line.trim()))
            .collect()
    }
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Every `.rs` file below `dir`, ordered by path.
pub fn rust_files(dir: &str) -> Vec<SourceFile> {
    let mut pending = vec![crate_root().join(dir)];
    let mut found = Vec::new();

    while let Some(next) = pending.pop() {
        let entries = fs::read_dir(&next)
            .unwrap_or_else(|e| panic!("cannot list {}: {e}", next.display()));

        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                found.push(path);
            }
        }
    }

    found.sort();
    found.iter().map(|path| SourceFile::load(path)).collect()
}

/// Lines below `dir` that mention any of `forbidden`.
pub fn references(dir: &str, forbidden: &[&str]) -> Vec<String> {
    rust_files(dir)
        .iter()
        .flat_map(|file| file.violations(|line| forbidden.iter().any(|f| line.contains(f))))
        .collect()
}

/// Lines in `mod.rs` files below `dir` other than module declarations,
/// `cfg` attributes, comments and blanks.
pub fn mod_rs_non_declarations(dir: &str) -> Vec<String> {
    rust_files(dir)
        .iter()
        .filter(|file| file.is_mod_rs())
        .flat_map(|file| {
            file.violations(|line| {
                let line = line.trim();
                !(line.is_empty()
                    || line.starts_with("//")
                    || line.starts_with("pub mod ")
                    || line.starts_with("mod ")
                    || line.starts_with("#[cfg"))
            })
        })
        .collect()
}

pub fn exists(relative: &str) -> bool {
    crate_root().join(relative).exists()
}

pub fn read(relative: &str) -> String {
    SourceFile::load(&crate_root().join(relative)).content
}
