//! File collection — recursive scan for eligible source files.

use anyhow::{Context, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions recognized as header or implementation source.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["c", "h", "cc", "cpp", "cxx", "hh", "hpp"];

/// Directory names pruned from traversal.
const EXCLUDED_DIRS: &[&str] = &[".git", ".svn", "build", "node_modules", "target"];

/// Recursively collect eligible source files under `root`.
///
/// `exclude` holds glob patterns matched against the full path; invalid
/// patterns are reported and ignored. The result is sorted for
/// deterministic output.
pub fn collect_files(root: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = compile_patterns(exclude);

    let mut files = Vec::new();
    // The root itself is never pruned, even if its name matches.
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        entry.depth() == 0
            || !(entry.file_type().is_dir() && is_excluded_dir(entry.file_name().to_str()))
    });
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("warning: cannot access path: {}", e);
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !is_source_file(path) {
            continue;
        }
        if patterns.iter().any(|p| p.matches(&path.to_string_lossy())) {
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Read one source file, with the path in the error context.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn compile_patterns(exclude: &[String]) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    for raw in exclude {
        match Pattern::new(raw) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => eprintln!("warning: invalid exclude pattern '{}': {}", raw, e),
        }
    }
    patterns
}

fn is_excluded_dir(name: Option<&str>) -> bool {
    name.is_some_and(|n| EXCLUDED_DIRS.contains(&n))
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}
