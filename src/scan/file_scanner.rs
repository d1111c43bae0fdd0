//! File catalog: recursive walk, source-extension filter, and ignore
//! handling for the scan root.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::{Config, PROJECT_MARKER, TEST_FILE_PATTERNS};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of cataloguing source files under the scan root.
pub struct CatalogResult {
    /// Analyzable source files in lexicographic path order.
    pub files: Vec<PathBuf>,
    /// Paths the walk could not access.
    pub skipped_count: usize,
}

/// The scan root must be an existing directory with a `package.json` at
/// its top level. Anything else aborts the run before scanning starts.
pub fn validate_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root)
        .with_context(|| format!("cannot access scan root: {}", root.display()))?;
    if !metadata.is_dir() {
        bail!("scan root is not a directory: {}", root.display());
    }
    if !root.join(PROJECT_MARKER).exists() {
        bail!("{} not found in {}", PROJECT_MARKER, root.display());
    }
    Ok(())
}

/// Walk the scan root and collect analyzable source files.
///
/// Ignore patterns split into literal directory prefixes and glob
/// patterns; `ignoreTestFiles` adds the test filename globs on top.
/// Include directories, when configured, restrict the walk to those
/// subtrees. Output order is deterministic.
pub fn catalog_source_files(base_dir: &Path, config: &Config, verbose: bool) -> Result<CatalogResult> {
    validate_root(base_dir)?;

    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in &config.ignores {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    if config.ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        }
    }

    let dirs_to_scan = resolve_include_dirs(base_dir, &config.includes, verbose);

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_source_file(path) {
                files.push(path.to_path_buf());
            }
        }
    }

    // Overlapping include dirs can catalog a file twice; the pipeline
    // wants each file exactly once, in a stable order.
    files.sort();
    files.dedup();

    Ok(CatalogResult {
        files,
        skipped_count,
    })
}

fn resolve_include_dirs(base_dir: &Path, includes: &[String], verbose: bool) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut paths = Vec::new();
    for inc in includes {
        if is_glob_pattern(inc) {
            // Glob mode: expand pattern to matching directories
            let full_pattern = base_dir.join(inc);
            let pattern_str = full_pattern.to_string_lossy();
            match glob(&pattern_str) {
                Ok(entries) => {
                    for entry in entries.flatten() {
                        if entry.is_dir() {
                            paths.push(entry);
                        }
                    }
                }
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid glob pattern '{}': {}",
                            "warning:".bold().yellow(),
                            inc,
                            e
                        );
                    }
                }
            }
        } else {
            // Literal path mode: use as-is
            let path = base_dir.join(inc);
            if path.exists() {
                paths.push(path);
            } else if verbose {
                eprintln!(
                    "{} Include path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
        }
    }
    paths
}

fn is_source_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("js" | "jsx" | "ts" | "tsx")
    )
}
