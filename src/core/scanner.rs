use std::{
    fs,
    path::{Component, Path},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::collector::{ValueTables, is_value_table};

/// Result of scanning a resource root.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Root-relative, `/`-separated file paths in ordinal order.
    pub files: Vec<String>,
    /// Entries that could not be read, broken links and special files.
    pub skipped_count: usize,
    /// Files excluded by an ignore pattern.
    pub ignored_count: usize,
}

/// Enumerate every resource file under `root`.
///
/// Hidden files and directories (leading `.`) are skipped. `ignore_patterns`
/// are matched against the root-relative path. Symbolic links are followed and
/// listed under their own path.
pub fn scan_resources(root: &Path, ignore_patterns: &[String], verbose: bool) -> Result<ScanResult> {
    if !root.exists() {
        bail!(
            "Resources directory '{}' does not exist.\n\
             Hint: Check your .resgenrc.json 'resourcesRoot' setting.",
            root.display()
        );
    }
    if !root.is_dir() {
        bail!("'{}' is not a directory.", root.display());
    }

    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
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
    }

    let mut result = ScanResult::default();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name().to_str()));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        if !entry.file_type().is_file() {
            result.skipped_count += 1;
            if verbose {
                eprintln!(
                    "{} Skipping {}: not a regular file",
                    "warning:".bold().yellow(),
                    entry.path().display()
                );
            }
            continue;
        }

        let Some(relative) = relative_path(root, entry.path()) else {
            result.skipped_count += 1;
            if verbose {
                eprintln!(
                    "{} Skipping non UTF-8 path: {}",
                    "warning:".bold().yellow(),
                    entry.path().display()
                );
            }
            continue;
        };

        if patterns.iter().any(|p| p.matches(&relative)) {
            result.ignored_count += 1;
            if verbose {
                eprintln!("{} Ignoring {}", "note:".bold().cyan(), relative);
            }
            continue;
        }

        result.files.push(relative);
    }

    result.files.sort();
    Ok(result)
}

/// Read the content of every value table among the scanned `files`.
pub fn read_value_tables(root: &Path, files: &[String]) -> Result<ValueTables> {
    let mut tables = ValueTables::new();
    for path in files.iter().filter(|path| is_value_table(path)) {
        let full = root.join(path);
        let content = fs::read_to_string(&full)
            .with_context(|| format!("Failed to read value table: {}", full.display()))?;
        tables.insert(path.clone(), content);
    }
    Ok(tables)
}

fn is_hidden(name: Option<&str>) -> bool {
    name.is_some_and(|n| n.starts_with('.'))
}

/// Root-relative path joined with `/`, or `None` if it is not valid UTF-8.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Option<Vec<&str>> = relative
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();
    Some(segments?.join("/"))
}
