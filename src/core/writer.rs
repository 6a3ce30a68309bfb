//! Writes generated files into the output directory.
//!
//! The directory is fully regenerated on every run: generated files that are
//! no longer part of the output are removed, files whose content did not change
//! are left untouched so their modification time stays stable. Files without
//! the generated marker are never touched: if one is in the way of a generated
//! file, nothing is written at all.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::core::emitter::{GENERATED_MARKER, GeneratedFile};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

pub fn write_output(output_dir: &Path, files: &[GeneratedFile]) -> Result<WriteSummary> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    for file in files {
        let path = output_dir.join(&file.name);
        if path.exists() && !is_generated(&path) {
            bail!(
                "Refusing to overwrite '{}': the file was not generated by resgen.\n\
                 Hint: Move it out of the output directory or change 'outputDir'.",
                path.display()
            );
        }
    }

    let mut summary = WriteSummary::default();
    let keep: HashSet<&str> = files.iter().map(|f| f.name.as_str()).collect();

    let mut stale = Vec::new();
    for entry in fs::read_dir(output_dir)
        .with_context(|| format!("Failed to read output directory: {}", output_dir.display()))?
    {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if keep.contains(name) || !path.is_file() || !name.ends_with(".rs") {
            continue;
        }
        if is_generated(&path) {
            stale.push(path);
        }
    }
    stale.sort();
    for path in stale {
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove stale file: {}", path.display()))?;
        summary.removed.push(path);
    }

    for file in files {
        let path = output_dir.join(&file.name);
        if fs::read_to_string(&path).is_ok_and(|existing| existing == file.content) {
            summary.unchanged.push(path);
            continue;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        summary.written.push(path);
    }

    Ok(summary)
}

fn is_generated(path: &Path) -> bool {
    fs::read_to_string(path)
        .map(|content| content.starts_with(GENERATED_MARKER))
        .unwrap_or(false)
}
