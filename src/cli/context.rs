use std::{
    env,
    num::NonZeroUsize,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result};
use colored::Colorize;

use super::args::CommonArgs;
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        GenerateOptions,
        emitter::{EmitOptions, Visibility},
        collector::ValueTables,
        scanner::{ScanResult, read_value_tables, scan_resources},
    },
};

/// Settings of one command run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--max-per-container 200`)
/// 2. `.resgenrc.json` config file
/// 3. Built-in defaults
///
/// Paths given on the command line resolve against the working directory,
/// paths from the config file against the directory holding it.
pub struct GenerateContext {
    pub config: Config,
    pub resources_root: PathBuf,
    pub output_dir: PathBuf,
    pub options: GenerateOptions,
    pub verbose: bool,
}

impl GenerateContext {
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the working directory")?;
        Self::from_dir(&cwd, args)
    }

    pub fn from_dir(cwd: &Path, args: &CommonArgs) -> Result<Self> {
        let loaded = load_config(cwd)?;

        if args.verbose && !loaded.from_file() {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold().cyan(),
                CONFIG_FILE_NAME
            );
        }

        let base_dir = loaded.base_dir.as_deref().unwrap_or(cwd);
        let config = loaded.config;

        let resources_root = match &args.resources_root {
            Some(path) => resolve_path(cwd, path),
            None => resolve_path(base_dir, &config.resources_root),
        };
        let output_dir = match &args.output_dir {
            Some(path) => resolve_path(cwd, path),
            None => resolve_path(base_dir, &config.output_dir),
        };

        let max_per_container = match args.max_per_container {
            Some(max) => max,
            None => NonZeroUsize::new(config.max_per_container)
                .context("'maxPerContainer' must be at least 1")?,
        };

        let options = GenerateOptions {
            max_per_container,
            emit: EmitOptions {
                visibility: if config.public_accessors {
                    Visibility::Public
                } else {
                    Visibility::Crate
                },
                runtime_path: config.runtime_path.clone(),
                path_prefix: config.path_prefix.clone(),
            },
        };

        Ok(Self {
            config,
            resources_root,
            output_dir,
            options,
            verbose: args.verbose,
        })
    }

    pub fn scan(&self) -> Result<ScanResult> {
        scan_resources(&self.resources_root, &self.config.ignores, self.verbose)
    }

    pub fn read_value_tables(&self, files: &[String]) -> Result<ValueTables> {
        read_value_tables(&self.resources_root, files)
    }
}

/// Join `path` onto `base`, dropping `.` components.
fn resolve_path(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let relative: PathBuf = path
        .as_ref()
        .components()
        .filter(|c| *c != Component::CurDir)
        .collect();
    base.join(relative)
}
