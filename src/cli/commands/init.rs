use std::{env, fs, path::Path};

use anyhow::{Context, Result};

use super::super::{exit_status::ExitStatus, report};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default `.resgenrc.json` into the working directory.
///
/// An existing file is left alone and reported as a failure.
pub fn init() -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to read the working directory")?;
    init_in(&cwd)
}

fn init_in(dir: &Path) -> Result<ExitStatus> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        report::print_config_exists(Path::new(CONFIG_FILE_NAME));
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;
    report::print_config_created(Path::new(CONFIG_FILE_NAME));

    Ok(ExitStatus::Success)
}
