use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".resgenrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_resources_root")]
    pub resources_root: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_max_per_container")]
    pub max_per_container: usize,
    #[serde(default)]
    pub public_accessors: bool,
    #[serde(default = "default_runtime_path")]
    pub runtime_path: String,
    #[serde(default)]
    pub path_prefix: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_resources_root() -> String {
    "./resources".to_string()
}

fn default_output_dir() -> String {
    "./src/generated/res".to_string()
}

fn default_max_per_container() -> usize {
    500
}

fn default_runtime_path() -> String {
    "::resgen::runtime".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resources_root: default_resources_root(),
            output_dir: default_output_dir(),
            max_per_container: default_max_per_container(),
            public_accessors: false,
            runtime_path: default_runtime_path(),
            path_prefix: String::new(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns in `ignores`, a zero `maxPerContainer`
    /// and an empty `runtimePath`.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.max_per_container == 0 {
            bail!("'maxPerContainer' must be at least 1");
        }

        if self.runtime_path.trim().is_empty() {
            bail!("'runtimePath' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory holding the config file; relative paths in it resolve from here.
    /// `None` when using defaults.
    pub base_dir: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// True if config was loaded from a file, false if using defaults.
    pub fn from_file(&self) -> bool {
        self.base_dir.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                base_dir: path.parent().map(Path::to_path_buf),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: None,
        }),
    }
}
