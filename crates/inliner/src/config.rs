//! Layered configuration
//!
//! Precedence, lowest to highest: built-in defaults, user config
//! (`<config dir>/inliner/inliner.toml`), project config (`inliner.toml` in
//! the working directory or an explicit `--config` file), `INLINER_*`
//! environment variables, and finally command line flags applied by the
//! binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use etcetera::{BaseStrategy, choose_base_strategy};
use indexmap::IndexSet;
use log::debug;
use serde::Deserialize;

/// Name of the project-level configuration file
pub const CONFIG_FILE_NAME: &str = "inliner.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Only modules whose file lives under this directory are inlined
    pub boundary: PathBuf,
    /// Additional search roots, consulted after the entry file's directory
    pub src: Vec<PathBuf>,
    /// Top-level names always treated as third-party
    pub known_third_party: IndexSet<String>,
    /// Python 3 minor version used for stdlib classification
    pub python_version: u8,
    /// Directory (relative to the boundary) receiving transformed files
    pub output_dir: String,
    /// File name prefix of transformed files
    pub output_prefix: String,
    /// Emit a `print(...)` echo of every replaced import statement
    pub echo_imports: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boundary: PathBuf::from("/"),
            src: Vec::new(),
            known_third_party: IndexSet::new(),
            python_version: 10,
            output_dir: "tmp".to_owned(),
            output_prefix: "transformed_imports_".to_owned(),
            echo_imports: true,
        }
    }
}

/// On-disk representation; every field is optional so files can be layered
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct ConfigFile {
    boundary: Option<PathBuf>,
    src: Option<Vec<PathBuf>>,
    known_third_party: Option<Vec<String>>,
    python_version: Option<u8>,
    output_dir: Option<String>,
    output_prefix: Option<String>,
    echo_imports: Option<bool>,
}

impl Config {
    /// Load configuration from all layers except the command line
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_path) = Self::user_config_path()
            && user_path.is_file()
        {
            debug!("Loading user config from {}", user_path.display());
            config.merge(ConfigFile::read(&user_path)?);
        }

        match explicit_path {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                config.merge(ConfigFile::read(path)?);
            }
            None => {
                let project_path = Path::new(CONFIG_FILE_NAME);
                if project_path.is_file() {
                    debug!("Loading project config from {}", project_path.display());
                    config.merge(ConfigFile::read(project_path)?);
                }
            }
        }

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse a configuration document and layer it over the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config = Self::default();
        config.merge(toml::from_str(content).context("Invalid configuration")?);
        Ok(config)
    }

    /// Location of the per-user configuration file
    pub fn user_config_path() -> Option<PathBuf> {
        let strategy = choose_base_strategy().ok()?;
        Some(strategy.config_dir().join("inliner").join(CONFIG_FILE_NAME))
    }

    /// The boundary as an absolute, canonical path when it exists on disk
    pub fn boundary_path(&self) -> Result<PathBuf> {
        let absolute = std::path::absolute(&self.boundary).with_context(|| {
            format!("Failed to make boundary {} absolute", self.boundary.display())
        })?;
        Ok(absolute.canonicalize().unwrap_or(absolute))
    }

    fn merge(&mut self, file: ConfigFile) {
        if let Some(boundary) = file.boundary {
            self.boundary = boundary;
        }
        if let Some(src) = file.src {
            self.src = src;
        }
        if let Some(known) = file.known_third_party {
            self.known_third_party = known.into_iter().collect();
        }
        if let Some(version) = file.python_version {
            self.python_version = version;
        }
        if let Some(dir) = file.output_dir {
            self.output_dir = dir;
        }
        if let Some(prefix) = file.output_prefix {
            self.output_prefix = prefix;
        }
        if let Some(echo) = file.echo_imports {
            self.echo_imports = echo;
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(boundary) = std::env::var_os("INLINER_BOUNDARY") {
            self.boundary = PathBuf::from(boundary);
        }
        if let Some(src) = std::env::var_os("INLINER_SRC") {
            self.src = std::env::split_paths(&src)
                .filter(|path| !path.as_os_str().is_empty())
                .collect();
        }
        if let Ok(version) = std::env::var("INLINER_PYTHON_VERSION") {
            self.python_version = version
                .trim()
                .parse()
                .with_context(|| format!("Invalid INLINER_PYTHON_VERSION '{version}'"))?;
        }
        Ok(())
    }
}

impl ConfigFile {
    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
