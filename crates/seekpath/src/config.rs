//! Run-time configuration of the built-in fallback locations.

use crate::error::{Error, Result};
use seekpath_platform::{Environment, Probe, dir};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Variable naming an explicit config file.
pub const CONFIG_VARIABLE: &str = "SEEKPATH_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR: &str = "seekpath";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocatorConfig {
    /// Root of the installation; fallback locations are derived from it.
    pub install_prefix: PathBuf,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            install_prefix: dir::default_install_prefix(),
        }
    }
}

impl LocatorConfig {
    pub fn with_install_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.install_prefix = prefix.into();
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), prefix = %config.install_prefix.display(), "loaded config");
        Ok(config)
    }

    /// `$SEEKPATH_CONFIG` when set, else `<user config>/seekpath/config.toml`
    /// when present, else defaults.
    pub fn discover(env: &impl Environment, probe: &impl Probe) -> Result<Self> {
        if let Some(path) = env.var_os(CONFIG_VARIABLE).filter(|v| !v.is_empty()) {
            return Self::load(PathBuf::from(path));
        }

        match user_config_file(env) {
            Some(path) if probe.is_file(&path) => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}

/// Per-user seekpath directory, e.g. `~/.config/seekpath`.
pub fn user_config_dir(env: &impl Environment) -> Option<PathBuf> {
    dir::user_config(env).map(|p| p.join(APP_DIR))
}

fn user_config_file(env: &impl Environment) -> Option<PathBuf> {
    user_config_dir(env).map(|p| p.join(CONFIG_FILE_NAME))
}
