//! Well-known directories.

use crate::env::Environment;
use std::path::PathBuf;

const DEFAULT_INSTALL_PREFIX: &str = match option_env!("SEEKPATH_INSTALL_PREFIX") {
    Some(prefix) => prefix,
    None => "/usr",
};

/// Install prefix baked in at build time (`SEEKPATH_INSTALL_PREFIX`), `/usr`
/// when the build did not set one.
pub fn default_install_prefix() -> PathBuf {
    PathBuf::from(DEFAULT_INSTALL_PREFIX)
}

pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

/// User's configuration directory.
///
/// - Windows: `APPDATA`
/// - macOS: `~/Library/Application Support`
/// - Linux: `$XDG_CONFIG_HOME` or `~/.config`
pub fn user_config(env: &impl Environment) -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env.var_os("APPDATA").map(PathBuf::from)
    }
    #[cfg(target_os = "macos")]
    {
        let _ = env;
        user_home().map(|p| p.join("Library/Application Support"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        env.var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| user_home().map(|p| p.join(".config")))
    }
}
