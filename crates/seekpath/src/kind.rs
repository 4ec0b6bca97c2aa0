//! Well-known search-path families.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A family of search paths sharing one environment variable and one set of
/// conventional install sub-directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    Executable,
    Library,
    Python,
    Configuration,
    Auxiliary,
}

impl PathKind {
    pub const ALL: [PathKind; 5] = [
        PathKind::Executable,
        PathKind::Library,
        PathKind::Python,
        PathKind::Configuration,
        PathKind::Auxiliary,
    ];

    /// Environment variable holding the search path for this kind.
    pub fn variable(self) -> &'static str {
        match self {
            PathKind::Executable => "PATH",
            PathKind::Library => {
                if cfg!(target_os = "macos") {
                    "DYLD_LIBRARY_PATH"
                } else if cfg!(windows) {
                    "PATH"
                } else {
                    "LD_LIBRARY_PATH"
                }
            }
            PathKind::Python => "PYTHONPATH",
            PathKind::Configuration => "SEEKPATH_CONF_PATH",
            PathKind::Auxiliary => "SEEKPATH_AUX_PATH",
        }
    }

    /// Sub-directories of an install prefix where this kind is laid out.
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            PathKind::Executable => &["scripts", "bin"],
            PathKind::Library => &["lib"],
            PathKind::Python => &["python"],
            PathKind::Configuration => &["share/conf"],
            PathKind::Auxiliary => &["share/auxdir", "share/aux"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PathKind::Executable => "executable",
            PathKind::Library => "library",
            PathKind::Python => "python",
            PathKind::Configuration => "configuration",
            PathKind::Auxiliary => "auxiliary",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exe" | "executable" | "bin" => Ok(PathKind::Executable),
            "lib" | "library" => Ok(PathKind::Library),
            "py" | "python" => Ok(PathKind::Python),
            "conf" | "config" | "configuration" => Ok(PathKind::Configuration),
            "aux" | "auxiliary" => Ok(PathKind::Auxiliary),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}
