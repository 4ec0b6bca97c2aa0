//! Read-only access to environment variables and path-list values.

use crate::System;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Delimiter between entries of `PATH`-style variables.
pub const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Source of environment variables.
///
/// Implementations must not have observable side effects; the resolver only
/// ever reads through this trait.
pub trait Environment {
    fn var_os(&self, name: &str) -> Option<OsString>;

    fn vars_os(&self) -> Vec<(OsString, OsString)>;

    fn var(&self, name: &str) -> Result<String> {
        self.var_os(name)
            .ok_or_else(|| Error::VarNotSet(name.to_string()))?
            .into_string()
            .map_err(|_| Error::VarNotUnicode {
                name: name.to_string(),
            })
    }

    fn is_set(&self, name: &str) -> bool {
        self.var_os(name).is_some()
    }

    /// Entries of a path-list variable. Unset yields an empty list.
    fn paths(&self, name: &str) -> Vec<PathBuf> {
        self.var_os(name).map(split_paths).unwrap_or_default()
    }
}

impl Environment for System {
    fn var_os(&self, name: &str) -> Option<OsString> {
        env::var_os(name)
    }

    fn vars_os(&self) -> Vec<(OsString, OsString)> {
        env::vars_os().collect()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var_os(&self, name: &str) -> Option<OsString> {
        (**self).var_os(name)
    }

    fn vars_os(&self) -> Vec<(OsString, OsString)> {
        (**self).vars_os()
    }
}

/// In-memory environment, used in place of the process environment when a
/// caller needs isolation (tests, embedding).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<OsString, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn with_paths<I, P>(self, name: impl Into<OsString>, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.with(name, join_paths(paths))
    }
}

impl Environment for MapEnv {
    fn var_os(&self, name: &str) -> Option<OsString> {
        self.vars.get(OsStr::new(name)).cloned()
    }

    fn vars_os(&self) -> Vec<(OsString, OsString)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Split a path-list value on [`PATH_LIST_SEPARATOR`].
///
/// Empty segments are kept in place: `":/a"` yields `["", "/a"]`.
pub fn split_paths(value: impl AsRef<OsStr>) -> Vec<PathBuf> {
    env::split_paths(value.as_ref()).collect()
}

/// Join entries with [`PATH_LIST_SEPARATOR`] without dropping empty ones.
///
/// Unlike [`std::env::join_paths`] this never fails; non-UTF-8 entries are
/// converted lossily.
pub fn join_paths<I, P>(paths: I) -> String
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut joined = String::new();
    for (i, path) in paths.into_iter().enumerate() {
        if i > 0 {
            joined.push(PATH_LIST_SEPARATOR);
        }
        joined.push_str(&path.as_ref().to_string_lossy());
    }
    joined
}
