//! First-match and all-matches resolution over an ordered directory list.
//!
//! Each candidate is `location.join(name)`; a candidate matches when any
//! filesystem object exists there. Nothing is cached, so every call reflects
//! the filesystem at call time.

use crate::locations::Locations;
use seekpath_platform::{Environment, Probe, System};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver<P = System> {
    probe: P,
}

impl Resolver<System> {
    pub fn system() -> Self {
        Self { probe: System }
    }
}

impl<P: Probe> Resolver<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    fn matches<'a>(
        &'a self,
        name: &'a Path,
        locations: &'a [PathBuf],
    ) -> impl Iterator<Item = PathBuf> + 'a {
        locations
            .iter()
            .map(move |location| location.join(name))
            .filter(move |candidate| {
                let found = self.probe.exists(candidate);
                tracing::trace!(candidate = %candidate.display(), found, "probe");
                found
            })
    }

    /// The highest-precedence existing match, if any.
    pub fn find_first(&self, name: impl AsRef<Path>, locations: &[PathBuf]) -> Option<PathBuf> {
        let name = name.as_ref();
        let found = self.matches(name, locations).next();
        match &found {
            Some(path) => {
                tracing::debug!(name = %name.display(), path = %path.display(), "resolved")
            }
            None => tracing::debug!(
                name = %name.display(),
                searched = locations.len(),
                "not resolved"
            ),
        }
        found
    }

    /// Like [`Resolver::find_first`], returning an empty path when nothing
    /// matches. Callers test `file_name().is_none()` for "not found".
    pub fn resolve_first(&self, name: impl AsRef<Path>, locations: &[PathBuf]) -> PathBuf {
        self.find_first(name, locations).unwrap_or_default()
    }

    /// Every existing match, in the order of `locations`.
    pub fn resolve_all(&self, name: impl AsRef<Path>, locations: &[PathBuf]) -> Vec<PathBuf> {
        let name = name.as_ref();
        let found: Vec<PathBuf> = self.matches(name, locations).collect();
        tracing::debug!(
            name = %name.display(),
            searched = locations.len(),
            matched = found.len(),
            "resolved all"
        );
        found
    }

    /// Resolve `name` against the locations listed in `variable`.
    pub fn resolve_from_env(
        &self,
        env: &impl Environment,
        name: impl AsRef<Path>,
        variable: &str,
    ) -> PathBuf {
        let locations = Locations::from_env(env, variable);
        self.resolve_first(name, &locations)
    }
}

pub fn find_first(name: impl AsRef<Path>, locations: &[PathBuf]) -> Option<PathBuf> {
    Resolver::system().find_first(name, locations)
}

pub fn resolve_first(name: impl AsRef<Path>, locations: &[PathBuf]) -> PathBuf {
    Resolver::system().resolve_first(name, locations)
}

pub fn resolve_all(name: impl AsRef<Path>, locations: &[PathBuf]) -> Vec<PathBuf> {
    Resolver::system().resolve_all(name, locations)
}

/// Resolve `name` against a variable of the process environment.
pub fn resolve_from_env(name: impl AsRef<Path>, variable: &str) -> PathBuf {
    Resolver::system().resolve_from_env(&System, name, variable)
}
