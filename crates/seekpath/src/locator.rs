//! Locators bind a [`PathKind`] variable to fixed fallback directories.
//!
//! The auxiliary locator searches `$SEEKPATH_AUX_PATH`, then
//! `<prefix>/share/auxdir`, then `<prefix>/share/aux` (the older layout).

use crate::config::{LocatorConfig, user_config_dir};
use crate::error::{Error, Result};
use crate::format::multi_path_append;
use crate::kind::PathKind;
use crate::locations::{Locations, LocationsBuilder};
use crate::resolver::Resolver;
use seekpath_platform::{Environment, Probe, System};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Locator<E = System, P = System> {
    kind:      PathKind,
    fallbacks: Vec<PathBuf>,
    env:       E,
    probe:     P,
}

impl Locator {
    pub fn new<I, F>(kind: PathKind, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<PathBuf>,
    {
        Self {
            kind,
            fallbacks: fallbacks.into_iter().map(Into::into).collect(),
            env: System,
            probe: System,
        }
    }

    pub fn auxiliary(config: &LocatorConfig) -> Self {
        Self::for_kind(PathKind::Auxiliary, config)
    }

    /// `<prefix>/share/conf`, then the user configuration directory taken
    /// from the process environment.
    pub fn configuration(config: &LocatorConfig) -> Self {
        Self::for_kind(PathKind::Configuration, config)
    }

    /// Locator for `kind`; fallbacks are the kind's suffixes under the prefix.
    pub fn for_kind(kind: PathKind, config: &LocatorConfig) -> Self {
        Self::for_kind_in(kind, config, System)
    }
}

impl<E: Environment> Locator<E> {
    /// Like [`Locator::for_kind`], reading variables (and, for
    /// configuration, the user directory) from `env`.
    pub fn for_kind_in(kind: PathKind, config: &LocatorConfig, env: E) -> Self {
        let mut fallbacks = multi_path_append(&[&config.install_prefix], kind.suffixes());
        if kind == PathKind::Configuration {
            fallbacks.extend(user_config_dir(&env));
        }
        Locator {
            kind,
            fallbacks,
            env,
            probe: System,
        }
    }
}

impl<E, P> Locator<E, P> {
    pub fn with_env<E2: Environment>(self, env: E2) -> Locator<E2, P> {
        Locator {
            kind: self.kind,
            fallbacks: self.fallbacks,
            env,
            probe: self.probe,
        }
    }

    pub fn with_probe<P2: Probe>(self, probe: P2) -> Locator<E, P2> {
        Locator {
            kind: self.kind,
            fallbacks: self.fallbacks,
            env: self.env,
            probe,
        }
    }

    pub fn kind(&self) -> PathKind {
        self.kind
    }

    pub fn variable(&self) -> &'static str {
        self.kind.variable()
    }

    pub fn fallbacks(&self) -> &[PathBuf] {
        &self.fallbacks
    }
}

impl<E: Environment, P: Probe> Locator<E, P> {
    /// Variable entries followed by the fallbacks, optionally restricted to
    /// existing directories.
    pub fn locations(&self, exist_only: bool) -> Locations {
        LocationsBuilder::new()
            .from_env(self.variable())
            .fallbacks(self.fallbacks.iter().cloned())
            .exist_only(exist_only)
            .build(&self.env, &self.probe)
    }

    /// First match for `name`; an empty path when there is none.
    pub fn locate(&self, name: impl AsRef<Path>) -> PathBuf {
        Resolver::new(&self.probe).resolve_first(name, &self.locations(false))
    }

    pub fn locate_all(&self, name: impl AsRef<Path>) -> Vec<PathBuf> {
        Resolver::new(&self.probe).resolve_all(name, &self.locations(false))
    }

    /// Like [`Locator::locate`] but a miss is an [`Error::NotFound`].
    pub fn require(&self, name: impl AsRef<Path>) -> Result<PathBuf> {
        let name = name.as_ref();
        Resolver::new(&self.probe)
            .find_first(name, &self.locations(false))
            .ok_or_else(|| Error::NotFound {
                name:     name.to_path_buf(),
                variable: self.variable(),
            })
    }
}

pub fn auxiliary_variable_name() -> &'static str {
    PathKind::Auxiliary.variable()
}

/// Auxiliary search locations for the default configuration.
pub fn auxiliary_locations(exist_only: bool) -> Locations {
    Locator::auxiliary(&LocatorConfig::default()).locations(exist_only)
}

/// First auxiliary file named `name` for the default configuration.
pub fn auxiliary_path(name: impl AsRef<Path>) -> PathBuf {
    Locator::auxiliary(&LocatorConfig::default()).locate(name)
}
