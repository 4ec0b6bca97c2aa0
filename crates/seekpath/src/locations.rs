//! Ordered directory lists and their derivation from the environment.

use seekpath_platform::{Environment, Probe, System};
use std::ops::Deref;
use std::path::PathBuf;

/// Ordered candidate base directories. Earlier entries take precedence.
///
/// Duplicates and nonexistent entries are kept as given; use
/// [`Locations::existing`] or [`crate::format::remove_duplicates`] when a
/// caller wants either removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locations(Vec<PathBuf>);

impl Locations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split the named path-list variable. Unset yields an empty list.
    pub fn from_env(env: &impl Environment, variable: &str) -> Self {
        Self(env.paths(variable))
    }

    pub fn push(&mut self, location: impl Into<PathBuf>) {
        self.0.push(location.into());
    }

    /// Keep only entries that are directories right now, in order.
    pub fn existing(mut self, probe: &impl Probe) -> Self {
        self.0.retain(|location| probe.is_dir(location));
        self
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.0
    }
}

impl Deref for Locations {
    type Target = [PathBuf];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[PathBuf]> for Locations {
    fn as_ref(&self) -> &[PathBuf] {
        &self.0
    }
}

impl From<Vec<PathBuf>> for Locations {
    fn from(locations: Vec<PathBuf>) -> Self {
        Self(locations)
    }
}

impl From<Locations> for Vec<PathBuf> {
    fn from(locations: Locations) -> Self {
        locations.0
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for Locations {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<PathBuf>> Extend<P> for Locations {
    fn extend<T: IntoIterator<Item = P>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Locations {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Locations {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds a [`Locations`] list: variable entries first, then fallbacks,
/// then optional existence filtering over the whole list.
#[derive(Debug, Clone, Default)]
pub struct LocationsBuilder {
    variable:   Option<String>,
    fallbacks:  Vec<PathBuf>,
    exist_only: bool,
}

impl LocationsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env(mut self, variable: impl Into<String>) -> Self {
        self.variable = Some(variable.into());
        self
    }

    pub fn fallback(mut self, location: impl Into<PathBuf>) -> Self {
        self.fallbacks.push(location.into());
        self
    }

    pub fn fallbacks<I, P>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.fallbacks.extend(locations.into_iter().map(Into::into));
        self
    }

    pub fn exist_only(mut self, exist_only: bool) -> Self {
        self.exist_only = exist_only;
        self
    }

    pub fn build(self, env: &impl Environment, probe: &impl Probe) -> Locations {
        let mut locations = match &self.variable {
            Some(variable) => Locations::from_env(env, variable),
            None => Locations::new(),
        };
        locations.extend(self.fallbacks);

        if self.exist_only {
            locations = locations.existing(probe);
        }

        tracing::debug!(
            variable = self.variable.as_deref().unwrap_or(""),
            exist_only = self.exist_only,
            count = locations.len(),
            "derived locations"
        );
        locations
    }
}

/// Locations listed in `variable` of the process environment.
pub fn locations_from_env(variable: &str, exist_only: bool) -> Locations {
    LocationsBuilder::new()
        .from_env(variable)
        .exist_only(exist_only)
        .build(&System, &System)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seekpath_platform::{MapEnv, PATH_LIST_SEPARATOR};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_unset_variable_is_empty() {
        let locations = LocationsBuilder::new()
            .from_env("SEEKPATH_TEST_UNSET")
            .build(&MapEnv::new(), &System);
        assert!(locations.is_empty());
    }

    #[test]
    fn test_variable_entries_keep_order_and_empties() {
        let value = format!("/b{0}{0}/a{0}/b", PATH_LIST_SEPARATOR);
        let env = MapEnv::new().with("DIRS", value);
        let locations = Locations::from_env(&env, "DIRS");
        assert_eq!(
            locations.into_vec(),
            vec![
                PathBuf::from("/b"),
                PathBuf::new(),
                PathBuf::from("/a"),
                PathBuf::from("/b")
            ]
        );
    }

    #[test]
    fn test_fallbacks_come_last() {
        let env = MapEnv::new().with_paths("DIRS", ["/env1", "/env2"]);
        let locations = LocationsBuilder::new()
            .fallback("/fb1")
            .from_env("DIRS")
            .fallbacks(["/fb2"])
            .build(&env, &System);
        assert_eq!(
            locations.as_ref(),
            &[
                PathBuf::from("/env1"),
                PathBuf::from("/env2"),
                PathBuf::from("/fb1"),
                PathBuf::from("/fb2")
            ]
        );
    }

    #[test]
    fn test_exist_only_filters_and_keeps_order() -> std::io::Result<()> {
        let dir = tempdir()?;
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        let missing = dir.path().join("missing");
        let file = dir.path().join("file");
        fs::create_dir(&a)?;
        fs::create_dir(&b)?;
        fs::write(&file, "not a dir")?;

        let env = MapEnv::new().with_paths("DIRS", [&b, &missing, &file]);
        let locations = LocationsBuilder::new()
            .from_env("DIRS")
            .fallback(&missing)
            .fallback(&a)
            .exist_only(true)
            .build(&env, &System);

        assert_eq!(locations.into_vec(), vec![b, a]);
        Ok(())
    }

    #[test]
    fn test_without_exist_only_keeps_missing() {
        let env = MapEnv::new().with_paths("DIRS", ["/definitely/not/here"]);
        let locations = LocationsBuilder::new()
            .from_env("DIRS")
            .exist_only(false)
            .build(&env, &System);
        assert_eq!(locations.len(), 1);
    }

    #[test]
    fn test_collect_from_strings() {
        let strings = vec![String::from("x"), String::from("y/z")];
        let locations: Locations = strings.into_iter().collect();
        assert_eq!(&*locations, &[PathBuf::from("x"), PathBuf::from("y/z")]);
    }
}
