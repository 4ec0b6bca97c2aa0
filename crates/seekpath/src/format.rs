//! Combining path lists: delimited joining and base × suffix expansion.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub use seekpath_platform::env::{join_paths, split_paths};

/// Every `base/suffix`, base-major: all suffixes of the first base, then all
/// suffixes of the second, and so on.
pub fn multi_path_append<B, S>(bases: &[B], suffixes: &[S]) -> Vec<PathBuf>
where
    B: AsRef<Path>,
    S: AsRef<Path>,
{
    let mut paths = Vec::with_capacity(bases.len() * suffixes.len());
    for base in bases {
        for suffix in suffixes {
            paths.push(base.as_ref().join(suffix));
        }
    }
    paths
}

/// Drop repeated entries, keeping the first occurrence of each.
pub fn remove_duplicates<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    let mut seen = HashSet::with_capacity(paths.len());
    paths
        .iter()
        .map(|p| p.as_ref())
        .filter(|p| seen.insert(*p))
        .map(Path::to_path_buf)
        .collect()
}
