//! Filesystem existence checks.
//!
//! A failed query (permission denied, I/O error) is reported as "absent":
//! one unreadable directory must not abort a search over many candidates.

use crate::System;
use std::fs;
use std::io;
use std::path::Path;

pub trait Probe {
    /// True for any existing filesystem object, following symlinks.
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}

impl Probe for System {
    fn exists(&self, path: &Path) -> bool {
        match path.try_exists() {
            Ok(found) => found,
            Err(err) => {
                tracing::debug!(path = %path.display(), %err, "existence check failed");
                false
            }
        }
    }

    fn is_file(&self, path: &Path) -> bool {
        metadata(path).is_some_and(|m| m.is_file())
    }

    fn is_dir(&self, path: &Path) -> bool {
        metadata(path).is_some_and(|m| m.is_dir())
    }
}

impl<P: Probe + ?Sized> Probe for &P {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}

fn metadata(path: &Path) -> Option<fs::Metadata> {
    match fs::metadata(path) {
        Ok(meta) => Some(meta),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "metadata query failed");
            None
        }
    }
}
