//! Platform collaborators for seekpath.
//!
//! Everything the resolver needs from the operating system goes through the
//! [`Environment`] and [`Probe`] traits so callers can substitute an
//! in-memory environment or a scripted filesystem.

pub use env::{Environment, MapEnv, PATH_LIST_SEPARATOR, join_paths, split_paths};
pub use error::{Error, Result};
pub use probe::Probe;

pub mod dir;
pub mod env;
mod error;
pub mod probe;

/// The live process environment and filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct System;
