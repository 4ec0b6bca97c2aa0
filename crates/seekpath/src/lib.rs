//! Ordered search-path resolution.
//!
//! A resource name is looked up under each entry of an ordered directory
//! list; the first existing match wins, or every match is returned in list
//! order. Directory lists are typically derived from `PATH`-style
//! environment variables followed by built-in fallbacks.
//!
//! ```
//! use seekpath::{Locations, resolve_all, resolve_first};
//!
//! let locations: Locations = ["/nonexistent/site", "/nonexistent/user"]
//!     .into_iter()
//!     .collect();
//!
//! let found = resolve_first("missing.conf", &locations);
//! assert!(found.file_name().is_none());
//! assert!(resolve_all("missing.conf", &locations).is_empty());
//! ```

pub use config::LocatorConfig;
pub use error::{Error, Result};
pub use format::{join_paths, multi_path_append, remove_duplicates, split_paths};
pub use kind::PathKind;
pub use locations::{Locations, LocationsBuilder, locations_from_env};
pub use locator::{Locator, auxiliary_locations, auxiliary_path, auxiliary_variable_name};
pub use resolver::{Resolver, find_first, resolve_all, resolve_first, resolve_from_env};

pub mod config;
mod error;
pub mod format;
mod kind;
pub mod locations;
pub mod locator;
pub mod resolver;
