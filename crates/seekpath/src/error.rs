use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{} not found in any location of {variable}", .name.display())]
    NotFound {
        name:     PathBuf,
        variable: &'static str,
    },

    #[error("unknown path kind: {0}")]
    UnknownKind(String),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
