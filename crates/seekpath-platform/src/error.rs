use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("environment variable not set: {0}")]
    VarNotSet(String),

    #[error("environment variable {name} is not valid unicode")]
    VarNotUnicode { name: String },
}
