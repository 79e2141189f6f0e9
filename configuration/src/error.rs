use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in `{path}`: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid value for `{key}`: {message}")]
    InvalidEnv { key: String, message: String },
}
