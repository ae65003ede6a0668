use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("no images found for '{query}'")]
    NoResultsFound { query: String },

    #[error("invalid url: {url}")]
    InvalidUrl { url: String },

    /// Per-image failure. Never propagated past the worker that hit it.
    #[error("{reason}")]
    Download { url: String, reason: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not start download workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
