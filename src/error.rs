//! Error types for breakaway filters.

use thiserror::Error;

/// Errors that abort a filter run. Every one of them is fatal: the filter
/// writes nothing to its output once one is raised.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read asset {name}: {source}")]
    Asset {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required element: <{0}>")]
    MissingElement(String),

    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

pub type Result<T> = std::result::Result<T, Error>;
