//! Error types for spark-props.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ElementKind;

/// Errors raised by the few runtime helpers in this crate.
///
/// Property shapes themselves are checked at compile time.
#[derive(Debug, Error)]
pub enum Error {
    /// A ref handle was attached while it still observed another renderable.
    #[error("ref is already attached to renderable `{id}`")]
    RefAlreadyAttached { id: String },

    /// An update was computed between elements of different kinds.
    #[error("cannot update a {previous} element from a {next} element")]
    KindMismatch {
        previous: ElementKind,
        next: ElementKind,
    },

    /// A defaults file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A defaults file could not be parsed.
    #[error("invalid engine defaults: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
