//! Crate errors.

use std::{io, path::PathBuf, string::FromUtf8Error};
use thiserror::Error;

/// A failure loading, decoding or writing a resource.
///
/// Every failure is terminal: nothing is retried and no partial value is ever returned.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The resource id did not resolve to any resource.
    #[error("resource not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// The resource exists but could not be read.
    #[error("failed to read resource {id}")]
    Read {
        /// The id of the resource.
        id: String,

        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The resource is not valid JSON text or does not match the requested shape.
    #[error("malformed content in resource {id}")]
    MalformedContent {
        /// The id of the resource.
        id: String,

        /// The parser diagnostic.
        #[source]
        source: ContentError,
    },

    /// A temporal value does not follow the fixed temporal convention.
    #[error("unsupported temporal format in resource {id}")]
    UnsupportedTemporalFormat {
        /// The id of the resource.
        id: String,

        /// The parser diagnostic, including the offending text and its position.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized or persisted.
    #[error("failed to write {}", path.display())]
    Write {
        /// The destination of the write.
        path: PathBuf,

        /// The underlying failure.
        #[source]
        source: io::Error,
    },
}

/// Why the content of a resource was rejected.
#[derive(Error, Debug)]
pub enum ContentError {
    /// The text is not JSON, or its structure does not match the requested shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The bytes are not UTF-8 text.
    #[error(transparent)]
    Encoding(#[from] FromUtf8Error),
}
