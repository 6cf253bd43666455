//! The `error` module defines the error types used within the `postbox` application.
//!
//! Each boundary of the system gets its own error enum so callers can decide
//! what is fatal and what is merely logged: decode failures drop a single
//! frame, relay failures drop a single submission, store failures are retried
//! by the writer before the record is given up on.

use thiserror::Error;

/// Errors produced while decoding a wire frame into a message.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The frame is not valid UTF-8 text.
    #[error("frame is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Errors produced by the relay client while handing a message off.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The relay server could not be reached at all.
    #[error("relay server unreachable at {addr}: {source}")]
    Unreachable {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The connection was established but writing the frame failed.
    #[error("relay write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by the document store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database could not be opened at startup.
    #[error("failed to open document store at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: sled::Error,
    },

    /// A single insert attempt failed.
    #[error("insert failed: {0}")]
    Insert(#[from] sled::Error),

    /// The record could not be serialized for storage.
    #[error("record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
