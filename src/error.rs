use std::io;

use thiserror::Error;

/// Failures of the command-line surface. Rendering itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read article from {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("unknown output format `{0}` (expected json, html, text or debug)")]
    UnknownFormat(String),

    #[error("failed to serialize render tree")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output")]
    Write(#[from] io::Error),
}
