//! Error types for the fetch, parse and write stages.
//!
//! Every stage failure is terminal for the run. The top-level [`Error`]
//! names the stage so the message alone tells the user where it broke.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {}", cause_chain(.source))]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("{url} returned an empty body")]
    EmptyBody { url: String },
}

/// Render an error followed by each of its sources, joined by ": ".
///
/// reqwest keeps the OS-level reason (connection refused, DNS failure) a few
/// sources down, so its own `Display` alone reads "error sending request".
fn cause_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed JSON at {path}: {message}")]
    Json { path: String, message: String },

    #[error("feed has {available} data blocks, egress table expected at index {index}")]
    MissingBlock { index: usize, available: usize },

    #[error("missing field '{field}' at {path}")]
    MissingField { path: String, field: &'static str },
}

impl ParseError {
    /// Wrap a `serde_path_to_error` failure, prefixing the JSON path of the
    /// value that was being deserialized.
    pub fn at(prefix: &str, e: serde_path_to_error::Error<serde_json::Error>) -> ParseError {
        let inner = e.path().to_string();
        let path = match (prefix.is_empty(), inner.as_str()) {
            (true, _) => inner.clone(),
            (false, ".") => prefix.to_string(),
            (false, _) => format!("{prefix}.{inner}"),
        };
        ParseError::Json {
            path,
            message: e.into_inner().to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("could not serialize output: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("could not write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("write failed: {0}")]
    Write(#[from] WriteError),
}
