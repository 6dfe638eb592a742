//! Output document building and writing.
//!
//! This module handles the last two pipeline stages:
//! - [`emit`] - building the [`OutputDocument`](crate::models::OutputDocument) for the chosen mode
//! - [`json`] - serializing it and replacing the target file atomically

mod emit;
mod json;

pub use emit::emit;
pub use json::write_document;
