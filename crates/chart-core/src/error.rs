// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy surfaced by rendering calls.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// The output file could not be written (missing directory, permissions).
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The backend could not produce a chart from the given data or options.
    #[error("render failed: {0}")]
    Render(String),
}

impl ChartError {
    pub(crate) fn render(msg: impl Into<String>) -> Self {
        ChartError::Render(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
