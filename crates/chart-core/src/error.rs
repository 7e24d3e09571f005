// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy surfaced by the rendering entry points.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// Missing or inconsistent dataset fields.
    #[error("data error: {0}")]
    Data(String),
    /// Malformed color or resolution string.
    #[error("format error: {0}")]
    Format(String),
    #[error("cannot write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Raster backend failure (surface allocation, PNG encoding).
    #[error("render error: {0}")]
    Render(String),
}

impl ChartError {
    pub(crate) fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
