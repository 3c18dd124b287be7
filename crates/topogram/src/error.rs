//! Error types for Topogram operations.
//!
//! This module provides the main error type [`TopogramError`] which wraps
//! the error conditions that can occur while validating, exporting, and
//! rendering a diagram.

use std::io;

use thiserror::Error;

/// The main error type for Topogram operations.
///
/// Rendering failure is binary: either Graphviz produces the image, or the
/// failure it reports surfaces here as a `Render` error. There are no
/// retries and no partial outputs.
#[derive(Debug, Error)]
pub enum TopogramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),

    #[error("Graphviz rendering failed: {0}")]
    Render(String),
}

impl From<crate::export::Error> for TopogramError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
