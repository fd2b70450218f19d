//! Error types for collateral generation.
//!
//! This module provides the main error type [`VizError`] which wraps the
//! error conditions that can occur while building datasets, constructing
//! graphs, and writing outputs.

use std::io;

use thiserror::Error;

/// The main error type for collateral generation.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Config error: {0}")]
    Config(String),
}
