//! Error module for the prefix tree application.
//!
//! Each concern owns a `thiserror` enum; [`AppError`] gathers them for the
//! word-list loader and the binary so `?` works across module boundaries.

use thiserror::Error;

use crate::data_structures::prefix_tree::PrefixTreeError;

pub mod config;

pub use self::config::ConfigError;

/// Result type alias used by the application layer.
pub type AppResult<T> = Result<T, AppError>;

/// Core error enum for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised by the prefix tree itself.
    #[error("Prefix tree error: {0}")]
    PrefixTree(#[from] PrefixTreeError),

    /// IO errors that may occur while reading word lists or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
