// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the prefix tree.

/// Errors that can occur in prefix tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixTreeError {
    /// A required argument was absent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
