// Copyright (c) 2025 Prefix Tree Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for the prefix tree library.
//!
//! Unit tests live next to the code they cover. This module holds the
//! cross-cutting suites:
//! - Property-based tests for the tree using proptest
//! - Configuration loading tests against real files and environment variables
//! - Shared strategies and fixtures

pub mod prefix_tree_tests;
