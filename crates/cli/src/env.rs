// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// CLI version with the build's git hash
pub const LONG_VERSION: &str =
    concat!(env!("CARGO_PKG_VERSION"), "+", env!("CADERNO_BUILD_HASH"));

/// Config file named by `CADERNO_CONFIG`, if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    non_empty("CADERNO_CONFIG").map(PathBuf::from)
}

/// Books directory override
pub fn books_dir() -> Option<PathBuf> {
    non_empty("CADERNO_BOOKS_DIR").map(PathBuf::from)
}

/// `tracing` filter directives (default `warn`).
pub fn log_filter() -> String {
    non_empty("CADERNO_LOG").unwrap_or_else(|| "warn".to_string())
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}
