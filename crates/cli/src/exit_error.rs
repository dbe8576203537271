// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries the session's process exit code.
//!
//! Handlers return `ExitError` instead of calling `std::process::exit()`
//! directly, so `main()` owns process termination.

use std::fmt;

use caderno_runner::Abort;

#[derive(Debug, PartialEq, Eq)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Exit with `code` after the problem has already been shown to the user.
    pub fn silent(code: i32) -> Self {
        Self { code, message: String::new() }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// The runner reports an abort before returning it.
impl From<Abort> for ExitError {
    fn from(abort: Abort) -> Self {
        Self::silent(abort.exit_code())
    }
}
