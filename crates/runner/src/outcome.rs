// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classified result of running one invocation.

use thiserror::Error;

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The child exited with code 0.
    Succeeded,
    /// The child exited with a non-zero code.
    Failed { code: i32 },
    /// The program could not be located on the execution path.
    NotFound { program: String },
    /// Launching or waiting on the child failed for any other reason.
    Unexpected { message: String },
}

impl Outcome {
    /// Classify a child's exit code.
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            Outcome::Succeeded
        } else {
            Outcome::Failed { code }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }

    /// Exit code this outcome stands for.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Succeeded => 0,
            Outcome::Failed { code } => *code,
            Outcome::NotFound { .. } | Outcome::Unexpected { .. } => 1,
        }
    }

    /// Decide whether the session continues after this outcome.
    ///
    /// Launch failures always abort with code 1. A non-zero exit aborts with
    /// the child's own code only when `strict` is set.
    pub fn check(self, strict: bool) -> Result<Outcome, Abort> {
        match self {
            Outcome::Succeeded => Ok(self),
            Outcome::Failed { code } if strict => Err(Abort::Failed { code }),
            Outcome::Failed { .. } => Ok(self),
            Outcome::NotFound { program } => Err(Abort::NotFound { program }),
            Outcome::Unexpected { message } => Err(Abort::Unexpected { message }),
        }
    }
}

/// The CLI session must stop with [`Abort::exit_code`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Abort {
    #[error("command exited with code {code}")]
    Failed { code: i32 },

    #[error("command not found: {program}")]
    NotFound { program: String },

    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl Abort {
    pub fn exit_code(&self) -> i32 {
        match self {
            Abort::Failed { code } => *code,
            Abort::NotFound { .. } | Abort::Unexpected { .. } => 1,
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
