// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single external command to run.

use std::path::{Path, PathBuf};

/// Program, arguments, and launch options for one external command.
///
/// Invocations are strict by default: a non-zero exit aborts the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    description: String,
    cwd: Option<PathBuf>,
    strict: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            description: description.into(),
            cwd: None,
            strict: true,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append `arg` only when `enabled` is set. Used for boolean CLI flags.
    pub fn flag(self, enabled: bool, arg: &str) -> Self {
        if enabled {
            self.arg(arg)
        } else {
            self
        }
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Let a non-zero exit be reported without aborting the session.
    pub fn lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// All tokens, program first.
    pub fn tokens(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    /// Space-joined tokens, as echoed to the console before launch.
    pub fn command_line(&self) -> String {
        self.tokens().join(" ")
    }

    /// Whether the invocation starts with `docker compose`.
    pub(crate) fn is_compose(&self) -> bool {
        self.program == "docker" && self.args.first().is_some_and(|a| a == "compose")
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
