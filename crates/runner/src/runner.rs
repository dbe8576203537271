// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs invocations one at a time and reports how they ended.
//!
//! Launch is blocking: the caller waits until the child exits. The only
//! retry is the `docker compose` → `docker-compose` substitution applied when
//! the `docker` binary itself cannot be found.

use std::io;
use std::time::Instant;

use crate::{Abort, Invocation, Launcher, Outcome, OutputSink, Tone};

/// Legacy standalone binary tried when `docker compose` cannot be launched.
pub const COMPOSE_FALLBACK: &str = "docker-compose";

pub struct Runner<L, S> {
    launcher: L,
    sink: S,
}

impl<L: Launcher, S: OutputSink> Runner<L, S> {
    pub fn new(launcher: L, sink: S) -> Self {
        Self { launcher, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run `inv`, report the result, and apply its strictness.
    ///
    /// `Ok` means the session continues (possibly after a reported failure);
    /// `Err` carries the code the session must exit with.
    pub fn run(&self, inv: &Invocation) -> Result<Outcome, Abort> {
        let outcome = self.execute(inv);
        self.report(inv, &outcome);
        outcome.check(inv.is_strict())
    }

    /// Run `inv` and classify the result without reporting it.
    pub fn execute(&self, inv: &Invocation) -> Outcome {
        self.announce(inv);

        let mut result = self.launch(inv.program(), inv.arguments(), inv);
        if inv.is_compose() && is_not_found(&result) {
            self.sink.print(
                Tone::Warning,
                "docker compose not found, trying docker-compose...",
                "",
            );
            tracing::warn!(fallback = COMPOSE_FALLBACK, "docker compose unavailable");
            result = self.launch(COMPOSE_FALLBACK, &inv.arguments()[1..], inv);
        }

        let outcome = match result {
            Ok(code) => Outcome::from_code(code),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Outcome::NotFound {
                program: inv.program().to_string(),
            },
            Err(e) => Outcome::Unexpected { message: e.to_string() },
        };
        tracing::debug!(command = %inv.command_line(), ?outcome, "classified");
        outcome
    }

    fn announce(&self, inv: &Invocation) {
        self.sink
            .print(Tone::Info, "Running:", &format!("{}...", inv.description()));
        if let Some(dir) = inv.working_dir() {
            self.sink.print(Tone::Muted, "Directory:", &dir.display().to_string());
        }
        self.sink.print(Tone::Muted, &inv.command_line(), "");
    }

    fn launch(&self, program: &str, args: &[String], inv: &Invocation) -> io::Result<i32> {
        let span = tracing::info_span!(
            "runner.exec",
            program = %program,
            args = ?args,
            exit_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        );
        let _guard = span.enter();

        let start = Instant::now();
        let result = self.launcher.launch(program, args, inv.working_dir());
        span.record("duration_ms", start.elapsed().as_millis() as u64);
        if let Ok(code) = result {
            span.record("exit_code", code);
        }
        result
    }

    fn report(&self, inv: &Invocation, outcome: &Outcome) {
        match outcome {
            Outcome::Succeeded => {
                self.sink.print(Tone::Success, "✓ Success:", inv.description());
            }
            Outcome::Failed { code } => {
                self.sink.print(
                    Tone::Error,
                    "✗ Failed:",
                    &format!("{} (exit code {})", inv.description(), code),
                );
            }
            Outcome::NotFound { program } => {
                self.sink.print(Tone::Error, "Error:", &format!("command not found: {}", program));
            }
            Outcome::Unexpected { message } => {
                self.sink.print(Tone::Error, "Unexpected error:", message);
            }
        }
    }
}

fn is_not_found(result: &io::Result<i32>) -> bool {
    matches!(result, Err(e) if e.kind() == io::ErrorKind::NotFound)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
