// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `caderno check` and `caderno format` — Ruff and Pyrefly.

use anyhow::Result;
use caderno_runner::{Invocation, Launcher, OutputSink, Tone};
use clap::Args;

use super::Session;

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    /// Fix lint errors automatically
    #[arg(long)]
    pub fix: bool,
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct FormatArgs {
    /// Only check formatting, without rewriting files
    #[arg(long = "check")]
    pub check_only: bool,
}

pub fn lint_invocation(args: &CheckArgs) -> Invocation {
    Invocation::new("uv", "Ruff check")
        .args(["run", "ruff", "check", "."])
        .flag(args.fix, "--fix")
        .lenient()
}

pub fn typecheck_invocation() -> Invocation {
    Invocation::new("uv", "Pyrefly check")
        .args(["run", "pyrefly", "check"])
        .lenient()
}

pub fn format_invocation(args: &FormatArgs) -> Invocation {
    Invocation::new("uv", "Ruff format")
        .args(["run", "ruff", "format", "."])
        .flag(args.check_only, "--check")
}

/// Lint then type-check. Both run even when the linter reports problems.
pub fn check<L: Launcher, S: OutputSink>(session: &Session<L, S>, args: &CheckArgs) -> Result<()> {
    session.banner(Tone::Warning, "🔍 Checking code");

    session.sink().print(Tone::Command, "1. Linter (Ruff)", "");
    session.run(&lint_invocation(args))?;

    session.sink().print(Tone::Command, "2. Type checker (Pyrefly)", "");
    session.run(&typecheck_invocation())?;
    Ok(())
}

pub fn format<L: Launcher, S: OutputSink>(
    session: &Session<L, S>,
    args: &FormatArgs,
) -> Result<()> {
    session.banner(Tone::Accent, "🎨 Formatting code");
    session.run(&format_invocation(args))?;
    Ok(())
}

#[cfg(test)]
#[path = "quality_tests.rs"]
mod tests;
