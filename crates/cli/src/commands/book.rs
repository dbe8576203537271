// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `caderno build`, `caderno start`, `caderno clean` — local MyST workflow.

use anyhow::Result;
use caderno_runner::{Invocation, Launcher, OutputSink, Tone};
use clap::Args;

use super::Session;
use crate::config::Config;
use crate::exit_error::ExitError;

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildArgs {
    /// Execute notebooks during the build
    #[arg(long)]
    pub execute: bool,
    /// Build every configured export
    #[arg(long = "all")]
    pub all_exports: bool,
    /// Build static HTML output
    #[arg(long)]
    pub html: bool,
    /// Build the MyST site
    #[arg(long)]
    pub site: bool,
    /// Build PDF output through Typst
    #[arg(long)]
    pub typst: bool,
    /// Stop the build on errors
    #[arg(long)]
    pub strict: bool,
    /// Check for broken links
    #[arg(long)]
    pub check_links: bool,
}

/// `uv run myst build` with the requested flags, run inside the books dir.
pub fn build_invocation(args: &BuildArgs, config: &Config) -> Invocation {
    Invocation::new("uv", "MyST build")
        .args(["run", "myst", "build"])
        .flag(args.execute, "--execute")
        .flag(args.all_exports, "--all")
        .flag(args.html, "--html")
        .flag(args.site, "--site")
        .flag(args.typst, "--typst")
        .flag(args.strict, "--strict")
        .flag(args.check_links, "--check-links")
        .cwd(&config.books_dir)
}

pub fn start_invocation(config: &Config) -> Invocation {
    Invocation::new("uv", "MyST server")
        .args(["run", "myst", "start"])
        .cwd(&config.books_dir)
        .lenient()
}

pub fn build<L: Launcher, S: OutputSink>(session: &Session<L, S>, args: &BuildArgs) -> Result<()> {
    session.banner(Tone::Command, "🔨 Building the project (local)");

    let books = &session.config().books_dir;
    if !books.is_dir() {
        session.sink().print(
            Tone::Error,
            "Error:",
            &format!("directory '{}' not found.", books.display()),
        );
        return Err(ExitError::silent(1).into());
    }

    session.run(&build_invocation(args, session.config()))?;
    Ok(())
}

pub fn start<L: Launcher, S: OutputSink>(session: &Session<L, S>) -> Result<()> {
    session.banner(Tone::Success, "🚀 Starting local server");
    session.run(&start_invocation(session.config()))?;
    Ok(())
}

/// Remove `_build` and `.myst` under the books dir.
///
/// Missing directories are skipped; a failed removal is reported and the
/// remaining paths are still attempted.
pub fn clean<L: Launcher, S: OutputSink>(session: &Session<L, S>) -> Result<()> {
    session.banner(Tone::Error, "🧹 Cleaning local project");

    let books = &session.config().books_dir;
    for path in [books.join("_build"), books.join(".myst")] {
        if !path.exists() {
            continue;
        }
        match std::fs::remove_dir_all(&path) {
            Ok(()) => {
                session.sink().print(Tone::Success, "✓ Removed:", &path.display().to_string());
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "remove failed");
                session.sink().print(
                    Tone::Error,
                    &format!("Error removing {}:", path.display()),
                    &e.to_string(),
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod tests;
