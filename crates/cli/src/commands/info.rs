// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `caderno info` — tool versions in the local environment.

use anyhow::Result;
use caderno_runner::{Invocation, Launcher, OutputSink, Tone};

use super::Session;

pub fn probes() -> [Invocation; 3] {
    [
        Invocation::new("uv", "UV version").arg("version").lenient(),
        Invocation::new("python", "Python version").arg("--version").lenient(),
        Invocation::new("uv", "MyST version").args(["run", "myst", "--version"]).lenient(),
    ]
}

/// A missing `uv` or `python` ends the session. The MyST probe only warns,
/// since MyST is optional until the first build.
pub fn info<L: Launcher, S: OutputSink>(session: &Session<L, S>) -> Result<()> {
    session.banner(Tone::Info, "ℹ️ Environment information");

    let [uv, python, myst] = probes();
    session.run(&uv)?;
    session.run(&python)?;
    if let Err(abort) = session.attempt(&myst) {
        tracing::debug!(%abort, "myst probe failed");
        session.sink().print(Tone::Warning, "MyST not available through uv:", &abort.to_string());
    }
    Ok(())
}

#[cfg(test)]
#[path = "info_tests.rs"]
mod tests;
