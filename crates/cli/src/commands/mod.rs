// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod book;
pub mod docker;
pub mod info;
pub mod quality;

use caderno_runner::{Abort, Invocation, Launcher, Outcome, OutputSink, Runner, Tone};

use crate::config::Config;
use crate::exit_error::ExitError;

/// Everything a command handler needs: the runner, its sink, and settings.
pub struct Session<L, S> {
    runner: Runner<L, S>,
    config: Config,
}

impl<L: Launcher, S: OutputSink> Session<L, S> {
    pub fn new(launcher: L, sink: S, config: Config) -> Self {
        Self { runner: Runner::new(launcher, sink), config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sink(&self) -> &S {
        self.runner.sink()
    }

    pub fn banner(&self, tone: Tone, title: &str) {
        self.sink().banner(tone, title);
    }

    /// Run one invocation; `Err` ends the session with the carried code.
    pub fn run(&self, inv: &Invocation) -> Result<Outcome, ExitError> {
        Ok(self.attempt(inv)?)
    }

    /// Like [`Session::run`], but hands back the abort so the caller may
    /// recover from it.
    pub fn attempt(&self, inv: &Invocation) -> Result<Outcome, Abort> {
        self.runner.run(inv)
    }
}
