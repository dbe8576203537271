// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! caderno-runner: runs external tools on behalf of the `caderno` CLI.
//!
//! An [`Invocation`] is launched through a [`Launcher`], classified into an
//! [`Outcome`], and reported through an [`OutputSink`]. Strict invocations
//! turn a failing outcome into an [`Abort`] carrying the session exit code.

mod invocation;
mod launcher;
mod outcome;
mod runner;
mod sink;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use invocation::Invocation;
pub use launcher::{Launcher, SystemLauncher};
pub use outcome::{Abort, Outcome};
pub use runner::{Runner, COMPOSE_FALLBACK};
pub use sink::{OutputSink, Tone};
