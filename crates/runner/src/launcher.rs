// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process creation seam.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Starts a program, waits for it, and returns its exit code.
///
/// Errors are launch errors (e.g. [`io::ErrorKind::NotFound`]); a child that
/// ran and failed is an `Ok` with a non-zero code.
pub trait Launcher {
    fn launch(&self, program: &str, args: &[String], cwd: Option<&Path>) -> io::Result<i32>;
}

impl<L: Launcher + ?Sized> Launcher for &L {
    fn launch(&self, program: &str, args: &[String], cwd: Option<&Path>) -> io::Result<i32> {
        (**self).launch(program, args, cwd)
    }
}

/// Launches real child processes that share the caller's stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, program: &str, args: &[String], cwd: Option<&Path>) -> io::Result<i32> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        let status = command.status()?;
        Ok(status_code(status))
    }
}

/// Exit code of a finished child. Signal deaths map to `128 + signal`.
fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(all(test, unix))]
#[path = "launcher_tests.rs"]
mod tests;
