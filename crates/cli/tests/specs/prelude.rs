// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for specs: scratch projects, stand-in tools, assertions.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Output;

use tempfile::TempDir;

/// Run `caderno` with no tools available at all.
pub fn cli() -> CliBuilder {
    let project = Project::empty();
    let builder = project.caderno();
    builder.owning(project)
}

/// A scratch project directory with a private `bin/` used as `PATH`.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("bin")).unwrap();
        Self { dir }
    }

    /// A project with an empty `books/` directory.
    pub fn with_books() -> Self {
        let project = Self::empty();
        project.mkdir("books");
        project
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn mkdir(&self, rel: &str) {
        std::fs::create_dir_all(self.path(rel)).unwrap();
    }

    pub fn file(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Install a stand-in `name` that logs its call and exits with `code`.
    pub fn tool(&self, name: &str, code: i32) -> &Self {
        let script = format!(
            "#!/bin/sh\nprintf '%s|%s|%s\\n' '{name}' \"$(pwd)\" \"$*\" >> '{log}'\nexit {code}\n",
            log = self.log_path().display(),
        );
        let path = self.path("bin").join(name);
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    /// Logged calls as `(program, cwd, args)`.
    pub fn calls(&self) -> Vec<Call> {
        let Ok(log) = std::fs::read_to_string(self.log_path()) else {
            return Vec::new();
        };
        log.lines()
            .map(|line| {
                let mut parts = line.splitn(3, '|');
                Call {
                    program: parts.next().unwrap_or_default().to_string(),
                    cwd: PathBuf::from(parts.next().unwrap_or_default()),
                    args: parts.next().unwrap_or_default().to_string(),
                }
            })
            .collect()
    }

    pub fn caderno(&self) -> CliBuilder {
        let mut cmd = assert_cmd::Command::cargo_bin("caderno").unwrap();
        cmd.current_dir(self.dir.path())
            .env("PATH", self.path("bin"))
            .env("NO_COLOR", "1")
            .env_remove("COLOR")
            .env_remove("CADERNO_CONFIG")
            .env_remove("CADERNO_BOOKS_DIR")
            .env_remove("CADERNO_LOG");
        CliBuilder { cmd, _project: None }
    }

    fn log_path(&self) -> PathBuf {
        self.path("calls.log")
    }
}

#[derive(Debug, Clone)]
pub struct Call {
    pub program: String,
    pub cwd: PathBuf,
    pub args: String,
}

impl Call {
    pub fn ran_in(&self, dir: &Path) -> bool {
        match (self.cwd.canonicalize(), dir.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
    _project: Option<Project>,
}

impl CliBuilder {
    fn owning(mut self, project: Project) -> Self {
        self._project = Some(project);
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    fn output(mut self) -> Output {
        self.cmd.output().unwrap()
    }

    /// Run and assert exit code 0.
    pub fn passes(self) -> RunAssert {
        let output = self.output();
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        RunAssert { output }
    }

    /// Run and assert a specific non-zero exit code.
    pub fn fails_with(self, code: i32) -> RunAssert {
        let output = self.output();
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        RunAssert { output }
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {needle:?}:\n{stdout}");
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(needle), "stdout unexpectedly has {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {needle:?}:\n{stderr}");
        self
    }
}
