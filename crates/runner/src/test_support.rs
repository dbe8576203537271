// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fakes for exercising the runner without spawning processes.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use crate::{Launcher, OutputSink, Tone};

/// One recorded launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Launch {
    /// Program and args as one token list.
    pub fn tokens(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// Launcher with per-program scripted results.
///
/// Queued one-shot results are consumed first, in order. After that the
/// standing script applies; programs without one behave as missing from
/// the execution path.
#[derive(Debug, Default)]
pub struct ScriptedLauncher {
    exits: HashMap<String, i32>,
    errors: HashMap<String, io::ErrorKind>,
    queued: RefCell<HashMap<String, VecDeque<Result<i32, io::ErrorKind>>>>,
    launches: RefCell<Vec<Launch>>,
}

impl ScriptedLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// `program` runs and exits with `code`.
    pub fn exits(mut self, program: &str, code: i32) -> Self {
        self.exits.insert(program.to_string(), code);
        self
    }

    /// Launching `program` fails with `kind`.
    pub fn fails(mut self, program: &str, kind: io::ErrorKind) -> Self {
        self.errors.insert(program.to_string(), kind);
        self
    }

    /// The next unconsumed launch of `program` exits with `code`.
    pub fn then_exits(self, program: &str, code: i32) -> Self {
        self.enqueue(program, Ok(code))
    }

    /// The next unconsumed launch of `program` fails with `kind`.
    pub fn then_fails(self, program: &str, kind: io::ErrorKind) -> Self {
        self.enqueue(program, Err(kind))
    }

    fn enqueue(self, program: &str, result: Result<i32, io::ErrorKind>) -> Self {
        self.queued
            .borrow_mut()
            .entry(program.to_string())
            .or_default()
            .push_back(result);
        self
    }

    pub fn launches(&self) -> Vec<Launch> {
        self.launches.borrow().clone()
    }
}

impl Launcher for ScriptedLauncher {
    fn launch(&self, program: &str, args: &[String], cwd: Option<&Path>) -> io::Result<i32> {
        self.launches.borrow_mut().push(Launch {
            program: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.map(Path::to_path_buf),
        });
        let next = self
            .queued
            .borrow_mut()
            .get_mut(program)
            .and_then(VecDeque::pop_front);
        if let Some(result) = next {
            return result.map_err(|kind| {
                io::Error::new(kind, format!("scripted failure for {program}"))
            });
        }
        if let Some(kind) = self.errors.get(program) {
            return Err(io::Error::new(*kind, format!("scripted failure for {program}")));
        }
        match self.exits.get(program) {
            Some(code) => Ok(*code),
            None => Err(io::Error::new(io::ErrorKind::NotFound, format!("{program} not scripted"))),
        }
    }
}

/// A line captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Print { tone: Tone, label: String, detail: String },
    Banner { tone: Tone, title: String },
}

impl Line {
    /// Label and detail (or banner title) as plain text.
    pub fn text(&self) -> String {
        match self {
            Line::Print { label, detail, .. } if detail.is_empty() => label.clone(),
            Line::Print { label, detail, .. } => format!("{label} {detail}"),
            Line::Banner { title, .. } => title.clone(),
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Line::Print { tone, .. } | Line::Banner { tone, .. } => *tone,
        }
    }
}

/// Sink that keeps every line for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: RefCell<Vec<Line>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<Line> {
        self.lines.borrow().clone()
    }

    /// Whether any line of `tone` contains `needle`.
    pub fn has(&self, tone: Tone, needle: &str) -> bool {
        self.lines
            .borrow()
            .iter()
            .any(|l| l.tone() == tone && l.text().contains(needle))
    }
}

impl OutputSink for RecordingSink {
    fn print(&self, tone: Tone, label: &str, detail: &str) {
        self.lines.borrow_mut().push(Line::Print {
            tone,
            label: label.to_string(),
            detail: detail.to_string(),
        });
    }

    fn banner(&self, tone: Tone, title: &str) {
        self.lines
            .borrow_mut()
            .push(Line::Banner { tone, title: title.to_string() });
    }
}
