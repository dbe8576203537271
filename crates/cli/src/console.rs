// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal implementation of [`OutputSink`].

use std::cell::RefCell;
use std::io::{self, Write};

use caderno_runner::{OutputSink, Tone};

use crate::color;

/// Writes status lines to a terminal stream (stdout in production).
pub struct Console<W: Write = io::Stdout> {
    out: RefCell<W>,
    colorize: bool,
}

impl Console {
    /// Stdout console; color follows `NO_COLOR` / `COLOR` / TTY detection.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), color::should_colorize())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, colorize: bool) -> Self {
        Self { out: RefCell::new(out), colorize }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.borrow_mut();
        // A closed stdout leaves nothing to report to.
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

/// Render a print line without the trailing newline.
pub fn format_line(tone: Tone, label: &str, detail: &str, colorize: bool) -> String {
    let label = color::paint(tone, label, colorize);
    if detail.is_empty() {
        label
    } else {
        format!("{label} {detail}")
    }
}

/// Render a framed banner.
pub fn format_banner(tone: Tone, title: &str, colorize: bool) -> String {
    let width = title.chars().count() + 2;
    format!(
        "╭{}╮\n│ {} │\n╰{}╯",
        "─".repeat(width),
        color::paint(tone, title, colorize),
        "─".repeat(width)
    )
}

impl<W: Write> OutputSink for Console<W> {
    fn print(&self, tone: Tone, label: &str, detail: &str) {
        self.write_line(&format_line(tone, label, detail, self.colorize));
    }

    fn banner(&self, tone: Tone, title: &str) {
        self.write_line(&format_banner(tone, title, self.colorize));
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
