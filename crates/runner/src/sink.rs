// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where status lines go.

/// Semantic style of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
    Command,
    Accent,
    Muted,
}

/// Status output for the user.
///
/// Built once at startup and passed to every command handler. Child
/// processes write to the terminal directly and never go through a sink.
pub trait OutputSink {
    /// Print `label` styled with `tone`, followed by unstyled `detail`.
    ///
    /// An empty `detail` prints the label alone.
    fn print(&self, tone: Tone, label: &str, detail: &str);

    /// Print a framed section title.
    fn banner(&self, tone: Tone, title: &str);
}

impl<S: OutputSink + ?Sized> OutputSink for &S {
    fn print(&self, tone: Tone, label: &str, detail: &str) {
        (**self).print(tone, label, detail);
    }

    fn banner(&self, tone: Tone, title: &str) {
        (**self).banner(tone, title);
    }
}
