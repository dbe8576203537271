// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use caderno_runner::Tone;
use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use std::io::IsTerminal;

pub mod codes {
    /// Informational labels: pastel cyan / steel blue
    pub const INFO: u8 = 74;
    /// Success: soft green
    pub const SUCCESS: u8 = 114;
    /// Warnings: amber
    pub const WARNING: u8 = 179;
    /// Errors: brick red
    pub const ERROR: u8 = 167;
    /// Commands and banners for build steps: blue
    pub const COMMAND: u8 = 68;
    /// Formatting and shell banners: orchid
    pub const ACCENT: u8 = 176;
    /// Echoed command lines and directories: medium grey
    pub const MUTED: u8 = 245;
    /// Literals in help output: light grey
    pub const LITERAL: u8 = 250;
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Build clap `Styles` using the project palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(Style::new().bold().fg_color(Some(Color::Ansi256(Ansi256Color(codes::INFO)))))
        .usage(Style::new().bold().fg_color(Some(Color::Ansi256(Ansi256Color(codes::INFO)))))
        .literal(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::LITERAL)))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::MUTED)))))
        .error(Style::new().bold().fg_color(Some(Color::Ansi256(Ansi256Color(codes::ERROR)))))
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn code(tone: Tone) -> u8 {
    match tone {
        Tone::Info => codes::INFO,
        Tone::Success => codes::SUCCESS,
        Tone::Warning => codes::WARNING,
        Tone::Error => codes::ERROR,
        Tone::Command => codes::COMMAND,
        Tone::Accent => codes::ACCENT,
        Tone::Muted => codes::MUTED,
    }
}

fn is_bold(tone: Tone) -> bool {
    matches!(tone, Tone::Success | Tone::Error | Tone::Command)
}

/// Wrap `text` in the ANSI sequence for `tone`, or return it unchanged.
pub fn paint(tone: Tone, text: &str, colorize: bool) -> String {
    if !colorize || text.is_empty() {
        return text.to_string();
    }
    let weight = if is_bold(tone) { BOLD } else { "" };
    format!("{}{}{}{}", weight, fg256(code(tone)), text, RESET)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
