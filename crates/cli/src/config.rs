// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project settings from `caderno.toml`.
//!
//! Every key is optional; defaults describe the stock project layout.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the current directory when none is named.
pub const DEFAULT_FILE: &str = "caderno.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// MyST project root
    pub books_dir: PathBuf,
    /// Tag for `docker build`
    pub image: String,
    /// Source rendered by `docker typst --springer`
    pub springer_source: String,
    pub services: Services,
}

/// Compose service names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Services {
    pub dev: String,
    pub shell: String,
    pub build: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            books_dir: PathBuf::from("books"),
            image: "caderno-myst:latest".to_string(),
            springer_source: "books/guia-myst/exemplo-springer.md".to_string(),
            services: Services::default(),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self {
            dev: "myst-dev".to_string(),
            shell: "myst-shell".to_string(),
            build: "myst-build".to_string(),
        }
    }
}

impl Config {
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config for this session.
    ///
    /// An explicit path must exist. Without one, `caderno.toml` in `dir` is
    /// read when present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => (dir.join(DEFAULT_FILE), false),
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        tracing::debug!(path = %path.display(), "loading config");
        Self::parse(&path, &content)
    }

    pub fn with_books_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.books_dir = dir;
        }
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
