// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Behavioral specs for the `caderno` binary.
//!
//! External tools are replaced by shell-script stand-ins on a private `PATH`,
//! so these specs only run on Unix.

#![cfg(unix)]

mod prelude;

mod cli {
    mod help;
}

mod project {
    mod build;
    mod check;
    mod clean;
    mod config;
}

mod docker {
    mod compose;
    mod image;
}
