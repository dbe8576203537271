// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! caderno: developer workflow CLI for the MyST documentation project.

mod color;
mod commands;
mod config;
mod console;
mod env;
mod exit_error;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use caderno_runner::{Launcher, OutputSink, SystemLauncher};
use clap::{CommandFactory, Parser, Subcommand};

use commands::book::{self, BuildArgs};
use commands::docker::{self, DockerArgs};
use commands::info;
use commands::quality::{self, CheckArgs, FormatArgs};
use commands::Session;
use config::Config;
use console::Console;
use exit_error::ExitError;

/// Manage the Caderno documentation project.
#[derive(Parser)]
#[command(name = "caderno", version, long_version = env::LONG_VERSION, styles = color::styles())]
struct Cli {
    /// Config file (default: ./caderno.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the MyST project locally (through uv)
    Build(BuildArgs),
    /// Start the local development server
    Start,
    /// Run quality checks (Ruff, Pyrefly)
    Check(CheckArgs),
    /// Format code with Ruff
    Format(FormatArgs),
    /// Remove local build artifacts
    Clean,
    /// Show environment information
    Info,
    /// Manage the Docker environment
    Docker(DockerArgs),
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    // Logs go to stderr so they never mix with child stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(explicit: Option<PathBuf>) -> Result<Config> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let explicit = explicit.or_else(env::config_path);
    let config = Config::load(explicit.as_deref(), &cwd)
        .map_err(|e| ExitError::new(1, e.to_string()))?;
    Ok(config.with_books_dir(env::books_dir()))
}

fn print_help(path: &[&str]) {
    let mut cmd = Cli::command();
    cmd.build();
    for name in path {
        match cmd.find_subcommand(name).cloned() {
            Some(sub) => cmd = sub,
            None => break,
        }
    }
    let _ = cmd.print_help();
}

fn dispatch<L: Launcher, S: OutputSink>(session: &Session<L, S>, command: Commands) -> Result<()> {
    match command {
        Commands::Build(args) => book::build(session, &args),
        Commands::Start => book::start(session),
        Commands::Check(args) => quality::check(session, &args),
        Commands::Format(args) => quality::format(session, &args),
        Commands::Clean => book::clean(session),
        Commands::Info => info::info(session),
        Commands::Docker(DockerArgs { command: Some(cmd) }) => docker::docker(session, cmd),
        Commands::Docker(DockerArgs { command: None }) => {
            print_help(&["docker"]);
            Ok(())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        print_help(&[]);
        return Ok(());
    };

    let config = load_config(cli.config)?;
    tracing::debug!(?config, "session config");

    let session = Session::new(SystemLauncher, Console::stdout(), config);
    dispatch(&session, command)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(exit) = e.downcast_ref::<ExitError>() {
                if !exit.message.is_empty() {
                    eprintln!("Error: {}", exit.message);
                }
                return ExitCode::from(exit_byte(exit.code));
            }
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Process exit codes are a byte; out-of-range codes keep their low bits.
fn exit_byte(code: i32) -> u8 {
    (code & 0xff) as u8
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
