// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `caderno docker` — container workflow through Docker and compose.

use anyhow::Result;
use caderno_runner::{Invocation, Launcher, OutputSink, Tone};
use clap::{Args, Subcommand};

use super::Session;
use crate::config::Config;

#[derive(Args, Debug)]
pub struct DockerArgs {
    #[command(subcommand)]
    pub command: Option<DockerCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DockerCommand {
    /// Build the project's Docker image
    Build,
    /// Start the development server in Docker (port 3000)
    Up,
    /// Open an interactive shell in the container
    Shell,
    /// Compile the project with Typst inside Docker
    Typst(TypstArgs),
    /// Run an arbitrary command in the build container
    ///
    /// Example: caderno docker run myst build --pdf
    Run {
        /// Command and arguments to run in the container
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Remove containers and volumes
    Clean,
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct TypstArgs {
    /// Compile only the Springer example
    #[arg(long)]
    pub springer: bool,
    /// Also generate HTML
    #[arg(long)]
    pub html: bool,
}

fn compose(description: &str) -> Invocation {
    Invocation::new("docker", description).arg("compose")
}

/// `docker compose run --rm <build service>`, the prefix for in-container commands.
fn compose_run(config: &Config, description: &str) -> Invocation {
    compose(description).args(["run", "--rm", config.services.build.as_str()])
}

pub fn build_image_invocation(config: &Config) -> Invocation {
    Invocation::new("docker", "Docker build").args(["build", "-t", config.image.as_str(), "."])
}

pub fn up_invocation(config: &Config) -> Invocation {
    compose("Docker compose up").args(["up", config.services.dev.as_str()]).lenient()
}

pub fn shell_invocation(config: &Config) -> Invocation {
    compose("Docker shell")
        .args(["run", "--rm", config.services.shell.as_str()])
        .lenient()
}

pub fn typst_invocation(args: &TypstArgs, config: &Config) -> Invocation {
    let inv = compose_run(config, "Docker Typst build").args(["myst", "build"]);
    let inv = if args.springer { inv.arg(config.springer_source.as_str()) } else { inv };
    inv.arg("--typst").flag(args.html, "--html")
}

/// `None` when there is nothing to run.
pub fn run_invocation(args: &[String], config: &Config) -> Option<Invocation> {
    if args.is_empty() {
        return None;
    }
    Some(compose_run(config, "Docker run").args(args.iter().cloned()).lenient())
}

pub fn clean_invocation() -> Invocation {
    compose("Docker compose down").args(["down", "-v"])
}

pub fn docker<L: Launcher, S: OutputSink>(
    session: &Session<L, S>,
    command: DockerCommand,
) -> Result<()> {
    let config = session.config();
    match command {
        DockerCommand::Build => {
            session.banner(Tone::Command, "🐳 Building Docker image");
            session.run(&build_image_invocation(config))?;
        }
        DockerCommand::Up => {
            session.banner(Tone::Success, "🚀 Starting Docker server");
            session.run(&up_invocation(config))?;
        }
        DockerCommand::Shell => {
            session.banner(Tone::Accent, "🐚 Interactive shell");
            session.run(&shell_invocation(config))?;
        }
        DockerCommand::Typst(args) => {
            session.banner(Tone::Warning, "📝 Compiling with Typst (Docker)");
            session.run(&typst_invocation(&args, config))?;
        }
        DockerCommand::Run { args } => match run_invocation(&args, config) {
            Some(inv) => {
                session.banner(Tone::Info, &format!("🏃 Running in Docker: {}", args.join(" ")));
                session.run(&inv)?;
            }
            None => {
                session.sink().print(Tone::Warning, "No command given.", "");
                session.sink().print(
                    Tone::Muted,
                    "Example:",
                    "caderno docker run myst build --typst",
                );
            }
        },
        DockerCommand::Clean => {
            session.banner(Tone::Error, "🧹 Cleaning Docker");
            session.run(&clean_invocation())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "docker_tests.rs"]
mod tests;
