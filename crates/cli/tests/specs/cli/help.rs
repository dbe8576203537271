//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn caderno_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn caderno_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("build")
        .stdout_has("check")
        .stdout_has("docker");
}

#[test]
fn caderno_build_help_shows_flags() {
    cli()
        .args(&["build", "--help"])
        .passes()
        .stdout_has("--check-links")
        .stdout_has("--all");
}

#[test]
fn caderno_docker_no_subcommand_shows_subcommands() {
    cli()
        .args(&["docker"])
        .passes()
        .stdout_has("typst")
        .stdout_has("shell")
        .stdout_has("clean");
}

#[test]
fn caderno_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn unknown_command_is_a_usage_error() {
    cli().args(&["deploy"]).fails_with(2);
}
