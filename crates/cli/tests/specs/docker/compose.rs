//! Compose invocations and the `docker-compose` fallback.

use crate::prelude::*;

#[test]
fn up_falls_back_to_docker_compose_binary() {
    let temp = Project::empty();
    temp.tool("docker-compose", 0);

    temp.caderno()
        .args(&["docker", "up"])
        .passes()
        .stdout_has("trying docker-compose")
        .stdout_has("✓ Success:");

    let calls = temp.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "docker-compose");
    assert_eq!(calls[0].args, "up myst-dev");
}

#[test]
fn compose_plugin_is_preferred_when_docker_exists() {
    let temp = Project::empty();
    temp.tool("docker", 0).tool("docker-compose", 0);

    temp.caderno().args(&["docker", "shell"]).passes().stdout_lacks("trying docker-compose");

    let calls = temp.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "docker");
    assert_eq!(calls[0].args, "compose run --rm myst-shell");
}

#[test]
fn compose_without_any_binary_exits_one() {
    let temp = Project::empty();
    temp.caderno()
        .args(&["docker", "clean"])
        .fails_with(1)
        .stdout_has("command not found: docker");
}

#[test]
fn strict_compose_failure_propagates_exit_code() {
    let temp = Project::empty();
    temp.tool("docker", 9);

    temp.caderno().args(&["docker", "clean"]).fails_with(9);
    assert_eq!(temp.calls()[0].args, "compose down -v");
}

#[test]
fn typst_springer_builds_example_with_html() {
    let temp = Project::empty();
    temp.tool("docker", 0);

    temp.caderno().args(&["docker", "typst", "--springer", "--html"]).passes();
    assert_eq!(
        temp.calls()[0].args,
        "compose run --rm myst-build myst build books/guia-myst/exemplo-springer.md --typst --html"
    );
}

#[test]
fn run_forwards_arbitrary_arguments() {
    let temp = Project::empty();
    temp.tool("docker", 4);

    temp.caderno()
        .args(&["docker", "run", "myst", "build", "--pdf"])
        .passes()
        .stdout_has("exit code 4");
    assert_eq!(temp.calls()[0].args, "compose run --rm myst-build myst build --pdf");
}

#[test]
fn run_without_arguments_only_warns() {
    let temp = Project::empty();
    temp.tool("docker", 0);

    temp.caderno().args(&["docker", "run"]).passes().stdout_has("No command given");
    assert!(temp.calls().is_empty());
}
