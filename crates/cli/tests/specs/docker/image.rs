//! `caderno docker build` specs.

use crate::prelude::*;

#[test]
fn image_build_tags_default_image() {
    let temp = Project::empty();
    temp.tool("docker", 0);

    temp.caderno().args(&["docker", "build"]).passes();
    assert_eq!(temp.calls()[0].args, "build -t caderno-myst:latest .");
}

#[test]
fn image_build_has_no_compose_fallback() {
    let temp = Project::empty();
    temp.tool("docker-compose", 0);

    temp.caderno()
        .args(&["docker", "build"])
        .fails_with(1)
        .stdout_has("command not found: docker");
    assert!(temp.calls().is_empty());
}
