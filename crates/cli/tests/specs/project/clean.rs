//! `caderno clean` specs.

use crate::prelude::*;

#[test]
fn clean_removes_build_outputs_only() {
    let temp = Project::with_books();
    temp.file("books/_build/html/index.html", "<html></html>");
    temp.file("books/.myst/cache.json", "{}");
    temp.file("books/index.md", "# Caderno\n");

    temp.caderno().args(&["clean"]).passes().stdout_has("✓ Removed:");

    assert!(!temp.path("books/_build").exists());
    assert!(!temp.path("books/.myst").exists());
    assert!(temp.path("books/index.md").exists());
}

#[test]
fn clean_with_nothing_to_remove_passes() {
    let temp = Project::with_books();
    temp.caderno().args(&["clean"]).passes().stdout_lacks("Removed");
}
