use super::*;
use crate::{
    project::loader::Project,
    render::{page::PageRenderer, pipeline::CompileOptions},
};

#[test]
fn seeds_empty_folder_with_buildable_project() {
    let dir = tempfile::tempdir().unwrap();
    let written = seed_folder(dir.path()).unwrap();
    assert_eq!(written.len(), 2);
    assert!(dir.path().join("slideshow.yml").is_file());
    assert!(dir.path().join("welcome.svg").is_file());

    let project = Project::open(dir.path()).unwrap();
    assert_eq!(project.stem(), "slideshow");
    let html = project
        .render(&CompileOptions::default(), &PageRenderer::default())
        .unwrap();
    assert!(String::from_utf8(html).unwrap().contains("welcome__2"));
}

#[test]
fn refuses_non_empty_folder() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("keep.txt"), "x").unwrap();
    let err = seed_folder(dir.path()).unwrap_err();
    assert!(err.to_string().contains("should be empty"));
    assert!(!dir.path().join("slideshow.yml").exists());
}

#[test]
fn refuses_missing_folder() {
    let dir = tempfile::tempdir().unwrap();
    assert!(seed_folder(&dir.path().join("nope")).is_err());
}
