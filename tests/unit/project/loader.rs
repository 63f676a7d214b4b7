use super::*;
use crate::render::page::PageRenderer;

const YML: &str = r#"
min: 1em
max: 2em
sections:
  - flows:
      - { id: pic, html: hi, seconds: 1, focus: "0,0,10,10 0 1" }
"#;

fn project_dir(yml_name: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(yml_name), YML).unwrap();
    std::fs::write(dir.path().join("pic.svg"), "<svg></svg>").unwrap();
    dir
}

#[test]
fn opens_folder_and_derives_output_path() {
    let dir = project_dir("talk.YML");
    let project = Project::open(dir.path()).unwrap();
    assert_eq!(project.stem(), "talk");
    assert_eq!(
        project.default_output_path(&CompileOptions::default()),
        dir.path().join("talk.html")
    );
    assert_eq!(project.document().sections.len(), 1);
}

#[test]
fn requires_exactly_one_yml() {
    let dir = tempfile::tempdir().unwrap();
    let err = Project::open(dir.path()).unwrap_err();
    assert!(err.to_string().contains("found 0"));

    std::fs::write(dir.path().join("a.yml"), YML).unwrap();
    std::fs::write(dir.path().join("b.yml"), YML).unwrap();
    let err = Project::open(dir.path()).unwrap_err();
    assert!(err.to_string().contains("found 2"));
}

#[test]
fn reports_schema_problems() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("s.yml"), YML.replace("id: pic", "id: 'p i c'")).unwrap();
    let err = Project::open(dir.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to validate"), "{msg}");
    assert!(msg.contains("$.sections[0].flows[0].id"), "{msg}");
}

#[test]
fn build_writes_once_and_only_on_success() {
    let dir = project_dir("talk.yml");
    let project = Project::open(dir.path()).unwrap();
    let out = project.default_output_path(&CompileOptions::default());
    project
        .build(&out, &CompileOptions::default(), &PageRenderer::default())
        .unwrap();
    assert!(std::fs::read_to_string(&out).unwrap().contains("pic__1"));

    std::fs::remove_file(&out).unwrap();
    std::fs::remove_file(dir.path().join("pic.svg")).unwrap();
    let err = project
        .build(&out, &CompileOptions::default(), &PageRenderer::default())
        .unwrap_err();
    assert!(matches!(err, FlowdeckError::MissingAssets(_)));
    assert!(!out.exists());
}

#[test]
fn missing_folder_is_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Project::open(&dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, FlowdeckError::Validation(_)));
}
