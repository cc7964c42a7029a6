use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_library() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/Quiver.qvlibrary")
}

#[test]
fn test_to_json_dumps_the_whole_library() {
    let mut cmd = Command::cargo_bin("quiver-to-json").unwrap();
    cmd.arg(fixture_library())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"Quiver Test""#))
        .stdout(predicate::str::contains(r#""uuid":"FIXTURE""#))
        .stdout(predicate::str::contains(r#""title":"Tags""#))
        // without --resources no data URIs are embedded
        .stdout(predicate::str::contains("data:image").not());
}

#[test]
fn test_to_json_embeds_resources_as_data_uris() {
    let mut cmd = Command::cargo_bin("quiver-to-json").unwrap();
    cmd.arg("--resources")
        .arg(fixture_library())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""Name":"F6E1CA4A-FA0B-4E45-9861-3E3FEB0DAF99.png""#,
        ))
        .stdout(predicate::str::contains(r#""Data":"data:image/png,"#));
}

#[test]
fn test_to_json_fails_cleanly_on_a_bad_path() {
    let mut cmd = Command::cargo_bin("quiver-to-json").unwrap();
    cmd.arg("/definitely/not/here.qvlibrary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_to_markdown_writes_one_file_per_note() {
    let out = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("quiver-to-markdown").unwrap();
    cmd.arg(fixture_library())
        .arg(out.path())
        .assert()
        .success();

    let nb_dir = out.path().join("Quiver Test");
    assert!(nb_dir.join("Tags.md").is_file());
    assert!(nb_dir.join("Text cells.md").is_file());
    assert!(nb_dir.join("Images, Files and Links.md").is_file());
}

#[test]
fn test_to_markdown_rewrites_markers_and_copies_resources() {
    let out = tempfile::tempdir().unwrap();

    Command::cargo_bin("quiver-to-markdown")
        .unwrap()
        .arg(fixture_library())
        .arg(out.path())
        .assert()
        .success();

    let nb_dir = out.path().join("Quiver Test");
    let body = std::fs::read_to_string(nb_dir.join("Images, Files and Links.md")).unwrap();
    assert!(body.contains("![IMG](resources/F6E1CA4A-FA0B-4E45-9861-3E3FEB0DAF99.png)"));
    assert!(body.contains("[Tags](Tags.md)"));
    assert!(!body.contains("quiver-image-url"));
    assert!(!body.contains("quiver-note-url"));

    // attachments are copied byte-identical next to the notes
    let copied = nb_dir
        .join("resources")
        .join("F6E1CA4A-FA0B-4E45-9861-3E3FEB0DAF99.png");
    let original = fixture_library()
        .join("Quiver Test.qvnotebook")
        .join("B59AC519-2A2C-4EC8-B701-E69F54F40A85.qvnote")
        .join("resources")
        .join("F6E1CA4A-FA0B-4E45-9861-3E3FEB0DAF99.png");
    assert_eq!(
        std::fs::read(copied).unwrap(),
        std::fs::read(original).unwrap()
    );
}

#[test]
fn test_to_markdown_fences_code_with_aliased_language() {
    let out = tempfile::tempdir().unwrap();

    Command::cargo_bin("quiver-to-markdown")
        .unwrap()
        .arg(fixture_library())
        .arg(out.path())
        .assert()
        .success();

    let body = std::fs::read_to_string(out.path().join("Quiver Test").join("Text cells.md"))
        .unwrap();
    assert!(body.contains("```go\npackage main"));
    assert!(body.contains("```latex\ne = mc^2\n```"));
}
