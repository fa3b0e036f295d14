//! End-to-end checks of the `pathicons` binary.

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

fn rules_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp rules file");
    write!(
        file,
        r#"{{
            "files": [
                {{"name": "Kotlin", "pattern": ".*\\.kt", "priority": 10, "icon": "kotlin.svg"}},
                {{"name": "Default", "pattern": ".*", "priority": 100, "icon": "file.svg"}}
            ],
            "folders": [
                {{"name": "Sources", "pattern": "src", "priority": 10, "icon": "folder-src.svg"}}
            ]
        }}"#
    )
    .expect("write rules");
    file
}

#[test]
fn resolves_file_paths_through_the_index() {
    let rules = rules_file();
    Command::cargo_bin("pathicons")
        .unwrap()
        .args(["--rules", rules.path().to_str().unwrap()])
        .args(["src/Main.kt", "README"])
        .assert()
        .success()
        .stdout(predicates::str::contains("src/Main.kt -> Kotlin [kotlin.svg]"))
        .stdout(predicates::str::contains("README -> Default [file.svg]"));
}

#[test]
fn resolves_folder_paths_live() {
    let rules = rules_file();
    Command::cargo_bin("pathicons")
        .unwrap()
        .args(["--rules", rules.path().to_str().unwrap(), "--folders"])
        .args(["src", "docs"])
        .assert()
        .success()
        .stdout(predicates::str::contains("src -> Sources [folder-src.svg]"))
        .stdout(predicates::str::contains("docs -> none"));
}

#[test]
fn disabled_file_icons_resolve_to_none() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "files": [{{"name": "Any", "pattern": ".*"}}],
            "folders": [],
            "files_enabled": false
        }}"#
    )
    .unwrap();

    Command::cargo_bin("pathicons")
        .unwrap()
        .args(["--rules", file.path().to_str().unwrap(), "Main.kt"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Main.kt -> none"));
}

#[test]
fn seed_prints_a_ready_to_edit_rule() {
    Command::cargo_bin("pathicons")
        .unwrap()
        .args(["--seed", "build.gradle"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\"name\": \"Build GRADLE\""))
        .stdout(predicates::str::contains("\"pattern\": \"build.gradle\""));
}

#[test]
fn missing_rules_file_fails_cleanly() {
    Command::cargo_bin("pathicons")
        .unwrap()
        .args(["--rules", "/nonexistent/rules.json", "Main.kt"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("cannot read rules file"));
}
