use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn combine_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("combine-src"));
    cmd.current_dir(dir)
        .env_remove("COMBINE_SRC_ROOT")
        .env_remove("COMBINE_SRC_OUTPUT")
        .arg("--no-color");
    cmd
}

#[test]
fn defaults_combine_src_into_combined_src_txt() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), b"hello");

    combine_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: a.txt"))
        .stdout(predicate::str::contains(
            "Done! Check combined_src.txt for the output.",
        ));

    let output = fs::read_to_string(temp.path().join("combined_src.txt")).unwrap();
    assert_eq!(
        output,
        "\n==================================================\nFile: a.txt\n==================================================\n\nhello\n"
    );
}

#[test]
fn missing_root_reports_and_writes_nothing() {
    let temp = tempdir().unwrap();

    combine_cmd(temp.path())
        .assert()
        .failure()
        .stderr("Error: root directory not found: src\n");

    assert!(!temp.path().join("combined_src.txt").exists());
}

#[test]
fn output_errors_show_their_cause() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();

    combine_cmd(temp.path())
        .arg("--output")
        .arg("missing-dir/out.txt")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with(
            "Error: cannot create output file missing-dir/out.txt: ",
        ));
}

#[test]
fn verbose_prints_resolved_paths_and_exclusions() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), b"a");

    combine_cmd(temp.path())
        .arg("--verbose")
        .arg("--root")
        .arg(".")
        .assert()
        .success()
        .stderr(predicate::str::contains("Root: "))
        .stderr(predicate::str::contains("Output: combined_src.txt"))
        .stderr(predicate::str::contains(
            "Excluded output file: combined_src.txt",
        ));
}

#[test]
fn diagnostics_are_hidden_without_verbose() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), b"a");

    combine_cmd(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Root: ").not());
}

#[test]
fn empty_root_creates_empty_output() {
    let temp = tempdir().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();

    combine_cmd(temp.path()).assert().success();

    let output = fs::read(temp.path().join("combined_src.txt")).unwrap();
    assert!(output.is_empty());
}

#[test]
fn non_utf8_file_is_skipped_and_reported() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), b"alpha");
    write_file(&temp.path().join("src/logo.png"), b"\x89PNG\r\n\x1a\n\xFF");
    write_file(&temp.path().join("src/z.txt"), b"omega");

    combine_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: a.txt"))
        .stdout(predicate::str::contains("Added: z.txt"))
        .stdout(predicate::str::contains("logo.png").not())
        .stderr(predicate::str::contains("Skipped logo.png: invalid UTF-8"));

    let output = fs::read_to_string(temp.path().join("combined_src.txt")).unwrap();
    assert!(output.contains("File: a.txt\n"));
    assert!(output.contains("File: z.txt\n"));
    assert!(!output.contains("logo.png"));
}

#[test]
fn rerun_overwrites_instead_of_appending() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/main.rs"), b"fn main() {}\n");
    write_file(&temp.path().join("src/nested/mod.rs"), b"// nested\n");

    combine_cmd(temp.path()).assert().success();
    let first = fs::read(temp.path().join("combined_src.txt")).unwrap();

    combine_cmd(temp.path()).assert().success();
    let second = fs::read(temp.path().join("combined_src.txt")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn custom_root_and_output() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("lib/x.rs"), b"x");

    combine_cmd(temp.path())
        .arg("--root")
        .arg("lib")
        .arg("-o")
        .arg("dump.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done! Check dump.txt for the output."));

    let output = fs::read_to_string(temp.path().join("dump.txt")).unwrap();
    assert!(output.contains("File: x.rs\n"));
    assert!(!temp.path().join("combined_src.txt").exists());
}

#[test]
fn env_overrides_defaults() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("code/y.rs"), b"y");

    combine_cmd(temp.path())
        .env("COMBINE_SRC_ROOT", "code")
        .env("COMBINE_SRC_OUTPUT", "from_env.txt")
        .assert()
        .success();

    let output = fs::read_to_string(temp.path().join("from_env.txt")).unwrap();
    assert!(output.contains("File: y.rs\n"));
}

#[test]
fn output_inside_root_is_not_combined_into_itself() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), b"a");

    for _ in 0..2 {
        combine_cmd(temp.path())
            .arg("--root")
            .arg(".")
            .assert()
            .success()
            .stdout(predicate::str::contains("Added: combined_src.txt").not());
    }

    let output = fs::read_to_string(temp.path().join("combined_src.txt")).unwrap();
    assert_eq!(output.matches("File: ").count(), 1);
}

#[test]
fn quiet_suppresses_added_lines_only() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), b"a");
    write_file(&temp.path().join("src/b.bin"), b"\xFF");

    combine_cmd(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added:").not())
        .stdout(predicate::str::contains("Done!"))
        .stderr(predicate::str::contains("Skipped b.bin"));
}

#[test]
fn stats_go_to_stderr() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/a.txt"), b"abc");
    write_file(&temp.path().join("src/b.txt"), b"de");

    combine_cmd(temp.path())
        .arg("--stats")
        .assert()
        .success()
        .stderr(predicate::str::contains("Files added: 2"))
        .stderr(predicate::str::contains("Files skipped: 0"))
        .stderr(predicate::str::contains("Content bytes: 5"));
}

#[test]
fn json_summary_lists_skipped_files() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/ok.txt"), b"ok");
    write_file(&temp.path().join("src/bad.bin"), b"\xC3\x28");

    let assert = combine_cmd(temp.path())
        .arg("--quiet")
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let summary: serde_json::Value =
        serde_json::from_str(stdout.lines().last().unwrap()).unwrap();

    assert_eq!(summary["output"], "combined_src.txt");
    assert_eq!(summary["added"][0], "ok.txt");
    assert_eq!(summary["skipped"][0]["path"], "bad.bin");
    assert_eq!(summary["skipped"][0]["code"], "FILE_SKIPPED_ENCODING");
}

#[test]
fn root_that_is_a_file_is_rejected() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src"), b"not a dir");

    combine_cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("root is not a directory: src"));

    assert!(!temp.path().join("combined_src.txt").exists());
}
