use assert_cmd::Command;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn exprtree_help_works() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("exprtree"));
    cmd.arg("--help").assert().success();
}

#[test]
fn exprtree_tree_help_works() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("exprtree"));
    cmd.arg("tree").arg("--help").assert().success();
}

#[test]
fn exprtree_tree_prints_expected_layout() {
    let expected = "OPERATOR: +
    OPERATOR: +
        NUMBER: 1
        OPERATOR: *
            NUMBER: 2
            NUMBER: 3
    NUMBER: 4
";

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("exprtree"));
    cmd.arg("tree")
        .arg("1+2*3+4")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn exprtree_tree_fails_on_syntax_error() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("exprtree"));
    cmd.arg("tree")
        .arg("1+")
        .assert()
        .failure()
        .stderr(contains("expected a number or `(`"));
}

#[test]
fn exprtree_tree_fails_on_invalid_character() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("exprtree"));
    cmd.arg("tree")
        .arg("1#2")
        .assert()
        .failure()
        .stderr(contains("invalid character `#` at offset 1"));
}

#[test]
fn exprtree_tree_reads_expression_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "(1+2)*3\n").unwrap();
    let path = file.path().to_path_buf();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("exprtree"));
    cmd.arg("tree")
        .arg("--file")
        .arg(path)
        .assert()
        .success()
        .stdout(contains("OPERATOR: *"))
        .stdout(contains("        NUMBER: 2"));
}

#[test]
fn exprtree_tokens_lists_the_stream() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("exprtree"));
    cmd.arg("tokens")
        .arg("8-31")
        .assert()
        .success()
        .stdout(contains("0: number 8"))
        .stdout(contains("1: `-`"))
        .stdout(contains("2: number 31"));
}

#[test]
fn exprtree_tokens_fails_on_invalid_character() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("exprtree"));
    cmd.arg("tokens")
        .arg("1@2")
        .assert()
        .failure()
        .stderr(contains("invalid character `@`"));
}
