use crate::common::command::{replaced_line_dir, run_linediff_command, workspace_dir};
use crate::common::file::{write_generated_file, write_lines};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_changed_line_in_normal_format(
    replaced_line_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_linediff_command(replaced_line_dir.path(), &["a.txt", "b.txt"])
        .assert()
        .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    pretty_assertions::assert_eq!(stdout, "2c2\n< b\n---\n> x\n");

    Ok(())
}

#[rstest]
fn show_appended_line_in_normal_format(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_lines(workspace_dir.path(), "a.txt", &["a", "b"]);
    write_lines(workspace_dir.path(), "b.txt", &["a", "b", "c"]);

    run_linediff_command(workspace_dir.path(), &["a.txt", "b.txt"])
        .assert()
        .code(1)
        .stdout("2a3\n> c\n");

    Ok(())
}

#[rstest]
fn show_insertions_and_deletions_at_file_boundaries(workspace_dir: TempDir) {
    write_lines(workspace_dir.path(), "a.txt", &["head", "middle", "tail"]);
    write_lines(workspace_dir.path(), "b.txt", &["middle", "tail", "new tail"]);

    run_linediff_command(workspace_dir.path(), &["a.txt", "b.txt"])
        .assert()
        .code(1)
        .stdout("1d0\n< head\n3a3\n> new tail\n");
}

#[rstest]
fn show_whole_file_when_original_is_empty(workspace_dir: TempDir) {
    write_lines(workspace_dir.path(), "a.txt", &[]);
    write_lines(workspace_dir.path(), "b.txt", &["one", "two"]);

    run_linediff_command(workspace_dir.path(), &["a.txt", "b.txt"])
        .assert()
        .code(1)
        .stdout("0a1,2\n> one\n> two\n");
}

#[rstest]
fn print_nothing_for_identical_files(workspace_dir: TempDir) {
    let file = write_generated_file(workspace_dir.path(), 20);
    let name = file.path.file_name().unwrap().to_string_lossy().to_string();

    run_linediff_command(workspace_dir.path(), &[&name, &name])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn read_original_from_standard_input(replaced_line_dir: TempDir) {
    run_linediff_command(replaced_line_dir.path(), &["-", "b.txt"])
        .write_stdin("a\nb\nc\n")
        .assert()
        .code(1)
        .stdout("2c2\n< b\n---\n> x\n");
}

#[rstest]
fn standard_input_on_both_sides_is_identical(workspace_dir: TempDir) {
    run_linediff_command(workspace_dir.path(), &["-", "-"])
        .write_stdin("a\nb\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn strip_carriage_returns_before_comparing(workspace_dir: TempDir) {
    std::fs::write(workspace_dir.path().join("dos.txt"), "a\r\nb\r\n").unwrap();
    write_lines(workspace_dir.path(), "unix.txt", &["a", "b"]);

    run_linediff_command(workspace_dir.path(), &["dos.txt", "unix.txt"])
        .assert()
        .code(1);

    run_linediff_command(
        workspace_dir.path(),
        &["--strip-trailing-cr", "dos.txt", "unix.txt"],
    )
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
}

#[rstest]
fn report_missing_file_as_trouble(replaced_line_dir: TempDir) {
    run_linediff_command(replaced_line_dir.path(), &["a.txt", "missing.txt"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.txt"));
}

#[rstest]
fn refuse_inputs_above_the_line_limit(replaced_line_dir: TempDir) {
    run_linediff_command(
        replaced_line_dir.path(),
        &["--max-lines", "5", "a.txt", "b.txt"],
    )
    .assert()
    .code(2)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("exceeds the limit of 5"));
}
