use crate::common::command::{replaced_line_dir, run_linediff_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case(&[])]
#[case(&["a.txt"])]
#[case(&["a.txt", "b.txt", "c.txt"])]
#[case(&["--print", "a.txt", "b.txt"])]
fn wrong_number_of_files_prints_usage(replaced_line_dir: TempDir, #[case] args: &[&str]) {
    run_linediff_command(replaced_line_dir.path(), args)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[rstest]
fn print_conflicts_with_unified(replaced_line_dir: TempDir) {
    run_linediff_command(replaced_line_dir.path(), &["--print", "-u", "a.txt"])
        .assert()
        .code(2);
}

#[rstest]
fn help_exits_successfully_without_diffing(workspace_dir: TempDir) {
    run_linediff_command(workspace_dir.path(), &["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"))
        .stdout(predicate::str::contains("--marker"));
}

#[rstest]
fn unknown_color_mode_is_rejected(replaced_line_dir: TempDir) {
    run_linediff_command(
        replaced_line_dir.path(),
        &["--color", "sometimes", "a.txt", "b.txt"],
    )
    .assert()
    .code(2)
    .stderr(predicate::str::contains("sometimes"));
}
