use crate::common::command::{run_linediff_command, workspace_dir};
use crate::common::file::{write_generated_file, write_lines};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn print_file_after_filtering(workspace_dir: TempDir) {
    write_lines(workspace_dir.path(), "notes.txt", &["keep", "  ; dropped", "", "last"]);

    run_linediff_command(
        workspace_dir.path(),
        &["--print", "--marker", "';'", "--skip-empty", "notes.txt"],
    )
    .assert()
    .success()
    .stdout("keep\nlast\n");
}

#[rstest]
fn print_generated_file_unchanged(workspace_dir: TempDir) {
    let file = write_generated_file(workspace_dir.path(), 10);
    let name = file.path.file_name().unwrap().to_string_lossy().to_string();

    run_linediff_command(workspace_dir.path(), &["--print", &name])
        .assert()
        .success()
        .stdout(file.content);
}
