use crate::common::repository::GitDirBuilder;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Hashes of everything stored by [`sample_repository`].
pub struct SampleRepository {
    pub dir: TempDir,
    pub readme_blob: String,
    pub root_tree: String,
    pub docs_tree: String,
    pub initial_commit: String,
    pub second_commit: String,
    pub side_commit: String,
    pub side_tip_commit: String,
    pub merge_commit: String,
}

/// ```text
/// initial <- second <------- merge   (main, HEAD)
///    ^                        /
///    +---- side <- side_tip -+       (feature/side)
/// ```
#[fixture]
pub fn sample_repository(repository_dir: TempDir) -> SampleRepository {
    let git = GitDirBuilder::new(&repository_dir);

    let readme_blob = git.blob("# Sample\n");
    let main_blob = git.blob("fn main() {}\n");
    let intro_blob = git.blob("intro\n");

    let guide_tree = git.tree(&[("100644", "intro.md", &intro_blob)]);
    let docs_tree = git.tree(&[
        ("40000", "guide", &guide_tree),
        ("100644", "notes v2.md", &readme_blob),
    ]);
    let root_tree = git.tree(&[
        ("100644", "README.md", &readme_blob),
        ("40000", "docs", &docs_tree),
        ("100755", "main.rs", &main_blob),
    ]);
    let first_tree = git.tree(&[("100644", "README.md", &readme_blob)]);

    let initial_commit = git.commit(&first_tree, &[], "Initial commit");
    let second_commit = git.commit(&root_tree, &[&initial_commit], "Add sources");
    let side_commit = git.commit(&first_tree, &[&initial_commit], "Start side work");
    let side_tip_commit = git.commit(&first_tree, &[&side_commit], "Finish side work");
    let merge_commit = git.commit(
        &root_tree,
        &[&second_commit, &side_tip_commit],
        "Merge feature/side",
    );

    git.branch("main", &merge_commit);
    git.branch("feature/side", &side_tip_commit);
    git.branch("develop", &initial_commit);
    git.head("main");

    SampleRepository {
        dir: repository_dir,
        readme_blob,
        root_tree,
        docs_tree,
        initial_commit,
        second_commit,
        side_commit,
        side_tip_commit,
        merge_commit,
    }
}

pub fn run_bit_internals_command(git_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bit-internals").expect("Failed to find bit-internals binary");
    cmd.env_remove("GIT_DIR");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--git-dir").arg(git_dir).arg("--color").arg("never");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success();
    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}
