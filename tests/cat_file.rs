use crate::common::command::{
    SampleRepository, repository_dir, run_bit_internals_command, sample_repository, stdout_of,
};
use crate::common::repository::GitDirBuilder;
use crate::common::{AUTHOR_TIMESTAMP, COMMITTER_TIMESTAMP};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn print_blob_content(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let git = GitDirBuilder::new(&repository_dir);
    let content = Words(5..10).fake::<Vec<String>>().join(" ");
    let blob = git.blob(&content);

    let stdout = stdout_of(&mut run_bit_internals_command(
        git.path(),
        &["cat-file", &blob],
    ))?;

    pretty_assertions::assert_eq!(stdout, format!("*BLOB*\n{content}\n"));

    Ok(())
}

#[rstest]
fn print_blob_with_null_bytes_as_lines(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let git = GitDirBuilder::new(&repository_dir);
    let blob = git.object("blob", b"first\0second");

    let stdout = stdout_of(&mut run_bit_internals_command(
        git.path(),
        &["cat-file", &blob],
    ))?;

    pretty_assertions::assert_eq!(stdout, "*BLOB*\nfirst\nsecond\n");

    Ok(())
}

#[rstest]
fn print_tree_entries_in_stored_order(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;

    let stdout = stdout_of(&mut run_bit_internals_command(
        repo.dir.path(),
        &["cat-file", &repo.docs_tree],
    ))?;

    let lines = stdout.lines().collect::<Vec<_>>();
    pretty_assertions::assert_eq!(lines[0], "*TREE*");
    assert!(lines[1].starts_with("40000 ") && lines[1].ends_with(" guide"));
    pretty_assertions::assert_eq!(
        lines[2],
        format!("100644 {} notes v2.md", repo.readme_blob)
    );
    pretty_assertions::assert_eq!(lines.len(), 3);

    Ok(())
}

#[rstest]
fn print_root_commit_without_parents(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;

    let stdout = stdout_of(&mut run_bit_internals_command(
        repo.dir.path(),
        &["cat-file", &repo.initial_commit],
    ))?;

    assert!(!stdout.contains("parents:"));
    assert!(stdout.starts_with("*COMMIT*\ntree: "));
    assert!(stdout.ends_with("commit message:\nInitial commit\n"));

    Ok(())
}

#[rstest]
fn print_merge_commit_with_all_fields(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;

    let stdout = stdout_of(&mut run_bit_internals_command(
        repo.dir.path(),
        &["cat-file", &repo.merge_commit],
    ))?;

    let expected = format!(
        "*COMMIT*\n\
         tree: {}\n\
         parents: {} | {}\n\
         author: Kate kate@example.com original timestamp: {AUTHOR_TIMESTAMP}\n\
         committer: Kate kate@example.com commit timestamp: {COMMITTER_TIMESTAMP}\n\
         commit message:\n\
         Merge feature/side\n",
        repo.root_tree, repo.second_commit, repo.side_tip_commit
    );
    pretty_assertions::assert_eq!(stdout, expected);

    Ok(())
}

#[rstest]
fn print_simple_commit_with_single_parent(
    sample_repository: SampleRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let repo = sample_repository;

    run_bit_internals_command(repo.dir.path(), &["cat-file", &repo.second_commit])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "parents: {}\n",
            repo.initial_commit
        )));

    Ok(())
}

#[rstest]
fn misspelled_object_type_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let git = GitDirBuilder::new(&repository_dir);
    let hash = git.raw_object(b"blb 12\0hello world!");

    run_bit_internals_command(git.path(), &["cat-file", &hash])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unrecognized object type"));

    Ok(())
}

#[rstest]
fn missing_object_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let git = GitDirBuilder::new(&repository_dir);

    run_bit_internals_command(git.path(), &["cat-file", &"0".repeat(40)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    Ok(())
}

#[rstest]
fn invalid_hash_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let git = GitDirBuilder::new(&repository_dir);

    run_bit_internals_command(git.path(), &["cat-file", "not-a-hash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid object id"));

    Ok(())
}
