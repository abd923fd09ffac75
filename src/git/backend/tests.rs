// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitQuery, GitStaging, GixBackend, ShellBackend};
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create parent");
    }
    std::fs::write(path, content).expect("failed to write file");
}

#[test]
fn test_gix_backend_is_git_repo() {
    let temp = temp_dir();
    assert!(!GixBackend::is_git_repo(temp.path()));

    gix::init(temp.path()).expect("failed to init repo");
    assert!(GixBackend::is_git_repo(temp.path()));
}

#[test]
fn test_gix_workdir_matches_git_toplevel() {
    let temp = temp_dir();
    ShellBackend::git_command(&["init", "--quiet"], temp.path()).expect("failed to init repo");

    let gix_root = GixBackend::workdir(temp.path()).unwrap().canonicalize().unwrap();
    let toplevel =
        ShellBackend::git_command(&["rev-parse", "--show-toplevel"], temp.path()).unwrap();
    assert_eq!(gix_root, Path::new(&toplevel).canonicalize().unwrap());
}

#[test]
fn test_shell_hooks_dir_default() {
    let temp = temp_dir();
    ShellBackend::git_command(&["init", "--quiet"], temp.path()).expect("failed to init repo");

    let hooks = ShellBackend::hooks_dir(temp.path()).unwrap();
    assert!(hooks.ends_with(".git/hooks"));
}

#[test]
fn test_shell_hooks_dir_honours_hooks_path() {
    let temp = temp_dir();
    let root = temp.path();
    ShellBackend::git_command(&["init", "--quiet"], root).expect("failed to init repo");
    ShellBackend::git_command(&["config", "core.hooksPath", ".husky"], root).unwrap();

    assert_eq!(ShellBackend::hooks_dir(root).unwrap(), root.join(".husky"));
}

#[test]
fn test_workdir_from_subdirectory() {
    let temp = temp_dir();
    gix::init(temp.path()).expect("failed to init repo");
    std::fs::create_dir_all(temp.path().join("services/user")).unwrap();

    let root = GixBackend::workdir(&temp.path().join("services/user")).unwrap();
    assert_eq!(
        root.canonicalize().unwrap(),
        temp.path().canonicalize().unwrap()
    );
}

#[test]
fn test_workdir_outside_repository() {
    let temp = temp_dir();
    assert!(GixBackend::workdir(temp.path()).is_err());
    assert!(GixBackend::git_dir(temp.path()).is_err());
}

#[test]
fn test_staged_files_and_add_paths() {
    let temp = temp_dir();
    let root = temp.path();
    ShellBackend::git_command(&["init", "--quiet"], root).expect("failed to init repo");

    write(root, "services/user/main.go", "package main\n");
    write(root, "shared/log/log.go", "package log\n");
    write(root, "README.md", "readme\n");
    assert!(ShellBackend::staged_files(root).unwrap().is_empty());

    ShellBackend::add_paths(
        root,
        &["services/user/main.go".to_string(), "README.md".to_string()],
    )
    .unwrap();

    let staged = ShellBackend::staged_files(root).unwrap();
    assert_eq!(staged, ["README.md", "services/user/main.go"]);
}

#[test]
fn test_add_paths_empty_is_noop() {
    let temp = temp_dir();
    // Not even a repository: nothing is run.
    assert!(ShellBackend::add_paths(temp.path(), &[]).is_ok());
}
