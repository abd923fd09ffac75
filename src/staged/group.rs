// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory grouping of staged paths.
//!
//! ```text
//! services/user/a.go ─┐
//! services/user/b.go ─┼─> services/user ─> fmt, fix
//! shared/db/c.go ─────┴─> shared/db     ─> fmt, fix
//! ```
//!
//! Pure functions only. Paths are expected to be repository relative with
//! `/` separators; filtering by rule happens before grouping.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Placeholder substituted with the directory in command templates.
pub const DIR_PLACEHOLDER: &str = "{dir}";

/// Directory portion of a staged path.
///
/// Everything before the last `/`. A path without a separator lives in the
/// repository root, keyed as `.`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DirectoryKey(String);

impl DirectoryKey {
    /// Root of the repository.
    pub const ROOT: &'static str = ".";

    /// Derive the directory key of a path.
    ///
    /// This is not a textual strip of the trailing `/<name>.go`. That would
    /// leave a root file such as `x.go` unchanged and turn `/x.go` into an
    /// empty argument. Here they key as `.` and `/`, so every command gets a
    /// directory.
    ///
    /// ```
    /// use stagelint::staged::group::DirectoryKey;
    ///
    /// assert_eq!(DirectoryKey::of("services/user/a.go").as_str(), "services/user");
    /// assert_eq!(DirectoryKey::of("x.go").as_str(), ".");
    /// assert_eq!(DirectoryKey::of("/x.go").as_str(), "/");
    /// ```
    #[must_use]
    pub fn of(path: &str) -> Self {
        match path.rsplit_once('/') {
            Some(("", _)) => Self("/".to_string()),
            Some((dir, _)) => Self(dir.to_string()),
            None => Self(Self::ROOT.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique directories of `files`, in order of first appearance.
pub fn group_directories<I, S>(files: I) -> Vec<DirectoryKey>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = BTreeSet::new();
    files
        .into_iter()
        .map(|file| DirectoryKey::of(file.as_ref()))
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

/// Render one command template for a directory.
#[must_use]
pub fn render_command(template: &str, dir: &DirectoryKey) -> String {
    template.replace(DIR_PLACEHOLDER, dir.as_str())
}

/// Expand every template for every unique directory of `files`.
///
/// The output holds `templates.len()` commands per directory, kept adjacent
/// and in template order. With the default format/fix pair that is exactly
/// two commands per directory.
pub fn directory_commands<I, S, T>(files: I, templates: &[T]) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    expand_directories(&group_directories(files), templates)
}

/// Expand every template for each directory in `directories`.
pub fn expand_directories<T: AsRef<str>>(
    directories: &[DirectoryKey],
    templates: &[T],
) -> Vec<String> {
    directories
        .iter()
        .flat_map(|dir| {
            templates
                .iter()
                .map(move |template| render_command(template.as_ref(), dir))
        })
        .collect()
}
