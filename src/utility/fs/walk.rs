// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use bon::Builder;
use flume::bounded;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

/// Options for parallel directory traversal.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Respect .gitignore files
    #[builder(setters(name = with_respect_gitignore), default = true)]
    respect_gitignore: bool,
    /// Number of threads (None = auto-detect based on CPU count)
    #[builder(setters(name = with_threads))]
    threads: Option<usize>,
    /// Skip directories matching these names (exact match)
    #[builder(setters(name = with_skip_dirs), default)]
    skip_dirs: Vec<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn respect_gitignore(&self) -> bool {
        self.respect_gitignore
    }

    #[must_use]
    pub const fn threads(&self) -> Option<usize> {
        self.threads
    }

    #[must_use]
    pub fn skip_dirs(&self) -> &[String] {
        &self.skip_dirs
    }

    /// Options for a full work tree run.
    ///
    /// Honours `.gitignore` even outside a repository and never descends
    /// into `.git`. Hidden files are included so dotfile rules can match.
    #[must_use]
    pub fn for_work_tree() -> Self {
        Self::builder()
            .with_include_hidden(true)
            .with_skip_dirs(vec![".git".to_string()])
            .build()
    }
}

/// Result of a parallel walk operation.
#[derive(Debug)]
pub struct WalkResult {
    files: Vec<PathBuf>,
    error_count: usize,
}

impl WalkResult {
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns the number of entries that could not be read.
    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }
}

fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    if let Some(depth) = options.max_depth() {
        builder.max_depth(Some(depth));
    }

    builder.hidden(!options.include_hidden());

    builder.git_ignore(options.respect_gitignore());
    builder.git_global(options.respect_gitignore());
    builder.git_exclude(options.respect_gitignore());
    // Without this, .gitignore only applies inside a detected repository.
    builder.require_git(false);

    if let Some(threads) = options.threads() {
        builder.threads(threads);
    }

    // Evaluated before descending.
    if !options.skip_dirs().is_empty() {
        let skip_dirs: Arc<Vec<String>> = Arc::new(options.skip_dirs().to_vec());
        builder.filter_entry(move |entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir())
                && let Some(name) = entry.file_name().to_str()
                && skip_dirs.iter().any(|skip| skip == name)
            {
                return false;
            }
            true
        });
    }

    builder
}

/// Performs parallel directory traversal using `ignore::WalkParallel`.
///
/// Files are collected through a bounded flume channel; their order is
/// whatever the worker threads produced.
///
/// # Errors
///
/// Returns an error if the root directory does not exist.
pub fn parallel_walk<P: AsRef<Path>>(root: P, options: &WalkOptions) -> Result<WalkResult> {
    let root = root.as_ref();

    if !root.is_dir() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let (file_tx, file_rx) = bounded::<PathBuf>(1000);
    let error_count = Arc::new(AtomicUsize::new(0));

    let parallel = build_walker(root, options).build_parallel();

    // `run` blocks until every worker is done, so the receiver is drained
    // on a separate thread to keep the bounded channel from filling up.
    let collector = std::thread::spawn(move || file_rx.iter().collect::<Vec<_>>());

    parallel.run(|| {
        let file_tx = file_tx.clone();
        let error_count = Arc::clone(&error_count);

        Box::new(move |entry_result| {
            match entry_result {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file()) {
                        let _ = file_tx.send(entry.into_path());
                    }
                }
                Err(e) => {
                    warn!(error = %e, "walk error");
                    error_count.fetch_add(1, Ordering::Relaxed);
                }
            }
            ignore::WalkState::Continue
        })
    });

    drop(file_tx);

    let files = collector
        .join()
        .map_err(|_| anyhow::anyhow!("walk collector thread panicked"))?;
    let error_count = error_count.load(Ordering::Relaxed);

    Ok(WalkResult { files, error_count })
}

/// Every non-ignored file under `root`, relative to it.
///
/// Paths use `/` separators and are sorted so a full-tree run plans the
/// same way each time.
///
/// # Errors
///
/// Returns an error if `root` is not a directory.
pub fn work_tree_files<P: AsRef<Path>>(root: P) -> Result<Vec<String>> {
    let root = root.as_ref();
    let result = parallel_walk(root, &WalkOptions::for_work_tree())?;

    let mut files: Vec<String> = result
        .files()
        .iter()
        .filter_map(|path| path.strip_prefix(root).ok())
        .map(|rel| {
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort_unstable();

    debug!(
        count = files.len(),
        errors = result.error_count(),
        "walked work tree"
    );
    Ok(files)
}
