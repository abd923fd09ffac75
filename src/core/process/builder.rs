// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new/raw/exists/find
//!  • args/cwd/flag/timeout/name
//!  • capture_output
//!
//! ProcessFlags: ALLOW_FAILURE
//! StreamFlags: FORWARD_TO_LOG (default), KEEP_IN_STRING
//! ```

use bitflags::bitflags;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

bitflags! {
    /// Flags controlling process execution behavior.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// Don't fail if the process exits with an unexpected status
        const ALLOW_FAILURE = 0x01;
    }
}

bitflags! {
    /// Flags controlling stream handling for stdout/stderr.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u32 {
        /// Forward output to tracing logs
        const FORWARD_TO_LOG = 0x01;
        /// Keep output in a string for later retrieval
        const KEEP_IN_STRING = 0x02;
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self::FORWARD_TO_LOG
    }
}

/// Output from a completed process.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
    interrupted: bool,
    timed_out: bool,
}

impl ProcessOutput {
    pub(super) const fn new(
        exit_code: i32,
        stdout: String,
        stderr: String,
        interrupted: bool,
        timed_out: bool,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            interrupted,
            timed_out,
        }
    }

    /// Returns the process exit code (0 = success, -1 = killed by signal).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns captured stdout (if `KEEP_IN_STRING` was set).
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Returns captured stderr (if `KEEP_IN_STRING` was set).
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Returns whether the process was interrupted by cancellation.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Returns whether the process was killed after its timeout elapsed.
    #[must_use]
    pub const fn is_timed_out(&self) -> bool {
        self.timed_out
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0 && !self.interrupted && !self.timed_out
    }

    /// Captured stdout and stderr joined, for error reports.
    #[must_use]
    pub fn combined_output(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.stdout.clone(),
            (true, false) => self.stderr.clone(),
            (false, false) => format!("{}\n{}", self.stdout, self.stderr),
        }
    }
}

/// Builder for configuring and running a process.
#[derive(Debug)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    flags: ProcessFlags,
    stdout: StreamFlags,
    stderr: StreamFlags,
    /// Display name for logging
    name: Option<String>,
    timeout: Option<Duration>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// The program can be an absolute path, relative path, or just the executable name.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            flags: ProcessFlags::empty(),
            stdout: StreamFlags::default(),
            stderr: StreamFlags::default(),
            name: None,
            timeout: None,
        }
    }

    /// Checks if an executable exists in PATH.
    #[must_use]
    pub fn exists(program: &str) -> bool {
        Self::find(program).is_some()
    }

    /// Finds the full path to an executable in PATH.
    ///
    /// Results are cached for subsequent lookups.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        {
            let cache = exe_cache()
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(path) = cache.get(program) {
                return Some(path.clone());
            }
        }

        let path = which::which(program).ok()?;
        exe_cache()
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .insert(program.to_string(), path.clone());
        Some(path)
    }

    /// Creates a `ProcessBuilder` from a raw command string.
    ///
    /// On Windows, this executes the command via `PowerShell` (`pwsh -NoProfile -Command`).
    /// On Unix, this executes via `/bin/sh -c`.
    pub fn raw(command: impl Into<String>) -> Self {
        let cmd = command.into();
        #[cfg(windows)]
        {
            Self::new("pwsh").args(["-NoProfile", "-NonInteractive", "-Command", cmd.as_str()])
        }
        #[cfg(not(windows))]
        {
            Self::new("/bin/sh").args(["-c", cmd.as_str()])
        }
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
        self
    }

    /// Sets the working directory for the process.
    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Adds a process flag.
    #[must_use]
    pub fn flag(mut self, flag: ProcessFlags) -> Self {
        self.flags |= flag;
        self
    }

    /// Configures stdout handling.
    #[must_use]
    const fn stdout_flags(mut self, flags: StreamFlags) -> Self {
        self.stdout = flags;
        self
    }

    /// Configures stderr handling.
    #[must_use]
    const fn stderr_flags(mut self, flags: StreamFlags) -> Self {
        self.stderr = flags;
        self
    }

    /// Convenience: capture both stdout and stderr to strings, also logging each line.
    #[must_use]
    pub const fn capture_output(self) -> Self {
        self.stdout_flags(StreamFlags::KEEP_IN_STRING.union(StreamFlags::FORWARD_TO_LOG))
            .stderr_flags(StreamFlags::KEEP_IN_STRING.union(StreamFlags::FORWARD_TO_LOG))
    }

    /// Sets a display name for logging.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a timeout for the process.
    #[must_use]
    pub const fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Returns a reference to the program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    pub(super) fn args_slice(&self) -> &[String] {
        &self.args
    }

    pub(super) const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    pub(super) const fn process_flags(&self) -> ProcessFlags {
        self.flags
    }

    pub(super) const fn stdout_stream(&self) -> StreamFlags {
        self.stdout
    }

    pub(super) const fn stderr_stream(&self) -> StreamFlags {
        self.stderr
    }

    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(super) const fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }
}
