// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run() / run_with_cancellation(token)
//!              |
//!              v
//!     build_command()
//!     args, cwd, stdio
//!              |
//!              v
//!          spawn() --> run_child (io.rs)
//!              |
//!              v
//!    validate exit_code
//!    (skip if ALLOW_FAILURE or interrupted)
//!              |
//!              v
//!       ProcessOutput
//! ```

use std::process::Stdio;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::{HookResult, ProcessError};

impl ProcessBuilder {
    /// Returns the display name for this process.
    pub(super) fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    pub(super) fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exits with a non-zero code (and
    ///   `ALLOW_FAILURE` is not set), or times out.
    pub async fn run(self) -> HookResult<ProcessOutput> {
        self.run_with_cancellation(CancellationToken::new()).await
    }

    /// Spawns and runs the process with cancellation support.
    ///
    /// When the token is cancelled the child is killed and the output comes
    /// back with `is_interrupted() == true` instead of an error.
    ///
    /// # Errors
    ///
    /// Same as [`ProcessBuilder::run`], except that an interrupted process is
    /// not an error.
    pub async fn run_with_cancellation(
        self,
        token: CancellationToken,
    ) -> HookResult<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if token.is_cancelled() {
            return Ok(ProcessOutput::new(-1, String::new(), String::new(), true, false));
        }

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut child = self
            .build_command()
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = self.run_child(&name, &mut child, token).await?;

        if output.is_timed_out() && !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) {
            return Err(ProcessError::Timeout {
                command: cmd_line,
                timeout_secs: self.timeout_duration().map_or(0, |d| d.as_secs()),
            }
            .into());
        }

        if !output.is_interrupted()
            && !output.is_timed_out()
            && !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE)
            && output.exit_code() != 0
        {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(
            process = %name,
            exit_code = output.exit_code(),
            interrupted = output.is_interrupted(),
            "completed"
        );
        Ok(output)
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        command.kill_on_drop(true);

        command
    }
}
