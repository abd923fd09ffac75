// stagelint: Git hook runner for staged files and commit messages
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming and the wait loop.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks ──> String (KEEP_IN_STRING) + trace! lines
//!   select! { wait | token.cancelled() | timeout }
//!   join readers
//!   --> ProcessOutput { exit_code, stdout, stderr, interrupted, timed_out }
//! ```
//!
//! Readers own their buffers and hand them back through the join handle, so
//! a chatty linter can never block on a full channel while we wait for it.

use std::future::Future;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::HookResult;

/// Spawns a reader task for one stream if its flags ask for the content.
fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    let name = process_name.to_string();
    stream.map(|stream| tokio::spawn(read_stream(stream, flags, name, stream_name)))
}

async fn read_stream<R>(
    reader: R,
    flags: StreamFlags,
    process_name: String,
    stream_name: &'static str,
) -> String
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    let mut kept = String::new();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if flags.contains(StreamFlags::FORWARD_TO_LOG) {
                    trace!(process = %process_name, stream = stream_name, line = %line, "output");
                }
                if flags.contains(StreamFlags::KEEP_IN_STRING) {
                    if !kept.is_empty() {
                        kept.push('\n');
                    }
                    kept.push_str(&line);
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!(
                    process = %process_name,
                    stream = stream_name,
                    error = %e,
                    "error reading stream"
                );
                break;
            }
        }
    }
    kept
}

/// Grace period for readers after a kill; grandchildren may keep the pipe open.
const KILLED_READER_GRACE: Duration = Duration::from_secs(1);

async fn join_reader(handle: Option<JoinHandle<String>>, killed: bool) -> String {
    let Some(handle) = handle else {
        return String::new();
    };
    if !killed {
        return handle.await.unwrap_or_default();
    }
    let abort = handle.abort_handle();
    match tokio::time::timeout(KILLED_READER_GRACE, handle).await {
        Ok(joined) => joined.unwrap_or_default(),
        Err(_) => {
            abort.abort();
            String::new()
        }
    }
}

/// Sleeps for `timeout`, or forever when no timeout is set.
fn deadline(timeout: Option<Duration>) -> impl Future<Output = ()> {
    async move {
        match timeout {
            Some(duration) => tokio::time::sleep(duration).await,
            None => std::future::pending::<()>().await,
        }
    }
}

impl ProcessBuilder {
    /// Runs the child process, handling I/O streaming and waiting for completion.
    pub(super) async fn run_child(
        &self,
        name: &str,
        child: &mut Child,
        token: CancellationToken,
    ) -> HookResult<ProcessOutput> {
        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_stream(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_stream(), name, "stderr");

        let (exit_status, interrupted, timed_out) = tokio::select! {
            status = child.wait() => (status?, false, false),
            () = token.cancelled() => {
                warn!(process = %name, "cancellation requested, terminating process");
                child.kill().await.ok();
                (child.wait().await?, true, false)
            }
            () = deadline(self.timeout_duration()) => {
                warn!(process = %name, timeout = ?self.timeout_duration(), "process timed out");
                child.kill().await.ok();
                (child.wait().await?, false, true)
            }
        };

        let killed = interrupted || timed_out;
        let stdout = join_reader(stdout_handle, killed).await;
        let stderr = join_reader(stderr_handle, killed).await;

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            stdout,
            stderr,
            interrupted,
            timed_out,
        ))
    }
}
