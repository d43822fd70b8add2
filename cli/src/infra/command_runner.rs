//! Infrastructure implementation of the `CommandRunner` port.
//!
//! Used for both `ssh` and `vagrant` invocations.

use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::application::ports::CommandRunner;

/// Default timeout for a single remote command.
pub const DEFAULT_CMD_TIMEOUT: Duration = Duration::from_secs(120);

/// Production `CommandRunner` backed by `tokio::process`.
///
/// Children are spawned with `kill_on_drop`, so a command that outlives its
/// timeout is killed when the in-flight wait is abandoned.
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_CMD_TIMEOUT)
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.run_with_timeout(program, args, self.timeout).await
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        tracing::trace!(program, ?args, timeout_secs = timeout.as_secs(), "spawning");
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());
        let finished = async {
            let (status, stdout, stderr) = tokio::join!(child.wait(), stdout, stderr);
            let status = status.with_context(|| format!("waiting for {program}"))?;
            anyhow::Ok(Output {
                status,
                stdout,
                stderr,
            })
        };

        tokio::select! {
            output = finished => output,
            () = tokio::time::sleep(timeout) => {
                // Returning drops `child`, which kills it.
                anyhow::bail!("{program} timed out after {}s", timeout.as_secs())
            }
        }
    }
}

/// Read a captured pipe to the end. A read error truncates the buffer.
async fn drain(pipe: Option<impl AsyncRead + Unpin>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        if let Err(e) = pipe.read_to_end(&mut buf).await {
            tracing::debug!(error = %e, "pipe read failed");
        }
    }
    buf
}
