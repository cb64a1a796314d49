//! Command runner backed by `tokio::process`

use crate::error::{RpmLockError, RpmLockResult};
use crate::exec::{CommandRunner, ExecCommand, ExecOptions, ExecOutput};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs commands as local child processes
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn exec(
        &self,
        command: &ExecCommand,
        options: &ExecOptions,
    ) -> RpmLockResult<ExecOutput> {
        debug!("Executing: {}", command);

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(ref cwd) = options.cwd {
            debug!("Working directory: {}", cwd.display());
            cmd.current_dir(cwd);
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| RpmLockError::command_failed(command.to_string(), e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        match output.status.code() {
            Some(0) => Ok(ExecOutput { stdout, stderr }),
            Some(code) => Err(RpmLockError::CommandExecution {
                command: command.to_string(),
                code,
                stdout,
                stderr,
            }),
            // Killed by a signal: the host went away, not the tool
            None => Err(RpmLockError::Temporary(format!(
                "{} terminated by signal",
                command
            ))),
        }
    }
}
