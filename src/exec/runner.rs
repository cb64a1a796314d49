//! Command runner abstraction
//!
//! Lets the lockfile manager run the generator through a real process or a
//! test double.

use crate::error::RpmLockResult;
use crate::exec::{ExecCommand, ExecOptions, ExecOutput};
use async_trait::async_trait;

/// Abstract command execution interface
///
/// Implementations must map a non-zero exit to
/// `RpmLockError::CommandExecution` and infrastructure failures to
/// `RpmLockError::Temporary`.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion and capture its output
    async fn exec(&self, command: &ExecCommand, options: &ExecOptions)
        -> RpmLockResult<ExecOutput>;
}
