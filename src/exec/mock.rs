//! Scripted command runner for tests

use crate::error::RpmLockResult;
use crate::exec::{CommandRunner, ExecCommand, ExecOptions, ExecOutput};
use async_trait::async_trait;
use std::sync::Mutex;

type Behavior = Box<dyn Fn(&ExecCommand, &ExecOptions) -> RpmLockResult<ExecOutput> + Send + Sync>;

/// Records every command and answers with a scripted behavior
pub struct MockRunner {
    calls: Mutex<Vec<(ExecCommand, ExecOptions)>>,
    behavior: Behavior,
}

impl MockRunner {
    /// Runner that succeeds without side effects
    pub fn succeeding() -> Self {
        Self::with(|_, _| Ok(ExecOutput::default()))
    }

    /// Runner driven by a closure, e.g. to write the generated lockfile
    pub fn with<F>(behavior: F) -> Self
    where
        F: Fn(&ExecCommand, &ExecOptions) -> RpmLockResult<ExecOutput> + Send + Sync + 'static,
    {
        Self {
            calls: Mutex::new(Vec::new()),
            behavior: Box::new(behavior),
        }
    }

    /// Commands executed so far
    pub fn calls(&self) -> Vec<(ExecCommand, ExecOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn exec(
        &self,
        command: &ExecCommand,
        options: &ExecOptions,
    ) -> RpmLockResult<ExecOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((command.clone(), options.clone()));
        (self.behavior)(command, options)
    }
}
