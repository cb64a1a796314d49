//! External command execution
//!
//! Commands are argument vectors, never shell strings, so manifest paths
//! containing spaces or quotes reach the tool untouched.

#[cfg(test)]
pub mod mock;
mod process;
mod runner;

pub use process::ProcessRunner;
pub use runner::CommandRunner;

use std::fmt;
use std::path::PathBuf;

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecCommand {
    /// Executable name or path
    pub program: String,
    /// Arguments, passed as-is
    pub args: Vec<String>,
}

impl ExecCommand {
    /// Create a command with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for ExecCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"')
            {
                write!(f, " '{}'", arg.replace('\'', r"'\''"))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Execution options
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Working directory for the child process
    pub cwd: Option<PathBuf>,
}

/// Captured output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
}
