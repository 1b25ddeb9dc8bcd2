//! Bash command execution.
//!
//! The distribution's settings files and helper functions are bash, so
//! commands here always go through `/bin/bash` rather than `$SHELL`.

use crate::error::{AlienError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

const BASH: &str = "/bin/bash";

/// Result of executing a bash command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output with surrounding whitespace trimmed.
    pub stdout: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    fn new(exit_code: Option<i32>, stdout: String, duration: Duration) -> Self {
        Self {
            exit_code,
            success: exit_code == Some(0),
            stdout,
            duration,
        }
    }
}

/// Run a command in bash, capturing its output and exit status.
///
/// The command is written to bash's standard input followed by
/// `exit $?`, so multi-line scripts and `.`-sourcing behave as they
/// would in an interactive session. Standard error is inherited.
pub fn bash(command: &str) -> Result<CommandResult> {
    let start = Instant::now();

    let mut child = Command::new(BASH)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|_| AlienError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(command.as_bytes())?;
        stdin.write_all(b"\nexit $?\n")?;
    }

    let output = child.wait_with_output()?;
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

    Ok(CommandResult::new(
        output.status.code(),
        stdout,
        start.elapsed(),
    ))
}

/// Run a command in bash and return only its trimmed output.
pub fn bash_output(command: &str) -> Result<String> {
    bash(command).map(|r| r.stdout)
}

/// Run a command with `bash -c` and return only its exit status.
///
/// Output is not captured; the command shares this process's stdio.
pub fn bash_value(command: &str) -> Result<Option<i32>> {
    let status = Command::new(BASH)
        .arg("-c")
        .arg(command)
        .status()
        .map_err(|_| AlienError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;
    Ok(status.code())
}

/// Quote a value for safe interpolation into a bash command.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
