//! Shell command execution.

pub mod command;

pub use command::{bash, bash_output, bash_value, quote, CommandResult};
