//! Terminal output for scripts.
//!
//! This module provides:
//! - [`Logger`], labelled colored logging to stderr
//! - [`ask`] and [`ask_option`] prompts
//! - [`ConsoleProgress`] for long-running loops
//! - [`LogTheme`], the shared color palette

pub mod log;
pub mod progress;
pub mod prompts;
pub mod theme;

pub use log::{LogLevel, Logger};
pub use progress::ConsoleProgress;
pub use prompts::{ask, ask_option, interpret_answer};
pub use theme::{should_use_colors, LogTheme};
