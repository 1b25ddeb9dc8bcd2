//! Labelled, colored logging for scripts.
//!
//! Every line is written as `\n<label>: <message>` to stderr. The label is
//! sticky: once a call supplies one, later calls without a label reuse it.

use std::io::{self, Write};

use super::theme::LogTheme;

/// Log verbosity levels, each with its own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Normal,
    Terse,
    Verbose,
    Debug,
}

/// Writes labelled log lines.
///
/// # Example
///
/// ```
/// use alien::ui::{LogLevel, LogTheme, Logger};
///
/// let mut log = Logger::new(Vec::new(), LogTheme::plain());
/// log.log(LogLevel::Normal, "installing burn", Some("Alien"));
/// log.terse("done");
/// let out = String::from_utf8(log.into_inner()).unwrap();
/// assert_eq!(out, "\nAlien: installing burn\nAlien: done");
/// ```
#[derive(Debug)]
pub struct Logger<W: Write = io::Stderr> {
    out: W,
    label: String,
    theme: LogTheme,
}

impl Logger<io::Stderr> {
    /// Log to stderr, with colors when stderr is a terminal.
    pub fn stderr() -> Self {
        Self::new(io::stderr(), LogTheme::detect())
    }
}

impl<W: Write> Logger<W> {
    /// Log to any writer.
    pub fn new(out: W, theme: LogTheme) -> Self {
        Self {
            out,
            label: String::new(),
            theme,
        }
    }

    /// Set the initial label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The label currently prefixed to each line.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Write `message` at `level`, one labelled line per message line.
    ///
    /// A non-empty `label` replaces the sticky label first.
    pub fn log(&mut self, level: LogLevel, message: &str, label: Option<&str>) {
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            self.label = label.to_string();
        }
        // Logging never fails the caller.
        let _ = self.write_lines(level, message);
    }

    fn write_lines(&mut self, level: LogLevel, message: &str) -> io::Result<()> {
        let style = match level {
            LogLevel::Error => &self.theme.error,
            LogLevel::Normal => &self.theme.normal,
            LogLevel::Terse => &self.theme.terse,
            LogLevel::Verbose => &self.theme.verbose,
            LogLevel::Debug => &self.theme.debug,
        };
        let prefix = self.theme.label.apply_to(format!("{}:", self.label));
        for line in message.split('\n') {
            write!(self.out, "\n{} {}", prefix, style.apply_to(line))?;
        }
        self.out.flush()
    }

    pub fn error(&mut self, message: &str) {
        self.log(LogLevel::Error, message, None);
    }

    pub fn normal(&mut self, message: &str) {
        self.log(LogLevel::Normal, message, None);
    }

    pub fn terse(&mut self, message: &str) {
        self.log(LogLevel::Terse, message, None);
    }

    pub fn verbose(&mut self, message: &str) {
        self.log(LogLevel::Verbose, message, None);
    }

    pub fn debug(&mut self, message: &str) {
        self.log(LogLevel::Debug, message, None);
    }

    /// Style used for prompts.
    pub fn theme(&self) -> &LogTheme {
        &self.theme
    }

    /// Consume the logger and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
