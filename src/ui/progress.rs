//! Labelled console progress.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress reporter for long loops in scripts.
///
/// Call [`update`](Self::update) with the same label and a rising `i`; the
/// bar finishes once `i >= n`. A new label finishes the current bar and
/// starts another. An empty label just ends the current line.
pub struct ConsoleProgress {
    bar: Option<ProgressBar>,
    current: String,
    hidden: bool,
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleProgress {
    /// Draw progress on stderr.
    pub fn new() -> Self {
        Self {
            bar: None,
            current: String::new(),
            hidden: false,
        }
    }

    /// Track progress without drawing anything.
    pub fn hidden() -> Self {
        Self {
            hidden: true,
            ..Self::new()
        }
    }

    fn start(&self, label: &str, n: u64) -> ProgressBar {
        let target = if self.hidden {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        let bar = ProgressBar::with_draw_target(Some(n), target);
        bar.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("|/-\\ ")
                .template("{msg}...  {spinner:.cyan}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(label.to_string());
        bar
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
        self.current.clear();
    }

    /// Report step `i` of `n` for `label`.
    pub fn update(&mut self, label: &str, i: u64, n: u64) {
        if label.is_empty() {
            self.finish();
            return;
        }

        if label != self.current {
            self.finish();
            self.bar = Some(self.start(label, n));
            self.current = label.to_string();
        }

        if i >= n {
            self.finish();
            return;
        }

        if let Some(bar) = &self.bar {
            bar.set_position(i);
            bar.tick();
        }
    }

    /// Label of the bar in progress, if any.
    pub fn current_label(&self) -> Option<&str> {
        if self.current.is_empty() {
            None
        } else {
            Some(&self.current)
        }
    }

    /// Position of the bar in progress, if any.
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(|bar| bar.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_position_for_current_label() {
        let mut progress = ConsoleProgress::hidden();
        progress.update("Scanning recipes", 0, 4);
        progress.update("Scanning recipes", 2, 4);
        assert_eq!(progress.current_label(), Some("Scanning recipes"));
        assert_eq!(progress.position(), Some(2));
    }

    #[test]
    fn finishes_when_done() {
        let mut progress = ConsoleProgress::hidden();
        progress.update("Scanning recipes", 1, 2);
        progress.update("Scanning recipes", 2, 2);
        assert_eq!(progress.current_label(), None);
        assert_eq!(progress.position(), None);
    }

    #[test]
    fn new_label_restarts() {
        let mut progress = ConsoleProgress::hidden();
        progress.update("Scanning", 3, 10);
        progress.update("Indexing", 1, 5);
        assert_eq!(progress.current_label(), Some("Indexing"));
        assert_eq!(progress.position(), Some(1));
    }

    #[test]
    fn empty_label_ends_line() {
        let mut progress = ConsoleProgress::hidden();
        progress.update("Scanning", 1, 10);
        progress.update("", 0, 0);
        assert_eq!(progress.current_label(), None);
    }

    #[test]
    fn zero_total_finishes_immediately() {
        let mut progress = ConsoleProgress::hidden();
        progress.update("Nothing to do", 0, 0);
        assert_eq!(progress.current_label(), None);
    }
}
