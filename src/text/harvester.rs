//! Cursor-based text scanner.
//!
//! Used by the scripts that scrape version lists out of upstream web pages:
//! skip to a marker, take everything up to the next marker, repeat.

use crate::error::{AlienError, Result};

/// Remove every `<...>` tag from `s`.
///
/// A `>` that appears before the next `<` stops stripping, leaving the
/// rest of the text untouched.
pub fn strip_tags(s: &str) -> String {
    let mut out = s.to_string();
    loop {
        match (out.find('<'), out.find('>')) {
            (Some(begin), Some(end)) if begin < end => {
                out.replace_range(begin..=end, "");
            }
            _ => return out,
        }
    }
}

/// Scans forward through a text, one marker at a time.
///
/// # Example
///
/// ```
/// use alien::text::TextHarvester;
///
/// let mut page = TextHarvester::new("<li><b>1.2</b></li><li>1.3</li>").strip_tags(true);
/// page.skip_until_next("<li>").unwrap();
/// assert_eq!(page.get_until_next("</li>").unwrap(), "1.2");
/// page.skip_until_next("<li>").unwrap();
/// assert_eq!(page.get_until_next("</li>").unwrap(), "1.3");
/// ```
#[derive(Debug, Clone)]
pub struct TextHarvester {
    data: String,
    cursor: usize,
    strip_tags: bool,
}

impl TextHarvester {
    /// Start scanning at the beginning of `data`.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            cursor: 0,
            strip_tags: false,
        }
    }

    /// Strip `<...>` tags from everything returned by the `get_*` methods.
    pub fn strip_tags(mut self, strip: bool) -> Self {
        self.strip_tags = strip;
        self
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn find(&self, marker: &str) -> Result<usize> {
        self.data[self.cursor..]
            .find(marker)
            .map(|offset| self.cursor + offset)
            .ok_or_else(|| AlienError::Parse(format!("'{}' not found", marker)))
    }

    fn finish(&self, text: &str) -> String {
        if self.strip_tags {
            strip_tags(text)
        } else {
            text.to_string()
        }
    }

    /// Move the cursor just past the next occurrence of `marker`.
    pub fn skip_until_next(&mut self, marker: &str) -> Result<()> {
        self.cursor = self.find(marker)? + marker.len();
        Ok(())
    }

    /// Return the text up to the next `marker` and leave the cursor on it.
    pub fn get_until_next(&mut self, marker: &str) -> Result<String> {
        let begin = self.cursor;
        let end = self.find(marker)?;
        self.cursor = end;
        Ok(self.finish(&self.data[begin..end]))
    }

    /// Like [`get_until_next`](Self::get_until_next), split into lines.
    pub fn get_lines_until(&mut self, marker: &str) -> Result<Vec<String>> {
        let begin = self.cursor;
        let end = self.find(marker)?;
        self.cursor = end;
        Ok(self.data[begin..end]
            .split('\n')
            .map(|line| self.finish(line))
            .collect())
    }

    /// Return the rest of the text and move the cursor to the end.
    pub fn get_until_end(&mut self) -> String {
        let rest = self.data[self.cursor..].to_string();
        self.cursor = self.data.len();
        rest
    }

    /// Whether `marker` occurs at or after the cursor.
    pub fn contains(&self, marker: &str) -> bool {
        self.data[self.cursor..].contains(marker)
    }
}
