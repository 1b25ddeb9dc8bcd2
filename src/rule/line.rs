//! Dependency-line parsing.
//!
//! Alien managers describe their own bootstrap requirement as a single line
//! in the distribution's `Resources/Dependencies` format. The dispatcher
//! only needs "text in, [`DependencyRule`] out", so the parser sits behind
//! the [`DependencyLineParser`] trait and can be swapped out.

use std::iter::Peekable;
use std::str::SplitWhitespace;

use crate::error::{AlienError, Result};

use super::{Comparator, DependencyRule, VersionConstraint};

/// Turns one textual line into a [`DependencyRule`].
pub trait DependencyLineParser {
    /// Parse a line. Blank and comment-only lines yield `Ok(None)`.
    fn parse_line(&self, line: &str) -> Result<Option<DependencyRule>>;

    /// Parse every non-blank line of a dependencies file.
    fn parse_lines(&self, content: &str) -> Result<Vec<DependencyRule>> {
        let mut rules = Vec::new();
        for line in content.lines() {
            if let Some(rule) = self.parse_line(line)? {
                rules.push(rule);
            }
        }
        Ok(rules)
    }
}

/// Parser for the `Resources/Dependencies` line format.
///
/// # Supported Formats
///
/// - Name only: `Perl`
/// - Restriction: `Perl >= 5.8` (any of `>`, `>=`, `=`, `==`, `!=`, `<`, `<=`)
/// - Bare version, read as `>=`: `Perl 5.8`
/// - Two restrictions: `Perl >= 5.8, < 6` or `Perl >= 5.8 , < 6`
/// - Comments: everything after `#`
///
/// Anything other than a comma after the first restriction is an error.
/// The native dependency resolver skips such trailing text and keeps the
/// first restriction; this parser is stricter, so `Perl >= 5.8 and more`
/// fails.
///
/// # Example
///
/// ```
/// use alien::rule::{Comparator, DependenciesFileParser, DependencyLineParser};
///
/// let rule = DependenciesFileParser
///     .parse_line("CPAN:XML::Parser >= 2.36, < 3 # needed by intltool")
///     .unwrap()
///     .unwrap();
/// assert_eq!(rule.program, "CPAN:XML::Parser");
/// assert_eq!(rule.versions.len(), 2);
/// assert_eq!(rule.versions[1].comparator, Comparator::Less);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DependenciesFileParser;

type Tokens<'a> = Peekable<SplitWhitespace<'a>>;

impl DependenciesFileParser {
    /// Read `[OP] VERSION[,]`. Returns the constraint and whether a comma
    /// was glued to the version.
    fn parse_operand(line: &str, tokens: &mut Tokens<'_>) -> Result<(VersionConstraint, bool)> {
        let Some(token) = tokens.next() else {
            return Err(Self::invalid(line, "missing version restriction"));
        };

        let (comparator, raw_version) = match Comparator::parse(token) {
            Some(comparator) => {
                let version = tokens.next().ok_or_else(|| {
                    Self::invalid(line, &format!("missing version after '{}'", token))
                })?;
                (comparator, version)
            }
            None => (Comparator::GreaterOrEqual, token),
        };

        let (version, has_comma) = match raw_version.strip_suffix(',') {
            Some(stripped) => (stripped, true),
            None => (raw_version, false),
        };
        if version.is_empty() {
            return Err(Self::invalid(line, "empty version"));
        }

        Ok((VersionConstraint::new(comparator, version), has_comma))
    }

    fn invalid(line: &str, message: &str) -> AlienError {
        AlienError::InvalidDependencyLine {
            line: line.to_string(),
            message: message.to_string(),
        }
    }
}

impl DependencyLineParser for DependenciesFileParser {
    fn parse_line(&self, line: &str) -> Result<Option<DependencyRule>> {
        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        let mut tokens = content.split_whitespace().peekable();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let mut rule = DependencyRule::new(name);

        if tokens.peek().is_none() {
            return Ok(Some(rule));
        }

        let (first, has_comma) = Self::parse_operand(line, &mut tokens)?;
        rule.versions.push(first);

        if !has_comma {
            match tokens.next() {
                None => return Ok(Some(rule)),
                Some(",") => {}
                Some(other) => {
                    return Err(Self::invalid(
                        line,
                        &format!("expected ',' but found '{}'", other),
                    ))
                }
            }
        }

        let (second, _) = Self::parse_operand(line, &mut tokens)
            .map_err(|_| Self::invalid(line, "missing second restriction"))?;
        rule.versions.push(second);

        Ok(Some(rule))
    }
}
