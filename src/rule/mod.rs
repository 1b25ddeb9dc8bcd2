//! Dependency rules and their normalized form.
//!
//! A [`DependencyRule`] names a package as `ManagerType:PackageName` plus an
//! ordered list of version constraints. [`normalize`] folds it into a
//! [`NormalizedRule`], the four values every helper call is made with.
//!
//! # Example
//!
//! ```
//! use alien::rule::{normalize, Comparator, DependencyRule};
//!
//! let rule = DependencyRule::new("PIP:burn")
//!     .with_constraint(Comparator::GreaterOrEqual, "0.4")
//!     .with_constraint(Comparator::Less, "0.5");
//!
//! let normalized = normalize(&rule).unwrap();
//! assert_eq!(normalized.manager_type, "PIP");
//! assert_eq!(normalized.package_name, "burn");
//! assert_eq!(normalized.lower_bound, "0.4");
//! assert_eq!(normalized.upper_bound, "0.5");
//! ```

pub mod line;

pub use line::{DependenciesFileParser, DependencyLineParser};

use std::fmt;

use crate::error::{AlienError, Result};

/// Version comparison operator attached to a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// `>`
    Greater,
    /// `>=`
    GreaterOrEqual,
    /// `=` or `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessOrEqual,
}

impl Comparator {
    /// Parse an operator token. Unknown tokens yield `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            ">" => Some(Comparator::Greater),
            ">=" => Some(Comparator::GreaterOrEqual),
            "=" | "==" => Some(Comparator::Equal),
            "!=" => Some(Comparator::NotEqual),
            "<" => Some(Comparator::Less),
            "<=" => Some(Comparator::LessOrEqual),
            _ => None,
        }
    }

    /// Operator as written in dependency files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Greater => ">",
            Comparator::GreaterOrEqual => ">=",
            Comparator::Equal => "=",
            Comparator::NotEqual => "!=",
            Comparator::Less => "<",
            Comparator::LessOrEqual => "<=",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `(comparator, value)` restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    pub comparator: Comparator,
    pub value: String,
}

impl VersionConstraint {
    pub fn new(comparator: Comparator, value: impl Into<String>) -> Self {
        Self {
            comparator,
            value: value.into(),
        }
    }
}

/// A requirement on a package managed by an Alien manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRule {
    /// `ManagerType:PackageName`, or a plain program name for native rules.
    pub program: String,

    /// Constraints in the order they were written.
    pub versions: Vec<VersionConstraint>,
}

impl DependencyRule {
    /// Create a rule with no version constraints.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            versions: Vec::new(),
        }
    }

    /// Append a constraint.
    pub fn with_constraint(mut self, comparator: Comparator, value: impl Into<String>) -> Self {
        self.versions.push(VersionConstraint::new(comparator, value));
        self
    }
}

impl fmt::Display for DependencyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for (i, constraint) in self.versions.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{} {}", sep, constraint.comparator, constraint.value)?;
        }
        Ok(())
    }
}

/// The four values a helper is invoked with.
///
/// When both bounds are non-empty and equal the rule is an exact match;
/// otherwise `lower_bound` is inclusive and `upper_bound` exclusive. Empty
/// bounds mean "unbounded".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedRule {
    pub manager_type: String,
    pub package_name: String,
    pub lower_bound: String,
    pub upper_bound: String,
}

impl NormalizedRule {
    /// Whether the bounds collapse to a single exact version.
    pub fn is_exact(&self) -> bool {
        !self.lower_bound.is_empty() && self.lower_bound == self.upper_bound
    }
}

/// Split `ManagerType:PackageName` on the first `:`.
///
/// The package part may itself contain colons (`CPAN:XML::Parser`).
pub fn split_program(program: &str) -> Result<(&str, &str)> {
    program
        .split_once(':')
        .ok_or_else(|| AlienError::MalformedIdentifier {
            identifier: program.to_string(),
        })
}

/// Fold a rule's constraints into lower and upper bounds.
///
/// Constraints are applied in order and the last one touching a bound wins:
/// `>=` sets the lower bound, `<` the upper bound, `=`/`==` both. Any other
/// comparator is ignored.
pub fn normalize(rule: &DependencyRule) -> Result<NormalizedRule> {
    let (manager_type, package_name) = split_program(&rule.program)?;

    let mut lower_bound = String::new();
    let mut upper_bound = String::new();
    for constraint in &rule.versions {
        match constraint.comparator {
            Comparator::GreaterOrEqual => lower_bound = constraint.value.clone(),
            Comparator::Less => upper_bound = constraint.value.clone(),
            Comparator::Equal => {
                lower_bound = constraint.value.clone();
                upper_bound = constraint.value.clone();
            }
            Comparator::Greater | Comparator::NotEqual | Comparator::LessOrEqual => {}
        }
    }

    Ok(NormalizedRule {
        manager_type: manager_type.to_string(),
        package_name: package_name.to_string(),
        lower_bound,
        upper_bound,
    })
}
