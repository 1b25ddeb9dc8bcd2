//! Rule-level operations on top of a [`VersionManager`].

use tracing::debug;

use crate::error::{AlienError, Result};
use crate::rule::{
    normalize, split_program, DependenciesFileParser, DependencyLineParser, DependencyRule,
};

use super::VersionManager;

/// Interprets dependency rules and forwards them to a manager.
///
/// The dispatcher owns its manager, so any state the manager keeps (such as
/// the presence cache of [`HelperManager`](super::HelperManager)) lives as
/// long as the dispatcher.
pub struct Dispatcher<M, P = DependenciesFileParser> {
    manager: M,
    parser: P,
}

impl<M: VersionManager> Dispatcher<M> {
    /// Create a dispatcher that reads manager rules in the
    /// `Resources/Dependencies` format.
    pub fn new(manager: M) -> Self {
        Self::with_parser(manager, DependenciesFileParser)
    }
}

impl<M: VersionManager, P: DependencyLineParser> Dispatcher<M, P> {
    /// Create a dispatcher with a custom dependency-line parser.
    pub fn with_parser(manager: M, parser: P) -> Self {
        Self { manager, parser }
    }

    /// The underlying manager.
    pub fn manager(&self) -> &M {
        &self.manager
    }

    /// Whether the installed package satisfies the rule.
    ///
    /// The lower bound is inclusive and the upper bound exclusive, except
    /// that equal bounds ask for an exact version.
    pub fn is_requirement_met(&self, rule: &DependencyRule) -> Result<bool> {
        let normalized = normalize(rule)?;
        let met = self.manager.met(&normalized);
        debug!("{} met: {}", rule, met);
        Ok(met)
    }

    /// The version of the rule's package that should be installed.
    ///
    /// An empty string means the manager found no applicable version.
    pub fn resolve_install_version(&self, rule: &DependencyRule) -> Result<String> {
        let normalized = normalize(rule)?;
        Ok(self.manager.install_version(&normalized))
    }

    /// Whether the manager for `manager_type` is available.
    pub fn has_manager(&self, manager_type: &str) -> bool {
        self.manager.has_manager(manager_type)
    }

    /// The rule the manager itself needs satisfied before it can be used.
    pub fn get_manager_rule(&self, manager_type: &str) -> Result<DependencyRule> {
        let line = self.manager.manager_rule_line(manager_type);
        self.parser
            .parse_line(&line)?
            .ok_or_else(|| AlienError::InvalidDependencyLine {
                line,
                message: format!("no manager rule reported for {}", manager_type),
            })
    }

    /// Run `mode` against `ManagerType:package`, returning the helper's
    /// exit code.
    pub fn run(&self, mode: &str, program: &str, extra: &[String]) -> Result<i32> {
        let (manager_type, package) = split_program(program)?;
        self.manager.run_mode(manager_type, mode, package, extra)
    }

    /// Install `ManagerType:package`, returning the helper's exit code.
    pub fn install(&self, program: &str, extra: &[String]) -> Result<i32> {
        let (manager_type, package) = split_program(program)?;
        self.manager.install(manager_type, package, extra)
    }
}
