//! Mock manager implementation for testing.
//!
//! `MockManager` implements [`VersionManager`] from in-memory answers and
//! records every call for later assertion. No processes are spawned.
//!
//! # Example
//!
//! ```
//! use alien::manager::{Dispatcher, MockCall, MockManager};
//! use alien::rule::DependencyRule;
//!
//! let mock = MockManager::new()
//!     .with_met("PIP", "burn")
//!     .with_install_version("PIP", "burn", "0.4.6");
//! let dispatcher = Dispatcher::new(mock);
//!
//! let rule = DependencyRule::new("PIP:burn");
//! assert!(dispatcher.is_requirement_met(&rule).unwrap());
//! assert_eq!(dispatcher.resolve_install_version(&rule).unwrap(), "0.4.6");
//! assert_eq!(dispatcher.manager().calls().len(), 2);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::rule::NormalizedRule;

use super::VersionManager;

/// A call received by [`MockManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Met(NormalizedRule),
    InstallVersion(NormalizedRule),
    HasManager(String),
    ManagerRule(String),
    RunMode {
        manager_type: String,
        mode: String,
        package: String,
        extra: Vec<String>,
    },
}

/// In-memory [`VersionManager`].
///
/// Unknown packages are not met and have no install version; unknown
/// managers are absent and have an empty rule line.
#[derive(Debug, Default)]
pub struct MockManager {
    met: HashSet<(String, String)>,
    versions: HashMap<(String, String), String>,
    managers: HashSet<String>,
    manager_rules: HashMap<String, String>,
    exit_code: i32,
    calls: RefCell<Vec<MockCall>>,
}

fn key(manager_type: &str, package: &str) -> (String, String) {
    (manager_type.to_string(), package.to_string())
}

impl MockManager {
    /// Create a mock that answers negatively to everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `package` as met regardless of bounds.
    pub fn with_met(mut self, manager_type: &str, package: &str) -> Self {
        self.met.insert(key(manager_type, package));
        self
    }

    /// Answer `--getinstallversion` for `package`.
    pub fn with_install_version(mut self, manager_type: &str, package: &str, version: &str) -> Self {
        self.versions
            .insert(key(manager_type, package), version.to_string());
        self
    }

    /// Report a manager as present.
    pub fn with_manager(mut self, manager_type: &str) -> Self {
        self.managers.insert(manager_type.to_string());
        self
    }

    /// Answer `--get-manager-rule` for a manager.
    pub fn with_manager_rule(mut self, manager_type: &str, line: &str) -> Self {
        self.manager_rules
            .insert(manager_type.to_string(), line.to_string());
        self
    }

    /// Exit code returned by every `run_mode` call.
    pub fn with_exit_code(mut self, code: i32) -> Self {
        self.exit_code = code;
        self
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl VersionManager for MockManager {
    fn met(&self, rule: &NormalizedRule) -> bool {
        self.record(MockCall::Met(rule.clone()));
        self.met
            .contains(&key(&rule.manager_type, &rule.package_name))
    }

    fn install_version(&self, rule: &NormalizedRule) -> String {
        self.record(MockCall::InstallVersion(rule.clone()));
        self.versions
            .get(&key(&rule.manager_type, &rule.package_name))
            .cloned()
            .unwrap_or_default()
    }

    fn has_manager(&self, manager_type: &str) -> bool {
        self.record(MockCall::HasManager(manager_type.to_string()));
        self.managers.contains(manager_type)
    }

    fn manager_rule_line(&self, manager_type: &str) -> String {
        self.record(MockCall::ManagerRule(manager_type.to_string()));
        self.manager_rules
            .get(manager_type)
            .cloned()
            .unwrap_or_default()
    }

    fn run_mode(
        &self,
        manager_type: &str,
        mode: &str,
        package: &str,
        extra: &[String],
    ) -> Result<i32> {
        self.record(MockCall::RunMode {
            manager_type: manager_type.to_string(),
            mode: mode.to_string(),
            package: package.to_string(),
            extra: extra.to_vec(),
        });
        Ok(self.exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(manager_type: &str, package: &str) -> NormalizedRule {
        NormalizedRule {
            manager_type: manager_type.into(),
            package_name: package.into(),
            ..Default::default()
        }
    }

    #[test]
    fn unknown_answers_are_negative() {
        let mock = MockManager::new();
        assert!(!mock.met(&rule("PIP", "burn")));
        assert_eq!(mock.install_version(&rule("PIP", "burn")), "");
        assert!(!mock.has_manager("PIP"));
        assert_eq!(mock.manager_rule_line("PIP"), "");
    }

    #[test]
    fn configured_answers_are_returned() {
        let mock = MockManager::new()
            .with_met("CPAN", "XML::Parser")
            .with_manager("CPAN")
            .with_manager_rule("CPAN", "Perl >= 5.8");
        assert!(mock.met(&rule("CPAN", "XML::Parser")));
        assert!(!mock.met(&rule("PIP", "XML::Parser")));
        assert!(mock.has_manager("CPAN"));
        assert_eq!(mock.manager_rule_line("CPAN"), "Perl >= 5.8");
    }

    #[test]
    fn calls_are_recorded_in_order() {
        let mock = MockManager::new();
        mock.has_manager("PIP");
        mock.met(&rule("PIP", "burn"));
        assert_eq!(
            mock.calls(),
            vec![
                MockCall::HasManager("PIP".into()),
                MockCall::Met(rule("PIP", "burn")),
            ]
        );
    }
}
