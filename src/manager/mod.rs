//! Alien manager dispatch.
//!
//! Every Alien manager is driven through a helper executable named
//! `Alien-<ManagerType>` that answers a fixed set of modes:
//!
//! | Mode | Arguments | Answer |
//! |---|---|---|
//! | `--met` | `<pkg> <lower> <upper>` | exit code 0 when satisfied |
//! | `--getinstallversion` | `<pkg> <lower> <upper>` | version on stdout |
//! | `--have-manager` | | exit code 0 when the manager is installed |
//! | `--get-manager-rule` | | dependency line on stdout |
//! | `--install` | `<pkg> <extra...>` | exit code passed through |
//!
//! [`VersionManager`] models that contract. [`HelperManager`] implements it
//! by spawning the helpers and [`MockManager`] answers from memory for tests.
//! [`Dispatcher`] ties a manager to the rule interpreter.
//!
//! # Modules
//!
//! - [`helper`] - Process-spawning implementation
//! - [`mock`] - In-memory implementation for tests
//! - [`dispatcher`] - Rule-level operations on top of a manager

pub mod dispatcher;
pub mod helper;
pub mod mock;

pub use dispatcher::Dispatcher;
pub use helper::{HelperManager, DEFAULT_HELPER_PREFIX};
pub use mock::{MockCall, MockManager};

use std::fmt;

use crate::error::Result;
use crate::rule::NormalizedRule;

/// Modes understood by every helper executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperMode {
    Met,
    GetInstallVersion,
    HaveManager,
    GetManagerRule,
    Install,
}

impl HelperMode {
    /// The command-line flag for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            HelperMode::Met => "--met",
            HelperMode::GetInstallVersion => "--getinstallversion",
            HelperMode::HaveManager => "--have-manager",
            HelperMode::GetManagerRule => "--get-manager-rule",
            HelperMode::Install => "--install",
        }
    }
}

impl fmt::Display for HelperMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The helper contract, one method per mode.
///
/// A helper that cannot be reached answers `false` or an empty string; it
/// is not reported separately from a negative answer.
pub trait VersionManager {
    /// Whether an installed package satisfies the rule's bounds.
    fn met(&self, rule: &NormalizedRule) -> bool;

    /// The version that should be installed to satisfy the rule.
    ///
    /// An empty string means no applicable version.
    fn install_version(&self, rule: &NormalizedRule) -> String;

    /// Whether the manager itself is available.
    fn has_manager(&self, manager_type: &str) -> bool;

    /// The dependency line describing what the manager needs installed
    /// before it can be used.
    fn manager_rule_line(&self, manager_type: &str) -> String;

    /// Run an arbitrary mode against a package and return the helper's
    /// exit code.
    fn run_mode(
        &self,
        manager_type: &str,
        mode: &str,
        package: &str,
        extra: &[String],
    ) -> Result<i32>;

    /// Install a package, returning the helper's exit code.
    fn install(&self, manager_type: &str, package: &str, extra: &[String]) -> Result<i32> {
        self.run_mode(manager_type, HelperMode::Install.as_str(), package, extra)
    }
}
