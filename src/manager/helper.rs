//! Helper-executable implementation of [`VersionManager`].
//!
//! Each call spawns exactly one child, waits for it, and reads all of its
//! standard output before returning. There are no retries and no timeouts;
//! a helper that hangs blocks the caller.

use std::collections::HashMap;
use std::process::{Command, Stdio};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::{AlienError, Result};
use crate::rule::NormalizedRule;

use super::{HelperMode, VersionManager};

/// Prefix joined with the manager type to name the helper executable.
pub const DEFAULT_HELPER_PREFIX: &str = "Alien-";

/// Environment variable overriding [`DEFAULT_HELPER_PREFIX`].
pub const HELPER_PREFIX_ENV: &str = "ALIEN_HELPER_PREFIX";

/// Drives Alien managers by spawning `<prefix><ManagerType>` from `PATH`.
///
/// `--have-manager` answers are cached per manager type for the lifetime of
/// the instance and never invalidated.
#[derive(Debug)]
pub struct HelperManager {
    prefix: String,
    presence: Mutex<HashMap<String, bool>>,
}

impl Default for HelperManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HelperManager {
    /// Create a manager using the `Alien-` prefix.
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_HELPER_PREFIX)
    }

    /// Create a manager with a custom helper prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            presence: Mutex::new(HashMap::new()),
        }
    }

    /// Create a manager honoring `ALIEN_HELPER_PREFIX` when it is set.
    pub fn from_env() -> Self {
        match std::env::var(HELPER_PREFIX_ENV) {
            Ok(prefix) if !prefix.is_empty() => Self::with_prefix(prefix),
            _ => Self::new(),
        }
    }

    /// Executable name for a manager type. Case is kept as given.
    pub fn helper_name(&self, manager_type: &str) -> String {
        format!("{}{}", self.prefix, manager_type)
    }

    fn command(&self, manager_type: &str, mode: &str, args: &[&str]) -> (String, Command) {
        let helper = self.helper_name(manager_type);
        let mut cmd = Command::new(&helper);
        cmd.arg(mode).args(args).stdin(Stdio::null());
        debug!("spawning {} {} {:?}", helper, mode, args);
        (helper, cmd)
    }

    /// Run a helper and report whether it exited with status 0.
    fn succeeds(&self, manager_type: &str, mode: HelperMode, args: &[&str]) -> bool {
        let (helper, mut cmd) = self.command(manager_type, mode.as_str(), args);
        match cmd.status() {
            Ok(status) => {
                debug!("{} {} exited with {:?}", helper, mode, status.code());
                status.success()
            }
            Err(e) => {
                warn!("could not run {}: {}", helper, e);
                false
            }
        }
    }

    /// Run a helper and return its trimmed standard output.
    fn read_stdout(&self, manager_type: &str, mode: HelperMode, args: &[&str]) -> String {
        let (helper, mut cmd) = self.command(manager_type, mode.as_str(), args);
        cmd.stdout(Stdio::piped()).stderr(Stdio::inherit());
        match cmd.output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim().to_string(),
            Err(e) => {
                warn!("could not run {}: {}", helper, e);
                String::new()
            }
        }
    }
}

impl VersionManager for HelperManager {
    fn met(&self, rule: &NormalizedRule) -> bool {
        self.succeeds(
            &rule.manager_type,
            HelperMode::Met,
            &[&rule.package_name, &rule.lower_bound, &rule.upper_bound],
        )
    }

    fn install_version(&self, rule: &NormalizedRule) -> String {
        self.read_stdout(
            &rule.manager_type,
            HelperMode::GetInstallVersion,
            &[&rule.package_name, &rule.lower_bound, &rule.upper_bound],
        )
    }

    fn has_manager(&self, manager_type: &str) -> bool {
        let mut presence = self
            .presence
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(&present) = presence.get(manager_type) {
            return present;
        }

        let present = self.succeeds(manager_type, HelperMode::HaveManager, &[]);
        presence.insert(manager_type.to_string(), present);
        present
    }

    fn manager_rule_line(&self, manager_type: &str) -> String {
        self.read_stdout(manager_type, HelperMode::GetManagerRule, &[])
    }

    fn run_mode(
        &self,
        manager_type: &str,
        mode: &str,
        package: &str,
        extra: &[String],
    ) -> Result<i32> {
        let mut args = vec![package];
        args.extend(extra.iter().map(String::as_str));
        let (helper, mut cmd) = self.command(manager_type, mode, &args);
        cmd.stdin(Stdio::inherit());

        let status = cmd.status().map_err(|e| AlienError::HelperUnavailable {
            helper: helper.clone(),
            message: e.to_string(),
        })?;

        status
            .code()
            .ok_or(AlienError::HelperFailure { helper, code: None })
    }
}
