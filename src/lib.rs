//! Alien - Bridge between the native dependency resolver and Alien
//! package managers.
//!
//! Packages owned by ecosystem-specific managers (CPAN, PIP, RubyGems,
//! LuaRocks) are named `ManagerType:PackageName` in dependency files. This
//! crate interprets such rules and answers questions about them by running
//! the manager's `Alien-<ManagerType>` helper.
//!
//! # Modules
//!
//! - [`cli`] - Command-line entry point
//! - [`error`] - Error types and result aliases
//! - [`manager`] - Helper contract, process and mock implementations, dispatcher
//! - [`rule`] - Dependency rules, normalization and dependency-line parsing
//! - [`settings`] - Settings-file variable lookup
//! - [`shell`] - Bash command execution
//! - [`text`] - Case-insensitive map and text scanning
//! - [`ui`] - Labelled logging, prompts and progress
//! - [`version`] - Version/revision strings
//!
//! # Example
//!
//! ```
//! use alien::manager::{Dispatcher, MockManager};
//! use alien::rule::{Comparator, DependencyRule};
//!
//! let dispatcher = Dispatcher::new(MockManager::new().with_met("CPAN", "XML::Parser"));
//! let rule = DependencyRule::new("CPAN:XML::Parser")
//!     .with_constraint(Comparator::GreaterOrEqual, "2.36");
//! assert!(dispatcher.is_requirement_met(&rule).unwrap());
//! ```
//!
//! Real dispatch uses [`manager::HelperManager`]; see the integration tests.

pub mod cli;
pub mod error;
pub mod manager;
pub mod rule;
pub mod settings;
pub mod shell;
pub mod text;
pub mod ui;
pub mod version;

pub use error::{AlienError, Result};
