//! CLI argument definitions.
//!
//! The entry point takes no options of its own. Everything after the
//! program name is passed through, so modes such as `--met` or `--install`
//! reach the helper untouched. A leading `--` is a mode like any other.

use std::ffi::OsString;

use clap::Parser;

/// Alien - Bridge to ecosystem-specific package managers.
#[derive(Debug, Parser)]
#[command(name = "Alien")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// `<mode> <ManagerType>:<package> [extra...]`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse `argv`, keeping a leading `--` that clap would otherwise
    /// swallow as its end-of-options marker.
    pub fn try_from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        if argv.get(1).is_some_and(|arg| arg == "--") {
            return Ok(Self {
                args: argv[1..]
                    .iter()
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect(),
            });
        }
        Self::try_parse_from(argv)
    }

    /// Like [`try_from_argv`](Self::try_from_argv), exiting on error.
    pub fn from_argv<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_from_argv(argv).unwrap_or_else(|e| e.exit())
    }

    /// The helper mode, e.g. `--install`.
    pub fn mode(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// The `ManagerType:package` identifier.
    pub fn program(&self) -> Option<&str> {
        self.args.get(1).map(String::as_str)
    }

    /// Arguments after the identifier, forwarded verbatim.
    pub fn extra(&self) -> &[String] {
        self.args.get(2..).unwrap_or(&[])
    }
}
