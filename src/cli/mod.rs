//! Command-line entry point.
//!
//! `Alien <mode> <ManagerType>:<package> [extra...]` execs
//! `Alien-<ManagerType> <mode> <package> [extra...]` and exits with the
//! helper's exit code.

pub mod args;

pub use args::Cli;

use std::io::Write;

use tracing::debug;

use crate::error::AlienError;
use crate::manager::{Dispatcher, VersionManager};

/// Exit code used when the helper cannot be spawned.
pub const EXIT_HELPER_UNAVAILABLE: i32 = 127;

/// Usage text printed when too few arguments are given.
pub const USAGE: &str = "\
Usage: Alien --<mode> AlienType:alienpkg [...]

Valid options for <mode> are:
    --get-version
    --getinstallversion
    --greater-than
    --met|--within-range|--interval
    --have-manager
    --get-manager-rule
    --install

Valid options for AlienType are:
    CPAN
    LuaRocks
    PIP
    RubyGems

Example:
    Alien --install CPAN:XML::Parser
    Alien --install PIP:burn
";

/// Run the entry point and return the process exit code.
///
/// Usage and identifier errors go to `out`; no helper is spawned for them.
pub fn run<M, W>(cli: &Cli, dispatcher: &Dispatcher<M>, out: &mut W) -> i32
where
    M: VersionManager,
    W: Write,
{
    let (Some(mode), Some(program)) = (cli.mode(), cli.program()) else {
        let _ = writeln!(out, "{}", USAGE);
        return 1;
    };

    debug!("dispatching {} {} {:?}", mode, program, cli.extra());
    match dispatcher.run(mode, program, cli.extra()) {
        Ok(code) => code,
        Err(AlienError::MalformedIdentifier { .. }) => {
            let _ = writeln!(out, "Error: missing program name");
            1
        }
        Err(e @ AlienError::HelperUnavailable { .. }) => {
            eprintln!("Alien: {}", e);
            EXIT_HELPER_UNAVAILABLE
        }
        Err(e) => {
            eprintln!("Alien: {}", e);
            1
        }
    }
}
