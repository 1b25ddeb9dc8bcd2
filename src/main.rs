//! Alien CLI entry point.

use std::process::ExitCode;

use alien::cli::{self, Cli};
use alien::manager::{Dispatcher, HelperManager};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `ALIEN_DEBUG` set to anything sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout belongs to the helper.
fn init_tracing() {
    let filter = if std::env::var_os("ALIEN_DEBUG").is_some() {
        EnvFilter::new("alien=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("alien=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::from_argv(std::env::args_os());

    tracing::debug!("Alien starting with args: {:?}", cli);

    let dispatcher = Dispatcher::new(HelperManager::from_env());
    let code = cli::run(&cli, &dispatcher, &mut std::io::stdout());
    ExitCode::from((code & 0xff) as u8)
}
