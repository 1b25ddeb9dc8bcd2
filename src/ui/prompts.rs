//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::Write;

use crate::error::{AlienError, Result};

use super::log::Logger;

/// Convert dialoguer errors to AlienError.
fn map_dialoguer_err(e: dialoguer::Error) -> AlienError {
    AlienError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Whether a reply to a `[Y/n]` question means yes.
///
/// Only `n` declines; anything else, including an empty reply, accepts.
pub fn interpret_answer(reply: &str) -> bool {
    !reply.trim().eq_ignore_ascii_case("n")
}

/// Ask a free-form question until a non-empty answer is given.
///
/// The question is prefixed with the logger's label; the answer is
/// returned in lower case.
pub fn ask_option<W: Write>(logger: &Logger<W>, message: &str, term: &Term) -> Result<String> {
    let question = if logger.label().is_empty() {
        message.to_string()
    } else {
        format!("{}: {}", logger.label(), message)
    };

    let reply: String = Input::<String>::with_theme(&prompt_theme())
        .with_prompt(logger.theme().terse.apply_to(question).to_string())
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(reply.trim().to_lowercase())
}

/// Ask a yes/no question, defaulting to yes.
pub fn ask<W: Write>(logger: &Logger<W>, message: &str, term: &Term) -> Result<bool> {
    let reply = ask_option(logger, &format!("{} [Y/n]", message), term)?;
    Ok(interpret_answer(&reply))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_n_declines() {
        assert!(!interpret_answer("n"));
        assert!(!interpret_answer("N"));
        assert!(!interpret_answer(" n \n"));
    }

    #[test]
    fn everything_else_accepts() {
        assert!(interpret_answer("y"));
        assert!(interpret_answer(""));
        assert!(interpret_answer("no"));
        assert!(interpret_answer("yes"));
    }
}
