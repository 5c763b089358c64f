use thiserror::Error;

use crate::matcher::*;
use crate::model::ParameterKind;
use crate::registry::Registry;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A flag/option declaration which cannot be added to the registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The short or long name is already used by a declared flag/option.
    #[error("Config error: Unable to declare '-{short}, --{long}'. Already declared in {existing}.")]
    DeclarationConflict {
        /// The short name of the rejected declaration.
        short: char,
        /// The long name of the rejected declaration.
        long: String,
        /// The collection holding the conflicting name.
        existing: ParameterKind,
    },
}

/// A failed parse pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token could not be matched.
    #[error("Parse error: {0}")]
    Match(#[from] MatchError),

    /// A required flag/option was not provided (only when enforcing required parameters).
    #[error("Parse error: Required parameter '{0}' was not provided.")]
    MissingRequired(String),
}

/// The outcome of a successful parse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every token was matched.
    Complete,
    /// The help token was encountered; the help message was printed and the remaining tokens were skipped.
    Help,
}

/// Run a single parse pass of `tokens` into `matches`.
pub(crate) fn consume(
    registry: &Registry,
    matches: &mut Matches,
    tokens: &[String],
    enforce_required: bool,
) -> Result<Action, (usize, ParseError)> {
    let action = TokenMatcher::new(registry, matches)
        .consume(tokens)
        .map_err(|(offset, error)| (offset, ParseError::from(error)))?;

    if enforce_required && action == Action::Continue {
        let end = tokens.iter().map(|token| token.chars().count()).sum();
        check_required(registry, matches).map_err(|error| (end, error))?;
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Parse pass over {} token(s) finished with {action:?}.", tokens.len());
    }

    Ok(action)
}

fn check_required(registry: &Registry, matches: &Matches) -> Result<(), ParseError> {
    for flag in registry.flags() {
        if flag.required() && !matches.has_flag(flag) {
            return Err(ParseError::MissingRequired(flag.to_string()));
        }
    }

    for option in registry.options() {
        if option.required() && !matches.has_option(option) {
            return Err(ParseError::MissingRequired(option.to_string()));
        }
    }

    Ok(())
}
