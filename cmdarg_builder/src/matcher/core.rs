use thiserror::Error;

use crate::matcher::model::*;
use crate::model::{Parameter, ParameterKind};
use crate::registry::Registry;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A token which cannot be matched against the declared flags & options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The token names a short/long name that was never declared.
    #[error("Undeclared parameter '{0}'.")]
    UndeclaredParameter(String),

    /// An option's short name appears inside a bundle (ex: `-fo`).
    #[error("Cannot bundle option '-{short}' in '{token}'. Each option needs a separate usage.")]
    InvalidBundle {
        /// The option's short name.
        short: char,
        /// The bundled token as provided.
        token: String,
    },

    /// An option is not followed by a value (the next token is missing or starts with `-`).
    #[error("Option '{0}' requires a value.")]
    MissingValue(String),

    /// A flag/option was already matched earlier in the parse pass.
    #[error("Parameter '{0}' cannot be used more than once.")]
    DuplicateUse(String),

    /// A bare word, or a lone `-` / `--`.
    #[error("Unknown argument '{0}'.")]
    MalformedToken(String),
}

/// What to do after all the tokens were consumed.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Action {
    Continue,
    PrintHelp,
}

/// Matches tokens against the registry, one parse pass at a time.
///
/// Every successful match is committed to `matches` immediately.
/// Failing part way through leaves the earlier matches in place.
pub(crate) struct TokenMatcher<'a> {
    registry: &'a Registry,
    matches: &'a mut Matches,
    fed: usize,
}

impl<'a> TokenMatcher<'a> {
    pub(crate) fn new(registry: &'a Registry, matches: &'a mut Matches) -> Self {
        Self {
            registry,
            matches,
            fed: 0,
        }
    }

    /// Consume all the tokens, halting on the first error or help token.
    /// Errors are paired with their offset into the (space-less) concatenation of the tokens.
    pub(crate) fn consume(mut self, tokens: &[String]) -> Result<Action, (usize, MatchError)> {
        let mut index = 0;

        while index < tokens.len() {
            let token = tokens[index].as_str();
            let next = tokens.get(index + 1).map(String::as_str);
            let classified = Token::classify(token);

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' classified as {classified:?}.");
            }

            let consumed = match classified {
                Token::Help => return Ok(Action::PrintHelp),
                Token::Long(name) => self.match_long(name, next)?,
                Token::Bundle(shorts) => {
                    self.match_bundle(token, shorts)?;
                    1
                }
                Token::Short(short) => self.match_short(short, next)?,
                Token::Bare => {
                    return Err((self.fed, MatchError::MalformedToken(token.to_string())));
                }
            };

            for token in &tokens[index..index + consumed] {
                self.fed += token.chars().count();
            }

            index += consumed;
        }

        Ok(Action::Continue)
    }

    fn match_long(
        &mut self,
        name: &str,
        next: Option<&str>,
    ) -> Result<usize, (usize, MatchError)> {
        let registry = self.registry;
        let specifier = format!("--{name}");

        match registry.long(name) {
            Some((ParameterKind::Option, parameter)) => {
                self.match_option(parameter, specifier, next)
            }
            Some((ParameterKind::Flag, parameter)) => {
                self.match_flag(parameter, specifier, self.fed)?;
                Ok(1)
            }
            None => Err((self.fed, MatchError::UndeclaredParameter(specifier))),
        }
    }

    fn match_short(
        &mut self,
        short: char,
        next: Option<&str>,
    ) -> Result<usize, (usize, MatchError)> {
        let registry = self.registry;
        let specifier = format!("-{short}");

        match registry.short(short) {
            Some((ParameterKind::Option, parameter)) => {
                self.match_option(parameter, specifier, next)
            }
            Some((ParameterKind::Flag, parameter)) => {
                self.match_flag(parameter, specifier, self.fed)?;
                Ok(1)
            }
            None => Err((self.fed, MatchError::UndeclaredParameter(specifier))),
        }
    }

    fn match_bundle(&mut self, token: &str, shorts: &str) -> Result<(), (usize, MatchError)> {
        let registry = self.registry;

        for (index, short) in shorts.chars().enumerate() {
            // The 1 comes from the short specifier '-'.
            let offset = self.fed + 1 + index;

            match registry.short(short) {
                Some((ParameterKind::Flag, parameter)) => {
                    self.match_flag(parameter, format!("-{short}"), offset)?;
                }
                Some((ParameterKind::Option, _)) => {
                    return Err((
                        offset,
                        MatchError::InvalidBundle {
                            short,
                            token: token.to_string(),
                        },
                    ));
                }
                None => {
                    return Err((offset, MatchError::UndeclaredParameter(format!("-{short}"))));
                }
            }
        }

        Ok(())
    }

    fn match_flag(
        &mut self,
        parameter: &Parameter,
        specifier: String,
        offset: usize,
    ) -> Result<(), (usize, MatchError)> {
        if self.matches.match_flag(parameter) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched flag '{parameter}' via '{specifier}'.");
            }

            Ok(())
        } else {
            Err((offset, MatchError::DuplicateUse(specifier)))
        }
    }

    fn match_option(
        &mut self,
        parameter: &Parameter,
        specifier: String,
        next: Option<&str>,
    ) -> Result<usize, (usize, MatchError)> {
        let value = match next {
            Some(value) if !value.starts_with('-') => value,
            _ => return Err((self.fed, MatchError::MissingValue(specifier))),
        };

        if self.matches.match_option(parameter, value) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched option '{parameter}' via '{specifier}' to '{value}'.");
            }

            Ok(2)
        } else {
            Err((self.fed, MatchError::DuplicateUse(specifier)))
        }
    }
}
