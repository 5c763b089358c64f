use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::constant::*;
use crate::model::Parameter;

/// The syntactic class of a single command line token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// Exactly `-h` or `--help`.
    Help,
    /// `--NAME`, with the prefix stripped.
    Long(&'t str),
    /// `-abc`, with the prefix stripped.
    Bundle(&'t str),
    /// `-a`.
    Short(char),
    /// Anything else, including a lone `-` or `--`.
    Bare,
}

impl<'t> Token<'t> {
    pub(crate) fn classify(token: &'t str) -> Self {
        if token.strip_prefix("--") == Some(HELP_NAME)
            || token.strip_prefix('-').and_then(single) == Some(HELP_SHORT)
        {
            Token::Help
        } else if let Some(name) = token.strip_prefix("--") {
            if name.is_empty() {
                Token::Bare
            } else {
                Token::Long(name)
            }
        } else if let Some(shorts) = token.strip_prefix('-') {
            let mut characters = shorts.chars();
            match (characters.next(), characters.next()) {
                (None, _) => Token::Bare,
                (Some(short), None) => Token::Short(short),
                (Some(_), Some(_)) => Token::Bundle(shorts),
            }
        } else {
            Token::Bare
        }
    }
}

fn single(value: &str) -> Option<char> {
    let mut characters = value.chars();
    match (characters.next(), characters.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// The flags & options matched during a single parse pass.
/// Each parameter may be matched at most once; the first match is never overwritten.
#[derive(Debug, Default)]
pub(crate) struct Matches {
    flags: HashSet<Parameter>,
    options: HashMap<Parameter, String>,
}

impl Matches {
    /// Returns `false` (leaving the matches unchanged) if the flag was already matched.
    pub(crate) fn match_flag(&mut self, parameter: &Parameter) -> bool {
        self.flags.insert(parameter.clone())
    }

    /// Returns `false` (leaving the matches unchanged) if the option was already matched.
    pub(crate) fn match_option(&mut self, parameter: &Parameter, value: &str) -> bool {
        match self.options.entry(parameter.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(value.to_string());
                true
            }
        }
    }

    pub(crate) fn has_flag(&self, parameter: &Parameter) -> bool {
        self.flags.contains(parameter)
    }

    pub(crate) fn has_option(&self, parameter: &Parameter) -> bool {
        self.options.contains_key(parameter)
    }

    pub(crate) fn option_value(&self, parameter: &Parameter) -> Option<&str> {
        self.options.get(parameter).map(String::as_str)
    }
}
