use std::collections::HashMap;

use crate::constant::*;
use crate::model::{Parameter, ParameterKind};
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The declared flags & options, indexed by both short and long name.
///
/// A name (short or long) is unique across the union of flags and options.
/// Each collection keeps declaration order.
#[derive(Debug)]
pub(crate) struct Registry {
    flags: Vec<Parameter>,
    options: Vec<Parameter>,
    shorts: HashMap<char, (ParameterKind, usize)>,
    longs: HashMap<String, (ParameterKind, usize)>,
}

impl Registry {
    /// An empty registry, without even the help flag.
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            flags: Vec::default(),
            options: Vec::default(),
            shorts: HashMap::default(),
            longs: HashMap::default(),
        }
    }

    pub(crate) fn new() -> Self {
        let mut registry = Self {
            flags: Vec::default(),
            options: Vec::default(),
            shorts: HashMap::default(),
            longs: HashMap::default(),
        };
        registry
            .declare(
                ParameterKind::Flag,
                Parameter::new(HELP_SHORT, HELP_NAME, false, HELP_MESSAGE),
            )
            .expect("internal error - the help flag must declare into an empty registry");
        registry
    }

    pub(crate) fn declare(
        &mut self,
        kind: ParameterKind,
        parameter: Parameter,
    ) -> Result<(), ConfigError> {
        let conflict = self
            .shorts
            .get(&parameter.short())
            .or_else(|| self.longs.get(parameter.long()));

        if let Some((existing, _)) = conflict {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Rejected declaration '{parameter}', conflicts with the {existing}.");
            }

            return Err(ConfigError::DeclarationConflict {
                short: parameter.short(),
                long: parameter.long().to_string(),
                existing: *existing,
            });
        }

        let collection = match kind {
            ParameterKind::Flag => &mut self.flags,
            ParameterKind::Option => &mut self.options,
        };
        let index = collection.len();
        self.shorts.insert(parameter.short(), (kind, index));
        self.longs.insert(parameter.long().to_string(), (kind, index));

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Declared '{parameter}' into the {kind}.");
        }

        collection.push(parameter);
        Ok(())
    }

    pub(crate) fn short(&self, short: char) -> Option<(ParameterKind, &Parameter)> {
        self.shorts
            .get(&short)
            .map(|(kind, index)| (*kind, self.resolve(*kind, *index)))
    }

    pub(crate) fn long(&self, long: &str) -> Option<(ParameterKind, &Parameter)> {
        self.longs
            .get(long)
            .map(|(kind, index)| (*kind, self.resolve(*kind, *index)))
    }

    pub(crate) fn flags(&self) -> &[Parameter] {
        &self.flags
    }

    pub(crate) fn options(&self) -> &[Parameter] {
        &self.options
    }

    fn resolve(&self, kind: ParameterKind, index: usize) -> &Parameter {
        match kind {
            ParameterKind::Flag => &self.flags[index],
            ParameterKind::Option => &self.options[index],
        }
    }
}
