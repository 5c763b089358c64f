use std::hash::{Hash, Hasher};

/// The class of a declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// A boolean parameter: present or absent, carries no value.
    Flag,
    /// A parameter which consumes exactly one following token as its value.
    Option,
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterKind::Flag => write!(f, "flags"),
            ParameterKind::Option => write!(f, "options"),
        }
    }
}

/// A declared flag or option.
///
/// The identity of a `Parameter` is its `(short, long)` pair.
/// Two parameters are equal iff both names match; `required` and `description` do not take part.
#[derive(Debug, Clone)]
pub struct Parameter {
    short: char,
    long: String,
    required: bool,
    description: String,
}

impl Parameter {
    pub(crate) fn new(
        short: char,
        long: impl Into<String>,
        required: bool,
        description: impl Into<String>,
    ) -> Self {
        Self {
            short,
            long: long.into(),
            required,
            description: description.into(),
        }
    }

    // Only meaningful for lookups, since equality ignores everything but the names.
    pub(crate) fn identity(short: char, long: &str) -> Self {
        Self::new(short, long, false, "")
    }

    /// The single character name, used as `-S`.
    pub fn short(&self) -> char {
        self.short
    }

    /// The multi-character name, used as `--NAME`.
    pub fn long(&self) -> &str {
        &self.long
    }

    /// Whether the parameter was declared as required.
    pub fn required(&self) -> bool {
        self.required
    }

    /// The human readable description shown in the help message.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.short == other.short && self.long == other.long
    }
}

impl Eq for Parameter {}

impl Hash for Parameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.short.hash(state);
        self.long.hash(state);
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-{}, --{}", self.short, self.long)
    }
}
