use std::env;

use crate::matcher::{Action, Matches};
use crate::model::{Parameter, ParameterKind};
use crate::parser::{
    consume, ConfigError, ConsoleInterface, ErrorContext, ParseError, ParseOutcome, Printer,
    UserInterface,
};
use crate::registry::Registry;

/// The command line parser.
///
/// Declare flags & options, then parse the command line tokens against them.
/// The `-h, --help` flag is always declared.
///
/// ### Example
/// ```
/// # use cmdarg_builder as cmdarg;
/// use cmdarg::{CommandLineParser, ParseOutcome};
///
/// let mut parser = CommandLineParser::from_args("My program.", vec!["program", "-v", "--name", "abc"]);
/// parser.declare_flag('v', "verbose", false, "Verbose output.").unwrap();
/// parser.declare_option('n', "name", false, "The name to use.").unwrap();
///
/// assert_eq!(parser.parse_args().unwrap(), ParseOutcome::Complete);
/// assert!(parser.has_flag('v', "verbose"));
/// assert_eq!(parser.option_value('n', "name"), Some("abc"));
/// ```
pub struct CommandLineParser {
    about: String,
    tokens: Vec<String>,
    enforce_required: bool,
    registry: Registry,
    matches: Matches,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for CommandLineParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("about", &self.about)
            .field("tokens", &self.tokens)
            .field("enforce_required", &self.enforce_required)
            .finish()
    }
}

impl CommandLineParser {
    /// Create a command line parser over the Cli [`env::args`].
    pub fn new(about: impl Into<String>) -> Self {
        Self::from_args(about, env::args())
    }

    /// Create a command line parser over the provided program arguments.
    ///
    /// The first argument is the invoked program name, and is always skipped.
    pub fn from_args<I, S>(about: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            about: about.into(),
            tokens: args.into_iter().skip(1).map(Into::into).collect(),
            enforce_required: false,
            registry: Registry::new(),
            matches: Matches::default(),
            printer: Printer::terminal(),
            user_interface: Box::new(ConsoleInterface::default()),
        }
    }

    /// Direct the help message, declaration listings and errors to the `user_interface`.
    pub fn with_interface(mut self, user_interface: Box<dyn UserInterface>) -> Self {
        self.user_interface = user_interface;
        self
    }

    /// Fail the parse when a flag/option declared as `required` is not provided.
    ///
    /// Off by default: the `required` marker is otherwise documentation only.
    ///
    /// ### Example
    /// ```
    /// # use cmdarg_builder as cmdarg;
    /// use cmdarg::{CommandLineParser, ParseError};
    ///
    /// let mut parser = CommandLineParser::from_args("My program.", vec!["program"])
    ///     .enforce_required(true);
    /// parser.declare_option('o', "output", true, "").unwrap();
    ///
    /// assert_eq!(
    ///     parser.parse_args().unwrap_err(),
    ///     ParseError::MissingRequired("-o, --output".to_string()),
    /// );
    /// ```
    pub fn enforce_required(mut self, enabled: bool) -> Self {
        self.enforce_required = enabled;
        self
    }

    /// Declare a flag: a parameter which is either present or absent.
    ///
    /// Fails if either `short` or `long` is already declared (as a flag or as an option).
    /// On failure the declared parameters are left unchanged, and are listed to the user interface.
    pub fn declare_flag(
        &mut self,
        short: char,
        long: impl Into<String>,
        required: bool,
        description: impl Into<String>,
    ) -> Result<(), ConfigError> {
        self.declare(
            ParameterKind::Flag,
            Parameter::new(short, long, required, description),
        )
    }

    /// Declare an option: a parameter which takes the following token as its value.
    ///
    /// Fails if either `short` or `long` is already declared (as a flag or as an option).
    /// On failure the declared parameters are left unchanged, and are listed to the user interface.
    ///
    /// ### Example
    /// ```
    /// # use cmdarg_builder as cmdarg;
    /// use cmdarg::CommandLineParser;
    ///
    /// let mut parser = CommandLineParser::from_args("My program.", vec!["program"]);
    ///
    /// assert!(parser.declare_option('o', "output", false, "").is_ok());
    /// assert!(parser.declare_flag('o', "other", false, "").is_err());
    /// assert!(parser.declare_option('h', "host", false, "").is_err());
    /// ```
    pub fn declare_option(
        &mut self,
        short: char,
        long: impl Into<String>,
        required: bool,
        description: impl Into<String>,
    ) -> Result<(), ConfigError> {
        self.declare(
            ParameterKind::Option,
            Parameter::new(short, long, required, description),
        )
    }

    fn declare(&mut self, kind: ParameterKind, parameter: Parameter) -> Result<(), ConfigError> {
        self.registry.declare(kind, parameter).map_err(|error| {
            self.user_interface.print_error(&error);
            self.printer
                .print_declared(&self.registry, &*self.user_interface);
            error
        })
    }

    /// Run a parse pass over the tokens.
    ///
    /// Each pass starts without any matches.
    /// The pass halts at the first error, printing it (with its location) to the user interface.
    /// Matches made before the error remain queryable.
    ///
    /// If the help flag (`-h` or `--help`) is encountered, the help message is printed and [`ParseOutcome::Help`] is returned.
    /// The remaining tokens are not processed.
    ///
    /// This never exits the process; that decision is left to the caller.
    pub fn parse_args(&mut self) -> Result<ParseOutcome, ParseError> {
        self.matches = Matches::default();

        match consume(
            &self.registry,
            &mut self.matches,
            &self.tokens,
            self.enforce_required,
        ) {
            Ok(Action::Continue) => Ok(ParseOutcome::Complete),
            Ok(Action::PrintHelp) => {
                self.printer
                    .print_help(&self.about, &self.registry, &*self.user_interface);
                Ok(ParseOutcome::Help)
            }
            Err((offset, parse_error)) => {
                self.user_interface.print_error(&parse_error);
                self.user_interface
                    .print_error_context(ErrorContext::new(offset, &self.tokens));
                Err(parse_error)
            }
        }
    }

    /// Whether the flag `-short, --long` was matched in the last parse pass.
    pub fn has_flag(&self, short: char, long: &str) -> bool {
        self.matches.has_flag(&Parameter::identity(short, long))
    }

    /// Whether the option `-short, --long` was matched in the last parse pass.
    pub fn has_option(&self, short: char, long: &str) -> bool {
        self.matches.has_option(&Parameter::identity(short, long))
    }

    /// The value of the option `-short, --long`, exactly as provided in the last parse pass.
    pub fn option_value(&self, short: char, long: &str) -> Option<&str> {
        self.matches.option_value(&Parameter::identity(short, long))
    }

    /// The declared flags, in declaration order (starting with `-h, --help`).
    pub fn declared_flags(&self) -> &[Parameter] {
        self.registry.flags()
    }

    /// The declared options, in declaration order.
    pub fn declared_options(&self) -> &[Parameter] {
        self.registry.options()
    }

    /// The help message, as displayed for `-h` or `--help`.
    pub fn help(&self) -> String {
        self.printer.help(&self.about, &self.registry).join("\n")
    }
}
