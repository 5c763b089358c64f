use crate::parser::ErrorContext;

/// The sink for everything the parser reports: help messages, declaration listings and errors.
///
/// The default [`ConsoleInterface`] writes to stdout/stderr.
/// Provide another implementation via [`CommandLineParser::with_interface`](crate::CommandLineParser::with_interface).
pub trait UserInterface {
    /// Display a line of regular output (ex: the help message).
    fn print(&self, message: String);

    /// Display an error.
    fn print_error(&self, error: &dyn std::error::Error);

    /// Display where in the input tokens an error occurred.
    fn print_error_context(&self, error_context: ErrorContext);
}

/// Prints output to stdout, and errors to stderr.
#[derive(Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &dyn std::error::Error) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}
