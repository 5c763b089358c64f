pub(crate) const HELP_SHORT: char = 'h';
pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_MESSAGE: &str = "Display this help message";
