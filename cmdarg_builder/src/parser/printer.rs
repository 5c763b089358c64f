use terminal_size::{terminal_size, Width};

use crate::model::Parameter;
use crate::parser::UserInterface;
use crate::registry::Registry;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const INDENT: usize = 2;
const DESCRIPTION_SEPARATOR: &str = " : ";

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_DESCRIPTION_WIDTH: usize = 17;

/// Renders the help message and the declared parameter listing.
#[derive(Debug)]
pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Detected terminal width: {terminal_width:?}.");
        }

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn print_help(
        &self,
        about: &str,
        registry: &Registry,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.help(about, registry) {
            user_interface.print(line);
        }
    }

    pub(crate) fn print_declared(
        &self,
        registry: &Registry,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        user_interface.print("Declared parameters:".to_string());

        for line in self.declared(registry) {
            user_interface.print(line);
        }
    }

    pub(crate) fn help(&self, about: &str, registry: &Registry) -> Vec<String> {
        let mut lines = vec![about.to_string(), String::default()];
        lines.extend(self.declared(registry));
        lines
    }

    fn declared(&self, registry: &Registry) -> Vec<String> {
        let mut lines = vec!["Options:".to_string()];

        for option in registry.options() {
            lines.extend(self.render(option));
        }

        lines.push("Flags:".to_string());

        for flag in registry.flags() {
            lines.extend(self.render(flag));
        }

        lines
    }

    fn render(&self, parameter: &Parameter) -> Vec<String> {
        let names = format!("{:INDENT$}{parameter}", "");

        if parameter.description().is_empty() {
            return vec![names];
        }

        let left = format!("{names}{DESCRIPTION_SEPARATOR}");
        let left_width = left.chars().count();
        let parts = match self.terminal_width {
            Some(total) => chunk(
                parameter.description(),
                std::cmp::max(total.saturating_sub(left_width), MINIMUM_DESCRIPTION_WIDTH),
            ),
            None => vec![parameter.description().to_string()],
        };

        parts
            .into_iter()
            .enumerate()
            .map(|(i, part)| {
                if i == 0 {
                    format!("{left}{part}")
                } else {
                    format!("{:left_width$}{part}", "")
                }
            })
            .collect()
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        let word_width = word.chars().count();

        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word_width < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

/// The input tokens, along with a marker for where in them an error occurred.
///
/// ```console
/// -f --unknown
///    ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    pub(crate) fn new(offset: usize, tokens: &[String]) -> Self {
        Self {
            offset,
            tokens: tokens.to_vec(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens_length = 0;
        let mut projection = String::default();
        let mut projection_offset = 0;

        for (i, token) in self.tokens.iter().enumerate() {
            tokens_length += token.chars().count();
            projection.push_str(token);

            if i + 1 < self.tokens.len() {
                projection.push(' ');

                if tokens_length <= self.offset {
                    projection_offset += 1;
                }
            }
        }

        write!(
            f,
            "{projection}\n{:width$}^",
            "",
            width = std::cmp::min(self.offset, tokens_length.saturating_sub(1)) + projection_offset
        )
    }
}
