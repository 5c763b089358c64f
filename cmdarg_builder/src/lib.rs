//! Declaration registry & parse engine for `cmdarg`.
//! See the `cmdarg` crate root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
mod registry;

pub use api::*;
pub use matcher::MatchError;
pub use model::*;
pub use parser::{
    ConfigError, ConsoleInterface, ErrorContext, ParseError, ParseOutcome, UserInterface,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
