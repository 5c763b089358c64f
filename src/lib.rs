//! `cmdarg` is a declare-then-parse command line parser for Rust.
//!
//! A host program declares named *flags* (present or absent) and *options* (which take a value), each with a short single-character name and a long multi-character name.
//! The command line tokens are then parsed against these declarations, producing a queryable result.
//!
//! `cmdarg` deliberately stays small:
//! * No sub-commands, no positional arguments, no repeated options.
//! * Option values are kept as the raw text provided; converting them is left to the program.
//! * Errors are reported, never fatal: the program decides whether to exit.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo.rs")]
//! ```
//!
//! ```console
//! $ demo -h
//! cmdarg example program: greets somebody.
//!
//! Options:
//!   -n, --name : Who to greet.
//! Flags:
//!   -h, --help : Display this help message
//!   -l, --loud : Shout the greeting.
//!   -q, --question : End with a question mark.
//!
//! $ demo -lq --name you
//! HELLO, YOU?
//!
//! $ demo -ln
//! Parse error: Cannot bundle option '-n' in '-ln'. Each option needs a separate usage.
//! -ln
//!   ^
//! ```
//!
//! # Declaration
//! Declare parameters via [`CommandLineParser::declare_flag`] and [`CommandLineParser::declare_option`].
//! Both the short and long name must be unique across all the flags and options, including the built-in `-h, --help` flag.
//! A conflicting declaration is rejected with [`ConfigError`], and leaves the declared parameters unchanged.
//!
//! Each declaration carries a `required` marker.
//! By default this is documentation only; enable [`CommandLineParser::enforce_required`] to fail the parse when a required parameter is missing.
//!
//! # Cli Semantics
//! [`CommandLineParser::parse_args`] classifies each token as follows.
//!
//! * `-h` or `--help`: print the help message and stop, returning [`ParseOutcome::Help`].
//! * `--NAME`: the long name of a flag, or of an option which takes the next token as its value.
//! * `-abc`: a bundle of short flags, equivalent to `-a -b -c`.
//! Options cannot be bundled, since there is nowhere to put their value.
//! * `-a`: the short name of a flag, or of an option which takes the next token as its value.
//! * Anything else (including a lone `-` or `--`) is an unknown argument.
//!
//! An option's value must be present, and must not start with `-`.
//! Each flag or option may be used at most once per parse.
//!
//! Parsing stops at the first error (see [`MatchError`]).
//! Flags & options matched before the error stay matched.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events for declarations and token matching.
pub use cmdarg_builder::*;
