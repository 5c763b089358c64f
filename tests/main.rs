use std::cell::RefCell;
use std::rc::Rc;

use cmdarg::{
    CommandLineParser, ErrorContext, MatchError, ParseError, ParseOutcome, UserInterface,
};
use rstest::rstest;

#[derive(Clone, Default)]
struct Recorder {
    messages: Rc<RefCell<Vec<String>>>,
    errors: Rc<RefCell<Vec<String>>>,
    error_contexts: Rc<RefCell<Vec<String>>>,
}

impl UserInterface for Recorder {
    fn print(&self, message: String) {
        self.messages.borrow_mut().push(message);
    }

    fn print_error(&self, error: &dyn std::error::Error) {
        self.errors.borrow_mut().push(error.to_string());
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        self.error_contexts
            .borrow_mut()
            .push(error_context.to_string());
    }
}

fn parser(command_line: &str) -> (CommandLineParser, Recorder) {
    let recorder = Recorder::default();
    let mut parser = CommandLineParser::from_args(
        "CmdArgParser Example Program",
        command_line.split_whitespace(),
    )
    .with_interface(Box::new(recorder.clone()));
    parser.declare_flag('f', "flag1", false, "").unwrap();
    parser.declare_option('o', "option1", false, "").unwrap();
    parser.declare_flag('g', "flag2", false, "").unwrap();
    parser.declare_option('p', "option2", false, "").unwrap();
    parser.declare_flag('i', "flag3", false, "").unwrap();
    (parser, recorder)
}

#[test]
fn declaration_duplication() {
    let recorder = Recorder::default();
    let mut parser = CommandLineParser::from_args("", vec!["CmdArgParser", "-h"])
        .with_interface(Box::new(recorder.clone()));

    assert!(parser.declare_flag('h', "test1", false, "").is_err());
    assert!(parser.declare_flag('t', "help", false, "").is_err());
    assert!(parser.declare_option('h', "test3", false, "").is_err());
    assert!(parser.declare_option('t', "help", false, "").is_err());

    assert_eq!(recorder.errors.borrow().len(), 4);
    assert_eq!(parser.declared_flags().len(), 1);
    assert!(parser.declared_options().is_empty());
}

#[test]
fn round_trip() {
    let (mut parser, recorder) = parser("program -f -o optionOne --flag2 --option2 optionTwo");

    assert_eq!(parser.parse_args(), Ok(ParseOutcome::Complete));

    assert!(parser.has_flag('f', "flag1"));
    assert!(parser.has_flag('g', "flag2"));
    assert!(!parser.has_flag('i', "flag3"));
    assert_eq!(parser.option_value('o', "option1"), Some("optionOne"));
    assert_eq!(parser.option_value('p', "option2"), Some("optionTwo"));
    assert!(recorder.errors.borrow().is_empty());
}

#[rstest]
#[case("program -fgi")]
#[case("program -gif")]
#[case("program -fg --flag3")]
fn bundling(#[case] command_line: &str) {
    let (mut parser, _) = parser(command_line);

    assert_eq!(parser.parse_args(), Ok(ParseOutcome::Complete));

    assert!(parser.has_flag('f', "flag1"));
    assert!(parser.has_flag('g', "flag2"));
    assert!(parser.has_flag('i', "flag3"));
}

#[rstest]
#[case("program -fo")]
#[case("program -fgp value")]
fn bundling_option(#[case] command_line: &str) {
    let (mut parser, _) = parser(command_line);

    assert!(matches!(
        parser.parse_args(),
        Err(ParseError::Match(MatchError::InvalidBundle { .. }))
    ));
}

#[rstest]
#[case("program -o")]
#[case("program --option1")]
#[case("program -o -f")]
#[case("program --option1 --flag1")]
#[case("program -o -5")]
fn missing_value(#[case] command_line: &str) {
    let (mut parser, _) = parser(command_line);

    assert!(matches!(
        parser.parse_args(),
        Err(ParseError::Match(MatchError::MissingValue(_)))
    ));
    assert!(!parser.has_option('o', "option1"));
}

#[rstest]
#[case("program -f -f")]
#[case("program -f --flag1")]
#[case("program -ff")]
#[case("program -o x -o y")]
#[case("program -o x --option1 y")]
fn at_most_once(#[case] command_line: &str) {
    let (mut parser, _) = parser(command_line);

    assert!(matches!(
        parser.parse_args(),
        Err(ParseError::Match(MatchError::DuplicateUse(_)))
    ));
}

#[rstest]
#[case("program word")]
#[case("program -")]
#[case("program --")]
#[case("program -f word")]
fn unknown_token(#[case] command_line: &str) {
    let (mut parser, recorder) = parser(command_line);

    assert!(matches!(
        parser.parse_args(),
        Err(ParseError::Match(MatchError::MalformedToken(_)))
    ));

    let errors = recorder.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Parse error: Unknown argument"));
    assert_eq!(recorder.error_contexts.borrow().len(), 1);
}

#[test]
fn unknown_token_undeclared() {
    let recorder = Recorder::default();
    let mut parser = CommandLineParser::from_args("", vec!["program", "--"])
        .with_interface(Box::new(recorder.clone()));

    assert_eq!(
        parser.parse_args(),
        Err(ParseError::Match(MatchError::MalformedToken(
            "--".to_string()
        )))
    );
}

#[test]
fn undeclared_context() {
    let (mut parser, recorder) = parser("program -f --nope");

    assert_eq!(
        parser.parse_args(),
        Err(ParseError::Match(MatchError::UndeclaredParameter(
            "--nope".to_string()
        )))
    );
    assert_eq!(
        recorder.error_contexts.borrow().as_slice(),
        &["-f --nope\n   ^".to_string()]
    );
}

#[test]
fn help_short_circuit() {
    let (mut parser, recorder) = parser("program -f --help bare -f");

    assert_eq!(parser.parse_args(), Ok(ParseOutcome::Help));

    let messages = recorder.messages.borrow();
    assert_eq!(messages[0], "CmdArgParser Example Program");
    assert_eq!(messages[1], "");
    assert_eq!(messages[2], "Options:");
    assert!(messages.contains(&"Flags:".to_string()));
    assert!(messages.contains(&"  -h, --help : Display this help message".to_string()));
    assert!(recorder.errors.borrow().is_empty());
}

#[test]
fn required_unenforced() {
    let recorder = Recorder::default();
    let mut parser = CommandLineParser::from_args("", vec!["program"])
        .with_interface(Box::new(recorder.clone()));
    parser.declare_flag('r', "required", true, "").unwrap();

    assert_eq!(parser.parse_args(), Ok(ParseOutcome::Complete));
    assert!(parser.declared_flags()[1].required());
}

#[test]
fn required_enforced() {
    let recorder = Recorder::default();
    let mut parser = CommandLineParser::from_args("", vec!["program", "-r"])
        .with_interface(Box::new(recorder.clone()))
        .enforce_required(true);
    parser.declare_flag('r', "required", true, "").unwrap();
    parser.declare_option('o', "output", true, "").unwrap();

    assert_eq!(
        parser.parse_args(),
        Err(ParseError::MissingRequired("-o, --output".to_string()))
    );
    assert!(parser.has_flag('r', "required"));
}
