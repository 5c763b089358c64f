use cmdarg::{CommandLineParser, ParseOutcome};

fn main() {
    let mut parser = CommandLineParser::new("cmdarg example program: greets somebody.");
    parser
        .declare_flag('l', "loud", false, "Shout the greeting.")
        .unwrap();
    parser
        .declare_flag('q', "question", false, "End with a question mark.")
        .unwrap();
    parser
        .declare_option('n', "name", false, "Who to greet.")
        .unwrap();

    match parser.parse_args() {
        Ok(ParseOutcome::Complete) => {}
        Ok(ParseOutcome::Help) => std::process::exit(0),
        Err(_) => std::process::exit(1),
    };

    let name = parser.option_value('n', "name").unwrap_or("world");
    let mut greeting = format!("Hello, {name}");

    if parser.has_flag('l', "loud") {
        greeting = greeting.to_uppercase();
    }

    if parser.has_flag('q', "question") {
        greeting.push('?');
    } else {
        greeting.push('!');
    }

    println!("{greeting}");
}
