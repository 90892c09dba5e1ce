//! Integration tests for the front-end.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and parser, checking the tree and the diagnostics together.

use std::rc::Rc;

use coem::{
    ast::{ast::StmtType, printer::print_program},
    errors::sink::{DiagnosticSink, Diagnostics},
    errors::errors::Error,
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::{parse, parse_source},
};

const PROGRAM: &str = r#"// greets everybody it is given
to greet — name, polite —:
    if — polite — say "good day";
    else know "hey";
    & name;
.

let visitor be "Ada";
let done be false;

while — done —:
    greet — visitor, true —;
    done be not done or visitor is nothing;
.
"#;

#[test]
fn test_parse_program() {
    let output = parse_source(PROGRAM, "greet.coem").unwrap();

    assert!(!output.has_errors(), "{:?}", output.diagnostics.reported);

    let kinds: Vec<StmtType> = output
        .statements
        .iter()
        .map(|stmt| stmt.get_stmt_type())
        .collect();
    assert_eq!(
        kinds,
        vec![
            StmtType::FnDeclStmt,
            StmtType::VarDeclStmt,
            StmtType::VarDeclStmt,
            StmtType::WhileStmt,
        ]
    );

    assert_eq!(
        print_program(&output.statements),
        [
            "(to greet (name polite) (if polite (print \"good day\") (print \"hey\")) (return name))",
            "(var visitor \"Ada\")",
            "(var done false)",
            "(while done (block (expr (call greet visitor true)) (expr (be done (or (not done) (is visitor nothing))))))",
        ]
        .join("\n")
    );
}

#[test]
fn test_lex_error_is_returned() {
    let error = parse_source("let x be 5 % 2;", "bad.coem").unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_every_failed_declaration_keeps_its_slot() {
    let source = "let be;\nsay \"fine\";\nto — —: .\nsay x\n& done;";
    let output = parse_source(source, "broken.coem").unwrap();

    // `say x` runs into `&`, which recovery then skips to the next `;`
    assert_eq!(output.diagnostics.len(), 3);
    assert_eq!(
        print_program(&output.statements),
        "(error \"be\")\n(print \"fine\")\n(error \"—\")\n(error \"&\")"
    );
}

struct Recording(Vec<(usize, String)>);

impl DiagnosticSink for Recording {
    fn report(&mut self, token: &Token, error: &Error) {
        self.0.push((token.line, error.message()));
    }
}

#[test]
fn test_custom_sink_receives_token_and_message() {
    let tokens = tokenize("let x be true;\nsay x\n".to_string(), None).unwrap();
    let mut sink = Recording(vec![]);

    let statements = parse(tokens, Rc::new(String::from("shell")), &mut sink);

    assert_eq!(statements.len(), 2);
    assert_eq!(sink.0, vec![(3, String::from("Expect ';' after value."))]);
}

#[test]
fn test_fresh_parsers_agree() {
    let tokens = tokenize(PROGRAM.to_string(), None).unwrap();

    let mut first = Diagnostics::new();
    let mut second = Diagnostics::new();

    assert_eq!(
        parse(tokens.clone(), Rc::new(String::from("shell")), &mut first),
        parse(tokens, Rc::new(String::from("shell")), &mut second)
    );
    assert!(!first.has_errors() && !second.has_errors());
}
