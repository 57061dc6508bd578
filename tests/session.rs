use std::path::Path;

use pretty_assertions::assert_eq;
use seqfn::{
    error::{DefinitionError, Error, ErrorKind},
    interpreter::{
        console::BufferConsole,
        evaluator::core::EvalConfig,
        session::{Outcome, Session},
        value::core::Value,
    },
};

fn session() -> Session<BufferConsole> {
    Session::new(BufferConsole::default())
}

fn defined(name: &str, is_new: bool) -> Outcome {
    Outcome::Defined { name: name.to_string(),
                       is_new }
}

#[test]
fn blank_lines_and_comments_are_skipped() {
    let mut session = session();

    assert_eq!(session.feed_line("").unwrap(), Outcome::Skipped);
    assert_eq!(session.feed_line("   \t").unwrap(), Outcome::Skipped);
    assert_eq!(session.feed_line("  // f -> 1").unwrap(), Outcome::Skipped);
    assert!(session.registry().is_empty());
}

#[test]
fn exit_is_case_insensitive() {
    let mut session = session();

    assert_eq!(session.feed_line("exit").unwrap(), Outcome::Exit);
    assert_eq!(session.feed_line("  EXIT ").unwrap(), Outcome::Exit);
    assert!(session.feed_line("exits").is_err());
}

#[test]
fn definitions_report_new_and_redefined() {
    let mut session = session();

    assert_eq!(session.feed_line("f -> #0 + #1").unwrap(), defined("f", true));
    assert_eq!(session.registry().lookup("f").unwrap().arity(), 2);

    assert_eq!(session.feed_line("f->#0").unwrap(), defined("f", false));
    assert_eq!(session.registry().lookup("f").unwrap().arity(), 1);
    assert_eq!(session.feed_line("f(4)").unwrap(), Outcome::Value(Value::Scalar(4.0)));
}

#[test]
fn arity_counts_distinct_parameters() {
    let mut session = session();

    session.feed_line("sq -> #0 * #0").unwrap();
    session.feed_line("k -> 42").unwrap();
    session.feed_line("third -> #2").unwrap();

    let registry = session.registry();
    assert_eq!(registry.lookup("sq").unwrap().arity(), 1);
    assert_eq!(registry.lookup("k").unwrap().arity(), 0);
    assert_eq!(registry.lookup("third").unwrap().arity(), 1);

    let err = session.feed_line("third(1)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
}

#[test]
fn multi_line_definitions_wait_for_balanced_brackets() {
    let mut session = session();

    assert_eq!(session.feed_line("len -> if(#0,").unwrap(), Outcome::Pending);
    assert!(session.is_pending());
    assert_eq!(session.feed_line("  len(tail(#0)) + 1,").unwrap(), Outcome::Pending);
    assert_eq!(session.feed_line("  0)").unwrap(), defined("len", true));
    assert!(!session.is_pending());

    assert_eq!(session.feed_line("len([4 5 6])").unwrap(), Outcome::Value(Value::Scalar(3.0)));
}

#[test]
fn an_empty_body_continues_on_the_next_line() {
    let mut session = session();

    assert_eq!(session.feed_line("one ->").unwrap(), Outcome::Pending);
    assert_eq!(session.feed_line("// not a comment inside a definition").unwrap_err().kind(),
               ErrorKind::Definition);
    assert!(!session.is_pending());

    assert_eq!(session.feed_line("one ->").unwrap(), Outcome::Pending);
    assert_eq!(session.feed_line("1").unwrap(), defined("one", true));
}

#[test]
fn rejected_definitions() {
    let mut session = session();

    let err = session.feed_line("g -> # + 1").unwrap_err();
    assert!(matches!(err, Error::Definition(DefinitionError::InvalidParameter { .. })));

    let err = session.feed_line("head -> 1").unwrap_err();
    assert!(matches!(err, Error::Definition(DefinitionError::Reserved { .. })));

    let err = session.feed_line("2x -> 1").unwrap_err();
    assert!(matches!(err, Error::Definition(DefinitionError::InvalidName { .. })));

    let err = session.feed_line("h -> (1))").unwrap_err();
    assert!(matches!(err, Error::Definition(DefinitionError::Malformed { .. })));

    assert_eq!(session.feed_line("p -> (1 +").unwrap(), Outcome::Pending);
    let err = session.feed_line(")").unwrap_err();
    assert!(matches!(err, Error::Definition(DefinitionError::InvalidBody { .. })));

    assert!(session.registry().is_empty());
}

#[test]
fn failures_keep_earlier_definitions() {
    let mut session = session();

    session.feed_line("inc -> #0 + 1").unwrap();
    assert!(session.feed_line("inc(1, 2)").is_err());
    assert!(session.feed_line("inc(").is_err());

    assert_eq!(session.feed_line("inc(1)").unwrap(), Outcome::Value(Value::Scalar(2.0)));
}

#[test]
fn console_is_shared_with_builtins() {
    let mut session = Session::new(BufferConsole::with_input("5"));

    assert_eq!(session.feed_line("write(read() * 2)").unwrap(), Outcome::Value(Value::Scalar(0.0)));
    assert_eq!(session.console().output(), "10\n");
    assert_eq!(session.console_mut().take_output(), "10\n");
    assert_eq!(session.console().output(), "");
}

#[test]
fn configured_depth_limits_recursion() {
    let mut session = session().with_config(EvalConfig { max_depth: 3 });

    session.feed_line("down -> if(#0, down(#0 - 1), 0)").unwrap();

    assert_eq!(session.evaluate("down(2)").unwrap(), Value::Scalar(0.0));
    assert_eq!(session.evaluate("down(3)").unwrap_err().kind(),
               ErrorKind::RecursionLimitExceeded);
}

#[test]
fn load_file_collects_errors_per_line() {
    let mut session = session();

    let errors = session.load_file(Path::new("tests/fixtures/mixed.fn")).unwrap();
    let lines: Vec<usize> = errors.iter().map(|(line, _)| *line).collect();

    assert_eq!(lines, vec![3, 4]);
    assert_eq!(session.registry().names(), vec!["thrice", "twice"]);
}

#[test]
fn load_file_reports_unterminated_definitions() {
    let mut session = session();

    let errors = session.load_file(Path::new("tests/fixtures/unterminated.fn")).unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, 3);
    assert!(matches!(errors[0].1, Error::Definition(DefinitionError::Malformed { .. })));
    assert_eq!(session.registry().names(), vec!["ok"]);
    assert!(!session.is_pending());
}

#[test]
fn load_file_fails_for_missing_files() {
    assert!(session().load_file(Path::new("tests/fixtures/missing.fn")).is_err());
}
