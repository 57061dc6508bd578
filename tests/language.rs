use pretty_assertions::assert_eq;
use seqfn::{
    error::{Error, ErrorKind},
    interpreter::{
        console::BufferConsole,
        evaluator::core::{EvalConfig, Evaluator},
        registry::Registry,
        value::core::Value,
    },
};

fn run(registry: &Registry, console: &mut BufferConsole, source: &str) -> Result<Value, Error> {
    Evaluator::new(registry, console).evaluate_source(source, None)
}

fn eval(source: &str) -> Value {
    run(&Registry::new(), &mut BufferConsole::default(), source)
        .unwrap_or_else(|e| panic!("'{source}' failed: {e}"))
}

fn eval_str(source: &str) -> String {
    eval(source).to_string()
}

fn failure(source: &str) -> ErrorKind {
    match run(&Registry::new(), &mut BufferConsole::default(), source) {
        Ok(value) => panic!("'{source}' evaluated to {value} but was expected to fail"),
        Err(e) => e.kind(),
    }
}

fn scalar(x: f64) -> Value {
    Value::Scalar(x)
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(eval("1 + 2 * 3"), scalar(7.0));
    assert_eq!(eval("2 ^ 3"), scalar(8.0));
    assert_eq!(eval("2 ^ 3 ^ 2"), scalar(512.0));
    assert_eq!(eval("(1 + 2) * 3"), scalar(9.0));
    assert_eq!(eval("10 - 4 - 3"), scalar(3.0));
    assert_eq!(eval("7 % 4"), scalar(3.0));
    assert_eq!(eval("{1 + 1} * 2"), scalar(4.0));
}

#[test]
fn unary_operators() {
    assert_eq!(eval("+1 + (-2) ^ 2"), scalar(5.0));
    assert_eq!(eval("-2 ^ 2"), scalar(4.0));
    assert_eq!(eval("3 * -2"), scalar(-6.0));
    assert_eq!(eval("add(-1, -2)"), scalar(-3.0));
    assert_eq!(eval("--3"), scalar(3.0));
}

#[test]
fn malformed_expressions() {
    assert_eq!(failure("1 +"), ErrorKind::InvalidExpression);
    assert_eq!(failure(""), ErrorKind::InvalidExpression);
    assert_eq!(failure("1 2"), ErrorKind::InvalidExpression);
    assert_eq!(failure("(1 + 2"), ErrorKind::InvalidBrackets);
    assert_eq!(failure("head [1]"), ErrorKind::InvalidBrackets);
    assert_eq!(failure("1 $ 2"), ErrorKind::UnknownOperator);
    assert_eq!(failure("add(1 2,)"), ErrorKind::InvalidExpression);
}

#[test]
fn modulo_domain() {
    assert_eq!(failure("mod(4.5, 2)"), ErrorKind::InvalidArgumentType);
    assert_eq!(eval("mod(4, 2)"), scalar(0.0));
    assert_eq!(eval("mod(3, 2)"), scalar(1.0));
    assert_eq!(eval("mod(-7, 2)"), scalar(-1.0));
    assert_eq!(failure("mod(3, 0)"), ErrorKind::DivisionByZero);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(failure("1 / 0"), ErrorKind::DivisionByZero);
    assert_eq!(failure("div(1, 0)"), ErrorKind::DivisionByZero);
    assert_eq!(eval("div(1, 4)"), scalar(0.25));
}

#[test]
fn equality() {
    assert_eq!(eval("eq(2, 2)"), scalar(1.0));
    assert_eq!(eval("eq([1,2,3], list(1,1,3))"), scalar(1.0));
    assert_eq!(eval("eq([1], 1)"), scalar(1.0));
    assert_eq!(eval("eq([1,2], 1)"), scalar(0.0));
    assert_eq!(eval("eq([[1 2] 3], [[1, 2], 3])"), scalar(1.0));
    assert_eq!(eval("eq(list(1), list(1))"), scalar(1.0));
    assert_eq!(eval("eq(list(1), list(1, 2))"), scalar(0.0));
    assert_eq!(eval("eq(tail(list(1)), list(2))"), scalar(1.0));
}

#[test]
fn ordering_is_strict_and_scalar_only() {
    assert_eq!(eval("le(1, 2)"), scalar(1.0));
    assert_eq!(eval("le(2, 2)"), scalar(0.0));
    assert_eq!(failure("le([1,2,3],[1,2,3,4])"), ErrorKind::InvalidArgumentType);
}

#[test]
fn numeric_builtins() {
    assert_eq!(eval("int(2.7)"), scalar(2.0));
    assert_eq!(eval("int(-2.5)"), scalar(-3.0));
    assert_eq!(eval("sqrt(16)"), scalar(4.0));
    assert_eq!(eval("sub(mul(2, 3), 1)"), scalar(5.0));
    assert_eq!(eval("eq(PI, 3.14159265)"), scalar(1.0));
    assert_eq!(eval("le(2.71828, E)"), scalar(1.0));
}

#[test]
fn if_skips_the_untaken_branch() {
    let registry = Registry::new();
    let mut console = BufferConsole::default();

    assert_eq!(run(&registry, &mut console, "if(1, 2, write(3))").unwrap(), scalar(2.0));
    assert_eq!(run(&registry, &mut console, "if(0, write(1), 2)").unwrap(), scalar(2.0));
    assert_eq!(run(&registry, &mut console, "if([], 1, [5])").unwrap().to_string(), "[5]");
    assert_eq!(console.output(), "");

    assert_eq!(run(&registry, &mut console, "if(write(7), 1, 2)").unwrap(), scalar(2.0));
    assert_eq!(console.output(), "7\n");
}

#[test]
fn nand_truth_table() {
    assert_eq!(eval("nand(0, 0)"), scalar(1.0));
    assert_eq!(eval("nand(0, 1)"), scalar(1.0));
    assert_eq!(eval("nand(1, 0)"), scalar(1.0));
    assert_eq!(eval("nand(1, 1)"), scalar(0.0));
}

#[test]
fn nand_skips_second_operand_when_first_is_false() {
    let registry = Registry::new();
    let mut console = BufferConsole::default();

    assert_eq!(run(&registry, &mut console, "nand(0, write(5))").unwrap(), scalar(1.0));
    assert_eq!(console.output(), "");

    assert_eq!(run(&registry, &mut console, "nand(1, write(5))").unwrap(), scalar(1.0));
    assert_eq!(console.output(), "5\n");
}

#[test]
fn sequences() {
    assert_eq!(eval("head(list(5,1,3))"), scalar(5.0));
    assert_eq!(eval_str("tail(list(5,1,3))"), "[6 7]");
    assert_eq!(eval("length([1,2,3,4])"), scalar(4.0));
    assert_eq!(eval("length([])"), scalar(0.0));
    assert_eq!(eval("length(list(1))"), scalar(-1.0));
    assert_eq!(eval_str("list(0, 2)"), "[0 2 4 6 8 10 12 14 16 18 ...]");
    assert_eq!(eval_str("list(3, 0.5, 3)"), "[3 3.5 4]");
    assert_eq!(eval_str("list(1, 1, 0)"), "[]");
    assert_eq!(failure("list(1, 1, 2.5)"), ErrorKind::InvalidArgumentType);
    assert_eq!(failure("length(list(1, 1, 1000000000000))"), ErrorKind::InvalidArgumentType);
    assert_eq!(failure("head([])"), ErrorKind::InvalidArgumentType);
    assert_eq!(failure("tail(3)"), ErrorKind::InvalidArgumentType);
    assert_eq!(failure("[1] + 1"), ErrorKind::InvalidArgumentType);
}

#[test]
fn list_literals_hold_subexpressions() {
    assert_eq!(eval_str("[1 2, 3]"), "[1 2 3]");
    assert_eq!(eval_str("[head([7]), [8 9], length([1, 2])]"), "[7 [8 9] 2]");
    assert_eq!(eval_str("[add(1, 2) * 2]"), "[6]");
    assert_eq!(failure("[1, (2)]"), ErrorKind::InvalidExpression);
    assert_eq!(failure("[1, 2"), ErrorKind::InvalidBrackets);
}

#[test]
fn concatenation() {
    assert_eq!(eval_str("concat([2,3],[4,5])"), "[2 3 4 5]");
    assert_eq!(eval_str("concat(1, [2])"), "[1 2]");
    assert_eq!(eval_str("concat([1], list(2, 3))"), "[1 2 5 8 11 14 17 20 23 26 29 ...]");
    assert_eq!(eval_str("head(tail(tail(concat([], list(2, 3)))))"), "8");
    assert_eq!(failure("concat(list(5), [])"), ErrorKind::InvalidArgumentType);
}

#[test]
fn comma_sequences_outside_calls() {
    let registry = Registry::new();
    let mut console = BufferConsole::default();

    assert_eq!(run(&registry, &mut console, "write(1), write(2), 3").unwrap(), scalar(3.0));
    assert_eq!(console.output(), "1\n2\n");
    assert_eq!(run(&registry, &mut console, "add((1, 2), 3)").unwrap(), scalar(5.0));
}

#[test]
fn read_and_write_use_the_console() {
    let registry = Registry::new();
    let mut console = BufferConsole::with_input("2 3\n4");

    assert_eq!(run(&registry, &mut console, "add(read(), read())").unwrap(), scalar(5.0));
    assert_eq!(run(&registry, &mut console, "write([read(), list(1)])").unwrap(), scalar(0.0));
    assert_eq!(console.output(), "[4 [1 2 3 4 5 6 7 8 9 10 ...]]\n");

    let err = run(&registry, &mut console, "read()").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[test]
fn recursion_end_to_end() {
    let mut registry = Registry::new();
    registry.define("len", 1, "if(#0, len(tail(#0)) + 1, 0)").unwrap();
    let mut console = BufferConsole::default();

    assert_eq!(run(&registry, &mut console, "len(list(1,1,25))").unwrap(), scalar(25.0));
    assert_eq!(run(&registry, &mut console, "len([])").unwrap(), scalar(0.0));
}

#[test]
fn user_functions_compose() {
    let mut registry = Registry::new();
    registry.define("square", 1, "#0 * #0").unwrap();
    registry.define("hyp", 2, "sqrt(square(#0) + square(#1))").unwrap();
    registry.define("fact", 1, "if(le(#0, 1), 1, #0 * fact(#0 - 1))").unwrap();
    registry.define("take", 2, "if(#1, concat(head(#0), take(tail(#0), #1 - 1)), [])").unwrap();
    let mut console = BufferConsole::default();

    assert_eq!(run(&registry, &mut console, "hyp(3, 4)").unwrap(), scalar(5.0));
    assert_eq!(run(&registry, &mut console, "fact(5)").unwrap(), scalar(120.0));
    assert_eq!(run(&registry, &mut console, "take(list(1, 2), 4)").unwrap().to_string(),
               "[1 3 5 7]");
}

#[test]
fn user_call_errors() {
    let mut registry = Registry::new();
    registry.define("pair", 2, "#0 + #1").unwrap();
    registry.define("wide", 1, "#0 + #1").unwrap();
    let mut console = BufferConsole::default();

    let kind = |console: &mut BufferConsole, source: &str| {
        run(&registry, console, source).unwrap_err().kind()
    };

    assert_eq!(kind(&mut console, "pair(1)"), ErrorKind::InvalidArgumentCount);
    assert_eq!(kind(&mut console, "pair(1, 2, 3)"), ErrorKind::InvalidArgumentCount);
    assert_eq!(kind(&mut console, "wide(1)"), ErrorKind::IndexOutOfRange);
    assert_eq!(kind(&mut console, "missing(1)"), ErrorKind::UnknownFunctionOrConstant);
    assert_eq!(kind(&mut console, "#0"), ErrorKind::NoActiveFrame);
    assert_eq!(kind(&mut console, "head(1, 2)"), ErrorKind::InvalidArgumentCount);
}

#[test]
fn runaway_recursion_is_reported() {
    let mut registry = Registry::new();
    registry.define("forever", 1, "forever(#0 + 1)").unwrap();
    registry.define("down", 1, "if(#0, down(#0 - 1), 0)").unwrap();
    let mut console = BufferConsole::default();

    let err = run(&registry, &mut console, "forever(0)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionLimitExceeded);
    assert_eq!(run(&registry, &mut console, "down(5000)").unwrap(), scalar(0.0));

    let mut shallow =
        Evaluator::new(&registry, &mut console).with_config(EvalConfig { max_depth: 10 });
    let err = shallow.evaluate_source("down(20)", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecursionLimitExceeded);
}

#[test]
fn independent_evaluations_agree() {
    let source = "concat(tail(list(1, 2, 4)), [head(list(9)), 2 ^ 0.5])";

    assert_eq!(eval(source), eval(source));
}
