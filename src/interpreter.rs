/// The evaluator module executes expression trees and computes values.
///
/// The evaluator walks the tree produced by the parser, applies operators and
/// built-in functions, binds arguments of user-defined functions in call
/// frames, and reports runtime errors. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates every expression node strictly, left to right.
/// - Short-circuits the `if` and `nand` special forms.
/// - Bounds the nesting of user-function calls.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// Produces numbers, names, parameter references, operators and brackets,
/// each with the byte range it was read from. Blanks are skipped; any other
/// unrecognized character is an error.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// An operator-precedence pass handles infix and prefix operators, bracket
/// groups, calls and list literals, and resolves calls to built-ins, special
/// forms and user-defined functions.
pub mod parser;
/// The value module defines the runtime data types.
///
/// A value is either a scalar or a sequence. Sequences may be unbounded, in
/// which case their elements are generated as they are consumed.
pub mod value;
/// User-defined functions.
pub mod registry;
/// The streams behind `read` and `write`.
///
/// Defines the `Console` trait together with a console over the standard
/// streams and an in-memory console for tests and embedding.
pub mod console;
/// The line-oriented front end.
///
/// Splits input into comments, definitions and expressions, collects
/// multi-line definitions, and loads definition files.
pub mod session;
