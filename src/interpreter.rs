/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator traverses the AST, evaluating operands left before right and
/// applying checked integer arithmetic. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates every AST variant through exhaustive matching.
/// - Reports division by zero and arithmetic overflow.
pub mod evaluator;
/// The lexer module tokenizes a line of source text.
///
/// The lexer reads the raw text and produces tokens on demand: integer
/// literals, the four arithmetic operators and parentheses, followed by an
/// end-of-input marker. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Skips whitespace and converts digit runs into integer values.
/// - Attaches the character position to every token.
/// - Reports characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead that enforces
/// operator precedence and left associativity.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Rejects malformed input, including input left over after a complete
///   expression.
pub mod parser;
