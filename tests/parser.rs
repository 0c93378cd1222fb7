use intcalc::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{ErrorKind, ParseError},
    interpreter::lexer::Token,
    parse,
};

fn rendered(src: &str) -> String {
    parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
              .to_string()
}

#[test]
fn literal_is_a_single_leaf() {
    assert_eq!(parse("42"),
               Ok(Expr::Number { value:    42,
                                 position: 0, }));
}

#[test]
fn binary_node_records_operator_position() {
    assert_eq!(parse("1 - 2"),
               Ok(Expr::BinaryOp { left:     Box::new(Expr::Number { value:    1,
                                                                     position: 0, }),
                                   op:       BinaryOperator::Sub,
                                   right:    Box::new(Expr::Number { value:    2,
                                                                     position: 4, }),
                                   position: 2, }));
}

#[test]
fn unary_chain_nests() {
    assert_eq!(parse("-+3"),
               Ok(Expr::UnaryOp { op:       UnaryOperator::Minus,
                                  expr:     Box::new(Expr::UnaryOp { op:       UnaryOperator::Plus,
                                                                     expr:
                                                                         Box::new(Expr::Number { value:    3,
                                                                                                 position: 2, }),
                                                                     position: 1, }),
                                  position: 0, }));
}

#[test]
fn precedence_and_associativity_shape_the_tree() {
    assert_eq!(rendered("2 + 3 * 4"), "(2 + (3 * 4))");
    assert_eq!(rendered("(2 + 3) * 4"), "((2 + 3) * 4)");
    assert_eq!(rendered("8 - 3 - 2"), "((8 - 3) - 2)");
    assert_eq!(rendered("20 / 4 / 5"), "((20 / 4) / 5)");
    assert_eq!(rendered("1 + 2 * 3 - 4 / 2"), "((1 + (2 * 3)) - (4 / 2))");
    assert_eq!(rendered("-2 * 3"), "((-2) * 3)");
    assert_eq!(rendered("--5"), "(-(-5))");
}

#[test]
fn parentheses_leave_no_node() {
    assert_eq!(parse("((7))"),
               Ok(Expr::Number { value:    7,
                                 position: 2, }));
    assert_eq!(parse("(1 + 2) * 3").unwrap().depth(), 3);
}

#[test]
fn unmatched_parenthesis() {
    assert_eq!(parse("(1 + 2"),
               Err(ParseError::UnexpectedToken { expected: "')'".to_string(),
                                                 found:    Token::EndOfInput,
                                                 position: 6, }));
}

#[test]
fn missing_operand() {
    let err = parse("1 + ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert!(matches!(err,
                     ParseError::UnexpectedToken { found: Token::EndOfInput,
                                                   position: 4,
                                                   .. }));

    let err = parse("2 * / 3").unwrap_err();
    assert!(matches!(err,
                     ParseError::UnexpectedToken { found: Token::Slash,
                                                   position: 4,
                                                   .. }));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_eq!(parse("3 4"),
               Err(ParseError::UnexpectedTrailingTokens { found:    Token::Integer(4),
                                                          position: 2, }));
    assert_eq!(parse("(1))"),
               Err(ParseError::UnexpectedTrailingTokens { found:    Token::RParen,
                                                          position: 3, }));
}

#[test]
fn lexical_errors_pass_through_the_parser() {
    assert_eq!(parse("1 + #"),
               Err(ParseError::InvalidCharacter { character: '#',
                                                  position:  4, }));
}
