/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The tree is finite and every leaf is a [`Expr::Number`]. Each node owns its
/// children, and records the position of the token it was built from so that
/// evaluation errors can point back into the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value:    i64,
        /// Position of the literal in the source line.
        position: usize,
    },
    /// A prefix operator applied to one operand (e.g. `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Position of the operator in the source line.
        position: usize,
    },
    /// An infix operator applied to two operands.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator in the source line.
        position: usize,
    },
}

impl Expr {
    /// Returns the source position recorded on this node.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Returns the number of levels in the tree, counting a single literal as
    /// one.
    ///
    /// # Example
    /// ```
    /// use intcalc::parse;
    ///
    /// assert_eq!(parse("7").unwrap().depth(), 1);
    /// assert_eq!(parse("1 + 2 * 3").unwrap().depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number { .. } => 1,
            Self::UnaryOp { expr, .. } => 1 + expr.depth(),
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Renders the tree fully parenthesized, making grouping explicit.
///
/// ```
/// use intcalc::parse;
///
/// assert_eq!(parse("8 - 3 - 2").unwrap().to_string(), "((8 - 3) - 2)");
/// assert_eq!(parse("--5").unwrap().to_string(), "(-(-5))");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating integer division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}
