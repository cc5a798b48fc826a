/// Represents a literal value in an expression.
///
/// `LiteralValue` covers the raw constant values that can appear directly in
/// source text: integers and real numbers (including scientific notation).
/// Complex values never appear as literals; they only arise at evaluation
/// time, either through the `complex()` builtin or by domain widening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// This is a deliberately closed set: the parser can only ever produce these
/// six variants, and the evaluator matches them exhaustively with no
/// catch-all. Everything outside this set (attribute access, statements,
/// multi-argument calls, collection literals) is rejected during parsing, so
/// no unvetted construct can reach evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal numeric value.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a variable by name, resolved against the environment at
    /// evaluation time, not at parse time.
    Name {
        /// Name of the variable.
        name: String,
    },
    /// A binary arithmetic or bitwise operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A comparison. Evaluates to the integer `0` or `1`, never a boolean.
    Compare {
        /// The comparison operator.
        op:    CompareOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A boolean operation over two or more operands.
    ///
    /// Consecutive `and`s (or `or`s) collect into a single node, mirroring
    /// how the surface syntax reads. Operands are always evaluated eagerly.
    BoolOp {
        /// The boolean operator.
        op:       BoolOperator,
        /// The operand expressions, in source order. Always at least two.
        operands: Vec<Self>,
    },
    /// A call to a whitelisted builtin function with exactly one argument.
    Call {
        /// Name of the function, checked against the whitelist at
        /// evaluation time.
        function: String,
        /// The single argument expression.
        argument: Box<Self>,
    },
}

/// Represents a binary operator.
///
/// Covers arithmetic, exponentiation, and the bitwise/shift operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// True division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Left shift (`<<`)
    Shl,
    /// Right shift (`>>`)
    Shr,
}

/// Represents a comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompareOperator {
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Less than or equal (`<=`)
    Le,
    /// Greater than or equal (`>=`)
    Ge,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    Ne,
}

/// Represents a boolean operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoolOperator {
    /// Logical and (`and`): true when every operand is truthy.
    And,
    /// Logical or (`or`): true when any operand is truthy.
    Or,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, BitAnd, BitOr, BitXor, Div, Mod, Mul, Pow, Shl, Shr, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            Shl => "<<",
            Shr => ">>",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CompareOperator::{Eq, Ge, Gt, Le, Lt, Ne};
        let operator = match self {
            Lt => "<",
            Gt => ">",
            Le => "<=",
            Ge => ">=",
            Eq => "==",
            Ne => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for BoolOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}
