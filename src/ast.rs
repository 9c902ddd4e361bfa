use std::{fmt, mem};

use crate::{bignum::BigInt, util::stack::ensure_sufficient_stack};

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// The variant set is closed: literals, binary and unary operations, and
/// variable references. Each node owns its children, and reduction builds a
/// new tree instead of mutating an existing one.
///
/// A chain such as `1 + 1 + ... + 1` yields a tree as deep as the chain is
/// long, so the recursive trait impls below run under
/// [`ensure_sufficient_stack`] and dropping is iterative.
pub enum Expr {
    /// A resolved literal value.
    Numeric {
        /// The value.
        value: BigInt,
    },
    /// A binary operation such as `a + b`.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// A prefix operation such as `sqrt a`.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// Reference to a variable by name, resolved through the bindings.
    Variable {
        /// Name of the variable.
        name: String,
    },
}

impl Expr {
    #[must_use]
    pub const fn numeric(value: BigInt) -> Self {
        Self::Numeric { value }
    }

    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }

    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// Returns the literal value if `self` is a `Numeric` node.
    #[must_use]
    pub const fn as_numeric(&self) -> Option<&BigInt> {
        match self {
            Self::Numeric { value } => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }

    /// Returns `true` if one reduction step can turn this node into a
    /// literal: a binary node over two literals, a unary node over a literal,
    /// or a variable reference.
    ///
    /// # Example
    /// ```
    /// use stepcalc::{
    ///     ast::{BinaryOperator, Expr},
    ///     bignum::BigInt,
    /// };
    ///
    /// let one = Expr::numeric(BigInt::one());
    /// let sum = Expr::binary(one.clone(), BinaryOperator::Add, one.clone());
    /// assert!(sum.is_reducible());
    /// assert!(!Expr::binary(sum, BinaryOperator::Mul, one.clone()).is_reducible());
    /// assert!(Expr::variable("x").is_reducible());
    /// assert!(!one.is_reducible());
    /// ```
    #[must_use]
    pub fn is_reducible(&self) -> bool {
        match self {
            Self::Binary { left, right, .. } => left.is_numeric() && right.is_numeric(),
            Self::Unary { operand, .. } => operand.is_numeric(),
            Self::Variable { .. } => true,
            Self::Numeric { .. } => false,
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Self::Numeric { value } => Self::Numeric { value: value.clone() },
            Self::Binary { left, op, right } => Self::Binary { left:  left.clone(),
                                                               op:    *op,
                                                               right: right.clone(), },
            Self::Unary { op, operand } => Self::Unary { op:      *op,
                                                         operand: operand.clone(), },
            Self::Variable { name } => Self::Variable { name: name.clone() },
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Self::Numeric { value: a }, Self::Numeric { value: b }) => a == b,
            (Self::Binary { left: l1, op: o1, right: r1 },
             Self::Binary { left: l2, op: o2, right: r2 }) => o1 == o2 && l1 == l2 && r1 == r2,
            (Self::Unary { op: o1, operand: a }, Self::Unary { op: o2, operand: b }) => {
                o1 == o2 && a == b
            },
            (Self::Variable { name: a }, Self::Variable { name: b }) => a == b,
            _ => false,
        })
    }
}

impl Eq for Expr {}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Self::Numeric { value } => f.debug_struct("Numeric").field("value", value).finish(),
            Self::Binary { left, op, right } => f.debug_struct("Binary")
                                                 .field("left", left)
                                                 .field("op", op)
                                                 .field("right", right)
                                                 .finish(),
            Self::Unary { op, operand } => f.debug_struct("Unary")
                                            .field("op", op)
                                            .field("operand", operand)
                                            .finish(),
            Self::Variable { name } => f.debug_struct("Variable").field("name", name).finish(),
        })
    }
}

/// Dropping detaches children onto a work list instead of recursing.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Expr {
    /// Moves the children of `self` into `pending`, leaving leaves behind.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        let leaf = || Self::Variable { name: String::new() };
        match self {
            Self::Binary { left, right, .. } => {
                pending.push(mem::replace(&mut **left, leaf()));
                pending.push(mem::replace(&mut **right, leaf()));
            },
            Self::Unary { operand, .. } => pending.push(mem::replace(&mut **operand, leaf())),
            Self::Numeric { .. } | Self::Variable { .. } => {},
        }
    }
}

/// Renders the tree the way reduction traces show it.
///
/// Every binary node is wrapped in parentheses, so the grouping chosen by the
/// parser is visible: `1 + 2 * 3` renders as `(1 + (2 * 3))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Self::Numeric { value } => write!(f, "{value}"),
            Self::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Unary { op, operand } => write!(f, "{op} {operand}"),
            Self::Variable { name } => write!(f, "{name}"),
        })
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`/`)
    Div,
    /// Remainder (`%`)
    Rem,
    /// Exponentiation (`**`)
    Pow,
}

impl BinaryOperator {
    /// Binding strength; higher binds tighter.
    ///
    /// `+ -` are level 0, `* / %` level 1 and `**` level 2.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 0,
            Self::Mul | Self::Div | Self::Rem => 1,
            Self::Pow => 2,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

/// Represents a unary (prefix) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Integer square root (`sqrt`).
    Sqrt,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqrt => write!(f, "sqrt"),
        }
    }
}
