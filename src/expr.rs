//! Expression nodes.
//!
//! An [`Expression`] is an immutable node of the search DAG. Operands are
//! referenced by [`ExprId`], an index into the owning
//! [`ExpressionPool`][crate::pool::ExpressionPool], so a node can be shared by
//! any number of parents without copying.

use std::fmt::{Display, Formatter};

use crate::op::{BinaryOp, Op, UnaryOp};
use crate::truth_table::TruthTable;

/// Index of an expression inside its pool.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ExprId(usize);

impl ExprId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for ExprId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Expression {
    name: String,
    value: TruthTable,
    cost: u32,
    op: Option<Op>,
    left: Option<ExprId>,
    right: Option<ExprId>,
}

// Constructors
impl Expression {
    /// A base variable with an explicit truth table.
    pub fn leaf(name: impl Into<String>, value: TruthTable) -> Self {
        Self {
            name: name.into(),
            value,
            cost: 0,
            op: None,
            left: None,
            right: None,
        }
    }

    /// `op(operand)`, where `operand` lives in the pool at `id`.
    pub fn unary(op: UnaryOp, id: ExprId, operand: &Expression) -> Self {
        Self {
            name: unary_name(op, &operand.name),
            value: op.apply(operand.value),
            cost: operand.cost + 1,
            op: Some(Op::Unary(op)),
            left: Some(id),
            right: None,
        }
    }

    /// `(lhs op rhs)`, where the operands live in the pool at `left` and `right`.
    pub fn binary(
        op: BinaryOp,
        left: ExprId,
        lhs: &Expression,
        right: ExprId,
        rhs: &Expression,
    ) -> Self {
        Self {
            name: binary_name(op, &lhs.name, &rhs.name),
            value: op.apply(lhs.value, rhs.value),
            cost: lhs.cost + rhs.cost + 1,
            op: Some(Op::Binary(op)),
            left: Some(left),
            right: Some(right),
        }
    }
}

// Getters
impl Expression {
    /// Canonical name, unique per syntactic shape.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> TruthTable {
        self.value
    }

    /// Number of operator applications.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Top-level operator, `None` for base variables.
    pub fn op(&self) -> Option<Op> {
        self.op
    }

    pub fn left(&self) -> Option<ExprId> {
        self.left
    }

    pub fn right(&self) -> Option<ExprId> {
        self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.op.is_none()
    }

    pub(crate) fn has_op(&self, op: impl Into<Op>) -> bool {
        self.op == Some(op.into())
    }
}

/// Formats as a report line: `<cost> <name>`.
impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.cost, self.name)
    }
}

pub(crate) fn unary_name(op: UnaryOp, operand: &str) -> String {
    format!("{}{}", op.symbol(), operand)
}

pub(crate) fn binary_name(op: BinaryOp, lhs: &str, rhs: &str) -> String {
    format!("({}{}{})", lhs, op.symbol(), rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn leaf(name: &str, bits: u64) -> Expression {
        Expression::leaf(name, TruthTable::new(bits, 8).unwrap())
    }

    #[test]
    fn test_leaf() {
        let a = leaf("a", 0x0f);
        assert_eq!(a.name(), "a");
        assert_eq!(a.cost(), 0);
        assert!(a.is_leaf());
        assert_eq!(a.op(), None);
        assert_eq!(a.left(), None);
        assert_eq!(a.right(), None);
    }

    #[test]
    fn test_unary() {
        let a = leaf("a", 0x0f);
        let not_a = Expression::unary(UnaryOp::Not, ExprId::new(0), &a);
        assert_eq!(not_a.name(), "~a");
        assert_eq!(not_a.value().bits(), 0xf0);
        assert_eq!(not_a.cost(), 1);
        assert_eq!(not_a.op(), Some(Op::Unary(UnaryOp::Not)));
        assert_eq!(not_a.left(), Some(ExprId::new(0)));
        assert_eq!(not_a.right(), None);
    }

    #[test]
    fn test_binary() {
        let a = leaf("a", 0x0f);
        let b = leaf("b", 0x33);
        let ab = Expression::binary(BinaryOp::And, ExprId::new(0), &a, ExprId::new(1), &b);
        assert_eq!(ab.name(), "(a&b)");
        assert_eq!(ab.value().bits(), 0x03);
        assert_eq!(ab.cost(), 1);
        assert_eq!(ab.left(), Some(ExprId::new(0)));
        assert_eq!(ab.right(), Some(ExprId::new(1)));

        let ba = Expression::binary(BinaryOp::And, ExprId::new(1), &b, ExprId::new(0), &a);
        assert_eq!(ba.name(), "(b&a)");
        assert_eq!(ba.value(), ab.value());
    }

    #[test]
    fn test_cost_accumulates() {
        let a = leaf("a", 0x0f);
        let b = leaf("b", 0x33);
        let c = leaf("c", 0x55);
        let not_b = Expression::unary(UnaryOp::Not, ExprId::new(1), &b);
        let inner = Expression::binary(BinaryOp::And, ExprId::new(2), &c, ExprId::new(3), &not_b);
        let outer = Expression::binary(BinaryOp::Xor, ExprId::new(0), &a, ExprId::new(4), &inner);
        assert_eq!(outer.name(), "(a^(c&~b))");
        assert_eq!(outer.cost(), 3);
        assert_eq!(outer.value().bits(), 0x4b);
        assert_eq!(outer.to_string(), "3 (a^(c&~b))");
    }
}
