use std::fmt::{Display, Formatter};

use crate::truth_table::TruthTable;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Not,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    /// Material non-implication, `!x & y`.
    ///
    /// Kept in the operator set but never applied during combination.
    AndNot,
}

/// Top-level operator of a compound expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Op {
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 1] = [UnaryOp::Not];

    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "~",
        }
    }

    pub fn apply(self, x: TruthTable) -> TruthTable {
        match self {
            UnaryOp::Not => !x,
        }
    }
}

impl BinaryOp {
    /// Operators tried by the combination step, in order.
    pub const ENABLED: [BinaryOp; 3] = [BinaryOp::And, BinaryOp::Or, BinaryOp::Xor];

    pub const ALL: [BinaryOp; 4] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Xor,
        BinaryOp::AndNot,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::AndNot => "*",
        }
    }

    pub const fn is_enabled(self) -> bool {
        !matches!(self, BinaryOp::AndNot)
    }

    pub fn apply(self, x: TruthTable, y: TruthTable) -> TruthTable {
        match self {
            BinaryOp::And => x & y,
            BinaryOp::Or => x | y,
            BinaryOp::Xor => x ^ y,
            BinaryOp::AndNot => !x & y,
        }
    }
}

impl Op {
    pub const fn symbol(self) -> &'static str {
        match self {
            Op::Unary(op) => op.symbol(),
            Op::Binary(op) => op.symbol(),
        }
    }
}

impl From<UnaryOp> for Op {
    fn from(op: UnaryOp) -> Self {
        Op::Unary(op)
    }
}

impl From<BinaryOp> for Op {
    fn from(op: BinaryOp) -> Self {
        Op::Binary(op)
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Characters that may not appear in variable names.
pub(crate) const RESERVED_CHARS: &[char] = &['~', '&', '|', '^', '*', '(', ')'];

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn tt(bits: u64) -> TruthTable {
        TruthTable::new(bits, 8).unwrap()
    }

    #[test]
    fn test_binary_ops() {
        let a = tt(0x0f);
        let b = tt(0x33);
        assert_eq!(BinaryOp::And.apply(a, b), tt(0x03));
        assert_eq!(BinaryOp::Or.apply(a, b), tt(0x3f));
        assert_eq!(BinaryOp::Xor.apply(a, b), tt(0x3c));
        assert_eq!(BinaryOp::AndNot.apply(a, b), tt(0x30));
    }

    #[test]
    fn test_enabled_ops_are_symmetric() {
        let a = tt(0x0f);
        let b = tt(0x55);
        for op in BinaryOp::ENABLED {
            assert!(op.is_enabled());
            assert_eq!(op.apply(a, b), op.apply(b, a));
        }
    }

    #[test]
    fn test_and_not_is_disabled() {
        assert!(!BinaryOp::AndNot.is_enabled());
        assert!(!BinaryOp::ENABLED.contains(&BinaryOp::AndNot));
        assert_eq!(
            BinaryOp::ALL.iter().filter(|op| op.is_enabled()).count(),
            BinaryOp::ENABLED.len()
        );
    }

    #[test]
    fn test_not() {
        assert_eq!(UnaryOp::Not.apply(tt(0x33)), tt(0xcc));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Op::from(UnaryOp::Not).to_string(), "~");
        assert_eq!(Op::from(BinaryOp::And).to_string(), "&");
        assert_eq!(Op::from(BinaryOp::Or).to_string(), "|");
        assert_eq!(Op::from(BinaryOp::Xor).to_string(), "^");
        assert_eq!(Op::from(BinaryOp::AndNot).to_string(), "*");
    }
}
