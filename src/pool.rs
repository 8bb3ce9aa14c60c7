//! The expression pool and the level-by-level combination step.
//!
//! ## Search
//!
//! The pool starts out with the seeded base variables (cost 0). Each call to
//! [`ExpressionPool::combine`] with the next `level` builds every expression of
//! cost exactly `level` out of the expressions already present:
//!
//! - `~x` for every `x` of cost `level - 1` whose top operator is not `~`,
//! - `(x op y)` for every pair `x` before `y` in pool order with
//!   `cost(x) + cost(y) + 1 == level`, for `op` in `&`, `|`, `^`.
//!
//! A binary candidate is kept only if its truth table differs from both
//! operands and its name is new.
//!
//! ## Pruning
//!
//! Without further restrictions the number of shapes explodes quickly, most of
//! them re-associations of one another. Before building `(x op y)` the
//! following candidates are skipped:
//!
//! ```text
//! y = (p op q),  x ∈ {p, q}                    => skip
//! y = (p op q),  (p op (x op q)) in pool       => skip
//! y = (p op' (r op s)),  r == x               => skip
//! x = (p op q),  (p op (q op y)) in pool       => skip
//! x = (p op q),  (q op (p op y)) in pool       => skip
//! x = (p op q),  y = (r op s),  r ∈ {p, q}     => skip
//! ```
//!
//! Lookups see expressions inserted earlier in the same step, so the order in
//! which candidates are visited is part of the result.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

use log::{debug, info, trace};

use crate::error::SynthError;
use crate::expr::{binary_name, unary_name, ExprId, Expression};
use crate::op::{BinaryOp, Op, UnaryOp, RESERVED_CHARS};
use crate::truth_table::{Domain, TruthTable};

pub struct ExpressionPool {
    domain: Domain,
    /// Expressions in insertion order.
    exprs: Vec<Expression>,
    /// Canonical name -> position in `exprs`.
    index: HashMap<String, ExprId>,
    /// Last completed combination level (0 right after seeding).
    level: u32,
}

impl ExpressionPool {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            exprs: Vec::new(),
            index: HashMap::new(),
            level: 0,
        }
    }

    /// Creates a pool seeded with the canonical variables `a, b, c, ...` of `domain`.
    pub fn with_variables(domain: Domain) -> Self {
        let mut pool = Self::new(domain);
        pool.seed_variables();
        pool
    }
}

impl Debug for ExpressionPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpressionPool")
            .field("inputs", &self.domain.inputs())
            .field("size", &self.exprs.len())
            .field("level", &self.level)
            .finish()
    }
}

// Getters
impl ExpressionPool {
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Last completed combination level.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn get(&self, id: ExprId) -> &Expression {
        &self.exprs[id.index()]
    }

    pub fn lookup(&self, name: &str) -> Option<ExprId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All expressions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ExprId, &Expression)> + '_ {
        self.exprs
            .iter()
            .enumerate()
            .map(|(i, e)| (ExprId::new(i), e))
    }

    /// Expressions computing `target`, in insertion order.
    pub fn find(&self, target: TruthTable) -> impl Iterator<Item = (ExprId, &Expression)> + '_ {
        self.iter().filter(move |(_, e)| e.value() == target)
    }

    /// Number of expressions per cost.
    pub fn count_by_cost(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for e in &self.exprs {
            *counts.entry(e.cost()).or_insert(0) += 1;
        }
        counts
    }
}

// Seeding
impl ExpressionPool {
    /// Adds a base variable.
    ///
    /// Seeds must be added before the first [`combine`][Self::combine] call,
    /// must have the domain's width, and must have distinct plain names.
    pub fn seed(&mut self, name: &str, value: TruthTable) -> Result<ExprId, SynthError> {
        if self.level > 0 {
            return Err(SynthError::SeedAfterCombine(name.to_string()));
        }
        if name.is_empty() || name.contains(RESERVED_CHARS) || name.contains(char::is_whitespace)
        {
            return Err(SynthError::InvalidName(name.to_string()));
        }
        if value.width() != self.domain.width() {
            return Err(SynthError::WidthMismatch {
                expected: self.domain.width(),
                got: value.width(),
            });
        }
        if self.contains(name) {
            return Err(SynthError::DuplicateName(name.to_string()));
        }
        debug!("seed(name = {}, value = {})", name, value);
        Ok(self.insert(Expression::leaf(name, value)))
    }

    /// Adds a base variable from raw truth-table bits in the domain's width.
    pub fn seed_bits(&mut self, name: &str, bits: u64) -> Result<ExprId, SynthError> {
        let value = self.domain.table(bits).map_err(|_| SynthError::ValueOutOfRange {
            name: Some(name.to_string()),
            value: bits,
            width: self.domain.width(),
        })?;
        self.seed(name, value)
    }

    /// Seeds the canonical variables `a, b, c, ...` of the domain.
    pub fn seed_variables(&mut self) -> Vec<ExprId> {
        let domain = self.domain;
        (0..domain.inputs())
            .map(|i| {
                let name = domain.default_name(i);
                assert!(!self.contains(&name), "Variable '{}' is already seeded", name);
                self.insert(Expression::leaf(name, domain.variable(i)))
            })
            .collect()
    }
}

// Insertion and evaluation
impl ExpressionPool {
    /// Adds `expr` to the pool.
    ///
    /// Only reachable through [`seed`][Self::seed] and the combination step,
    /// which validate names, widths and levels first.
    ///
    /// # Panics
    ///
    /// Panics if an expression with the same name is already present, if its
    /// width differs from the domain, or if an operand is not in the pool.
    pub(crate) fn insert(&mut self, expr: Expression) -> ExprId {
        assert!(
            !self.index.contains_key(expr.name()),
            "Expression '{}' is already in the pool",
            expr.name()
        );
        assert_eq!(
            expr.value().width(),
            self.domain.width(),
            "Expression '{}' has the wrong width",
            expr.name()
        );
        for operand in expr.left().into_iter().chain(expr.right()) {
            assert!(
                operand.index() < self.exprs.len(),
                "Operand {} of '{}' is not in the pool",
                operand,
                expr.name()
            );
        }

        let id = ExprId::new(self.exprs.len());
        debug!("insert {}: {}", id, expr);
        self.index.insert(expr.name().to_string(), id);
        self.exprs.push(expr);
        id
    }

    /// Recomputes the value of `id` from its operator and its operands' stored values.
    pub fn evaluate(&self, id: ExprId) -> TruthTable {
        let e = self.get(id);
        match (e.op(), e.left(), e.right()) {
            (None, _, _) => e.value(),
            (Some(Op::Unary(op)), Some(x), None) => op.apply(self.get(x).value()),
            (Some(Op::Binary(op)), Some(x), Some(y)) => {
                op.apply(self.get(x).value(), self.get(y).value())
            }
            _ => panic!("Malformed expression {}", e.name()),
        }
    }

    /// Rebuilds the canonical name of `id` from its structure.
    pub fn render(&self, id: ExprId) -> String {
        let e = self.get(id);
        match (e.op(), e.left(), e.right()) {
            (None, _, _) => e.name().to_string(),
            (Some(Op::Unary(op)), Some(x), None) => unary_name(op, &self.render(x)),
            (Some(Op::Binary(op)), Some(x), Some(y)) => {
                binary_name(op, &self.render(x), &self.render(y))
            }
            _ => panic!("Malformed expression {}", e.name()),
        }
    }
}

// Combination
impl ExpressionPool {
    /// Generates all expressions of cost exactly `level`.
    ///
    /// Must be called with `level == self.level() + 1`, i.e. with levels
    /// `1, 2, 3, ...` in order. Returns the number of new expressions.
    pub fn combine(&mut self, level: u32) -> Result<usize, SynthError> {
        let expected = self.level + 1;
        if level != expected {
            return Err(SynthError::LevelOutOfOrder {
                expected,
                got: level,
            });
        }

        // Only expressions from previous levels take part.
        let n = self.exprs.len();
        debug!("combine(level = {}) over {} expressions", level, n);

        for i in 0..n {
            let li = ExprId::new(i);

            if self.get(li).cost() + 1 == level {
                for op in UnaryOp::ALL {
                    if self.get(li).has_op(op) {
                        continue;
                    }
                    let e = Expression::unary(op, li, self.get(li));
                    self.insert(e);
                }
            }

            for j in (i + 1)..n {
                let lj = ExprId::new(j);
                if self.get(li).cost() + self.get(lj).cost() + 1 != level {
                    continue;
                }
                for op in BinaryOp::ENABLED {
                    if let Some(e) = self.candidate(op, li, lj) {
                        self.insert(e);
                    }
                }
            }
        }

        self.level = level;
        let added = self.exprs.len() - n;
        info!(
            "level {}: {} new expressions, pool size {}",
            level,
            added,
            self.exprs.len()
        );
        Ok(added)
    }

    /// Builds `(li op lj)` unless it is pruned, redundant, or already known.
    fn candidate(&self, op: BinaryOp, li: ExprId, lj: ExprId) -> Option<Expression> {
        debug_assert!(op.is_enabled());

        if self.is_pruned(op, li, lj) {
            return None;
        }

        let x = self.get(li);
        let y = self.get(lj);
        let value = op.apply(x.value(), y.value());
        if value == x.value() || value == y.value() {
            trace!("redundant: ({}{}{})", x.name(), op.symbol(), y.name());
            return None;
        }

        let e = Expression::binary(op, li, x, lj, y);
        if self.contains(e.name()) {
            return None;
        }
        Some(e)
    }

    fn is_pruned(&self, op: BinaryOp, li: ExprId, lj: ExprId) -> bool {
        let x = self.get(li);
        let y = self.get(lj);

        // y = (p op q)
        if let Some((p, q)) = self.operands(y, op) {
            if li == p || li == q {
                trace!("pruned: {} is an operand of {}", x.name(), y.name());
                return true;
            }
            let inner = binary_name(op, x.name(), self.get(q).name());
            if self.contains(&binary_name(op, self.get(p).name(), &inner)) {
                trace!("pruned: ({}{}{}) reassociates", x.name(), op.symbol(), y.name());
                return true;
            }
        }

        // y = (_ op' (r op s))
        if let Some(q) = y.right() {
            if let Some((r, _)) = self.operands(self.get(q), op) {
                if r == li {
                    trace!("pruned: {} is nested in {}", x.name(), y.name());
                    return true;
                }
            }
        }

        // x = (p op q)
        if let Some((p, q)) = self.operands(x, op) {
            let p_name = self.get(p).name();
            let q_name = self.get(q).name();
            let first = binary_name(op, p_name, &binary_name(op, q_name, y.name()));
            let second = binary_name(op, q_name, &binary_name(op, p_name, y.name()));
            if self.contains(&first) || self.contains(&second) {
                trace!("pruned: ({}{}{}) reassociates", x.name(), op.symbol(), y.name());
                return true;
            }

            // y = (r op s)
            if let Some((r, _)) = self.operands(y, op) {
                if r == p || r == q {
                    trace!("pruned: {} and {} share an operand", x.name(), y.name());
                    return true;
                }
            }
        }

        false
    }

    /// Operands of `e` if its top operator is `op`.
    fn operands(&self, e: &Expression, op: BinaryOp) -> Option<(ExprId, ExprId)> {
        if !e.has_op(op) {
            return None;
        }
        e.left().zip(e.right())
    }
}
