//! # logic-synth: exhaustive synthesis of small Boolean circuits
//!
//! **`logic-synth`** finds every small formula over `~`, `&`, `|` and `^` that
//! computes a given truth table. Starting from a handful of named base
//! functions, it enumerates expressions level by level in order of increasing
//! operation count and reports the ones matching a target.
//!
//! ## How it works
//!
//! - Every expression carries its **truth table**, a `u64` bitmask over all
//!   `2^n` input assignments, so evaluating a candidate is a single bitwise op.
//! - Expressions are identified by their **canonical name**, e.g. `(a^(c&~b))`.
//!   The name doubles as the deduplication key of the pool.
//! - Level `k` only combines expressions whose costs add up to `k`, so the
//!   search visits cheaper formulas first.
//! - Structural **pruning** skips double negations, value-redundant
//!   combinations and most re-associations of `&`, `|`, `^`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use logic_synth::pool::ExpressionPool;
//! use logic_synth::truth_table::Domain;
//!
//! // Three inputs: a = 0x0f, b = 0x33, c = 0x55.
//! let domain = Domain::new(3).unwrap();
//! let mut pool = ExpressionPool::with_variables(domain);
//!
//! for level in 1..=3 {
//!     pool.combine(level).unwrap();
//! }
//!
//! // a ^ (~b & c)
//! let target = domain.table(0x4b).unwrap();
//! let names: Vec<_> = pool.find(target).map(|(_, e)| e.name().to_string()).collect();
//! assert!(names.contains(&"(a^(c&~b))".to_string()));
//! ```
//!
//! ## Core Components
//!
//! - **[`pool`]**: the [`ExpressionPool`][crate::pool::ExpressionPool] and the combination step.
//! - **[`expr`]**: immutable expression nodes.
//! - **[`driver`]**: runs a search and writes the report.

pub mod driver;
pub mod error;
pub mod expr;
pub mod op;
pub mod pool;
pub mod truth_table;
