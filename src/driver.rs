//! Running a search end to end.
//!
//! The [`Driver`] owns a seeded [`ExpressionPool`], runs the combination step
//! for levels `1..=max_level` and writes a line-oriented report:
//!
//! ```text
//! 15
//! 99
//! 757
//! 3 (a^(b^(b|c)))
//! 3 (a^(c&~b))
//! ...
//! ```
//!
//! One pool size per level (unless disabled), then `<cost> <name>` for every
//! expression computing the target, in pool order.

use std::io::Write;

use log::info;

use crate::error::SynthError;
use crate::expr::ExprId;
use crate::pool::ExpressionPool;
use crate::truth_table::{Domain, TruthTable};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Highest cost to generate. `0` searches the seeds only.
    pub max_level: u32,
    /// Truth table to look for.
    pub target: TruthTable,
    /// Write the pool size after each level.
    pub report_sizes: bool,
}

impl SearchConfig {
    pub fn new(max_level: u32, target: TruthTable) -> Self {
        Self {
            max_level,
            target,
            report_sizes: true,
        }
    }
}

#[derive(Debug)]
pub struct Driver {
    pool: ExpressionPool,
}

impl Driver {
    pub fn new(pool: ExpressionPool) -> Self {
        Self { pool }
    }

    /// A driver over the canonical variables `a, b, c, ...` of `domain`.
    pub fn with_variables(domain: Domain) -> Self {
        Self::new(ExpressionPool::with_variables(domain))
    }

    pub fn pool(&self) -> &ExpressionPool {
        &self.pool
    }

    pub fn into_pool(self) -> ExpressionPool {
        self.pool
    }

    /// Runs the search and reports every expression computing `config.target`.
    ///
    /// Levels already generated by an earlier run are not repeated, so calling
    /// this again with a larger `max_level` continues the search.
    pub fn run<W: Write>(
        &mut self,
        config: &SearchConfig,
        out: &mut W,
    ) -> Result<Vec<ExprId>, SynthError> {
        let width = self.pool.domain().width();
        if config.target.width() != width {
            return Err(SynthError::WidthMismatch {
                expected: width,
                got: config.target.width(),
            });
        }

        info!(
            "Searching for {} up to level {} over {} seeds",
            config.target,
            config.max_level,
            self.pool.len()
        );

        for level in (self.pool.level() + 1)..=config.max_level {
            self.pool.combine(level)?;
            if config.report_sizes {
                writeln!(out, "{}", self.pool.len())?;
            }
        }

        for (cost, count) in self.pool.count_by_cost() {
            info!("cost {}: {} expressions", cost, count);
        }

        let mut found = Vec::new();
        for (id, e) in self.pool.find(config.target) {
            writeln!(out, "{}", e)?;
            found.push(id);
        }
        info!("Found {} expressions for {}", found.len(), config.target);

        Ok(found)
    }
}
