//! Best and worst scenario by net return.
//!
//! The comparison is a view over a [`ProjectionResults`] and is never stored
//! on its own; recompute it whenever the results change.

use crate::{ProjectionResults, ScenarioResult};

/// Best and worst scenarios of one calculation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison<'a> {
    pub best: &'a ScenarioResult,
    pub worst: &'a ScenarioResult,
}

impl<'a> Comparison<'a> {
    /// Linear scan in scenario order with strict comparisons, so the
    /// first scenario seen wins a tie.
    pub fn of(results: &'a ProjectionResults) -> Self {
        let mut best = &results.investment;
        let mut worst = &results.investment;

        for result in results.iter().skip(1) {
            if result.net_return > best.net_return {
                best = result;
            }
            if result.net_return < worst.net_return {
                worst = result;
            }
        }

        Self { best, worst }
    }
}

impl ProjectionResults {
    pub fn comparison(&self) -> Comparison<'_> {
        Comparison::of(self)
    }
}
