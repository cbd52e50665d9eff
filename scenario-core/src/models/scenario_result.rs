use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ScenarioKind;

/// Projected outcome of one scenario over the shared horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub kind: ScenarioKind,

    /// Everything the scenario yields at the end of the horizon.
    pub total_return: Decimal,

    /// Everything spent over the horizon.
    pub total_cost: Decimal,

    pub net_return: Decimal,

    /// Net return as a percentage of the scenario's cost base.
    /// `None` when that cost base is zero.
    pub roi: Option<Decimal>,
}

impl ScenarioResult {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// One complete calculation pass. A new pass replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResults {
    pub period_years: u32,
    pub investment: ScenarioResult,
    pub renovate_to_live: ScenarioResult,
    pub renovate_to_rent: ScenarioResult,
    pub current_home: ScenarioResult,
}

impl ProjectionResults {
    /// Results in scenario display order.
    pub fn iter(&self) -> impl Iterator<Item = &ScenarioResult> {
        [
            &self.investment,
            &self.renovate_to_live,
            &self.renovate_to_rent,
            &self.current_home,
        ]
        .into_iter()
    }

    pub fn get(
        &self,
        kind: ScenarioKind,
    ) -> &ScenarioResult {
        match kind {
            ScenarioKind::Investment => &self.investment,
            ScenarioKind::RenovateToLive => &self.renovate_to_live,
            ScenarioKind::RenovateToRent => &self.renovate_to_rent,
            ScenarioKind::CurrentHome => &self.current_home,
        }
    }
}
