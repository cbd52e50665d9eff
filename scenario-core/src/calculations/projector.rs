//! Projection of the four scenarios over one shared horizon.
//!
//! # Formulas
//!
//! `n` is the horizon in years, taken from the investment scenario.
//!
//! | Scenario | Total return | Total cost | ROI base |
//! |----------|--------------|------------|----------|
//! | Investment | `amount × (1 + r)^n` | `amount` | total cost |
//! | Renovate to live | `value × (1 + a)^n` | `renovation + (12 × condo + IPTU + maintenance) × n` | renovation cost |
//! | Renovate to rent | live return `+ 12 × rent × n` | same as renovate to live | renovation cost |
//! | Current home | `value × (1 + a)^n + 12 × comparable rent × n` | `(IPTU + maintenance) × n + renovation` | property value |
//!
//! Net return is always total return minus total cost. Renovate to rent
//! reuses the renovate-to-live property, so both share future value and cost.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use scenario_core::{ScenarioInputs, project};
//!
//! let results = project(&ScenarioInputs::default());
//!
//! assert_eq!(results.period_years, 10);
//! assert_eq!(results.investment.total_return, dec!(259374.24601));
//! assert_eq!(results.renovate_to_live.total_cost, dec!(160000));
//! assert_eq!(results.comparison().best.kind, scenario_core::ScenarioKind::CurrentHome);
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{annualize, grow, over_years, roi_percent};
use crate::{
    CurrentHomeInputs, InvestmentInputs, ProjectionResults, RenovateToLiveInputs,
    RenovateToRentInputs, ScenarioInputs, ScenarioKind, ScenarioResult,
};

/// Projects all four scenarios from one set of inputs.
///
/// Pure and infallible: identical inputs always give identical results.
pub fn project(inputs: &ScenarioInputs) -> ProjectionResults {
    ScenarioProjector::new(inputs).project()
}

/// Future value and accumulated cost of a renovated apartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PropertyProjection {
    future_value: Decimal,
    total_costs: Decimal,
}

/// Calculator for the scenario comparison.
#[derive(Debug, Clone)]
pub struct ScenarioProjector<'a> {
    inputs: &'a ScenarioInputs,
}

impl<'a> ScenarioProjector<'a> {
    pub fn new(inputs: &'a ScenarioInputs) -> Self {
        Self { inputs }
    }

    /// Runs every scenario over the investment horizon.
    pub fn project(&self) -> ProjectionResults {
        let years = self.inputs.period_years();

        let property = self.renovated_property(&self.inputs.renovate_to_live, years);

        let results = ProjectionResults {
            period_years: years,
            investment: self.investment(&self.inputs.investment, years),
            renovate_to_live: self.renovate_to_live(&self.inputs.renovate_to_live, property),
            renovate_to_rent: self.renovate_to_rent(
                &self.inputs.renovate_to_rent,
                &self.inputs.renovate_to_live,
                property,
                years,
            ),
            current_home: self.current_home(&self.inputs.current_home, years),
        };

        debug!(
            years,
            investment = %results.investment.net_return,
            renovate_to_live = %results.renovate_to_live.net_return,
            renovate_to_rent = %results.renovate_to_rent.net_return,
            current_home = %results.current_home.net_return,
            "projected scenarios"
        );

        results
    }

    fn investment(
        &self,
        input: &InvestmentInputs,
        years: u32,
    ) -> ScenarioResult {
        let total_return = grow(input.initial_amount, input.annual_return_rate, years);
        let total_cost = input.initial_amount;
        let net_return = total_return.saturating_sub(total_cost);

        ScenarioResult {
            kind: ScenarioKind::Investment,
            total_return,
            total_cost,
            net_return,
            roi: roi_percent(net_return, total_cost),
        }
    }

    /// Condo fee, IPTU and maintenance for one year.
    fn property_annual_costs(
        &self,
        input: &RenovateToLiveInputs,
    ) -> Decimal {
        annualize(input.monthly_condo_fee)
            .saturating_add(input.annual_iptu)
            .saturating_add(input.annual_maintenance)
    }

    fn renovated_property(
        &self,
        input: &RenovateToLiveInputs,
        years: u32,
    ) -> PropertyProjection {
        let annual_costs = self.property_annual_costs(input);

        PropertyProjection {
            future_value: grow(input.property_value, input.annual_appreciation_rate, years),
            total_costs: input
                .renovation_cost
                .saturating_add(over_years(annual_costs, years)),
        }
    }

    fn renovate_to_live(
        &self,
        input: &RenovateToLiveInputs,
        property: PropertyProjection,
    ) -> ScenarioResult {
        let net_return = property.future_value.saturating_sub(property.total_costs);

        ScenarioResult {
            kind: ScenarioKind::RenovateToLive,
            total_return: property.future_value,
            total_cost: property.total_costs,
            net_return,
            roi: roi_percent(net_return, input.renovation_cost),
        }
    }

    fn renovate_to_rent(
        &self,
        input: &RenovateToRentInputs,
        property_input: &RenovateToLiveInputs,
        property: PropertyProjection,
        years: u32,
    ) -> ScenarioResult {
        let rent_income = over_years(annualize(input.monthly_rent), years);
        let total_return = property.future_value.saturating_add(rent_income);
        let net_return = total_return.saturating_sub(property.total_costs);

        ScenarioResult {
            kind: ScenarioKind::RenovateToRent,
            total_return,
            total_cost: property.total_costs,
            net_return,
            roi: roi_percent(net_return, property_input.renovation_cost),
        }
    }

    fn current_home(
        &self,
        input: &CurrentHomeInputs,
        years: u32,
    ) -> ScenarioResult {
        let annual_costs = input.annual_iptu.saturating_add(input.annual_maintenance);
        let total_cost = over_years(annual_costs, years).saturating_add(input.renovation_cost);
        let future_value = grow(input.property_value, input.annual_appreciation_rate, years);
        let opportunity_cost = over_years(annualize(input.comparable_monthly_rent), years);
        let total_return = future_value.saturating_add(opportunity_cost);
        let net_return = total_return.saturating_sub(total_cost);

        ScenarioResult {
            kind: ScenarioKind::CurrentHome,
            total_return,
            total_cost,
            net_return,
            roi: roi_percent(net_return, input.property_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::DEFAULT_PERIOD_YEARS;
    use crate::calculations::common::round_half_up;

    fn rounded(value: Option<Decimal>) -> Option<Decimal> {
        value.map(round_half_up)
    }

    // =========================================================================
    // investment tests
    // =========================================================================

    #[test]
    fn investment_with_defaults() {
        let results = project(&ScenarioInputs::default());
        let r = &results.investment;

        assert_eq!(r.total_return, dec!(259374.24601));
        assert_eq!(r.total_cost, dec!(100000));
        assert_eq!(r.net_return, dec!(159374.24601));
        assert_eq!(rounded(r.roi), Some(dec!(159.37)));
    }

    #[test]
    fn investment_net_return_is_amount_times_growth_minus_one() {
        let mut inputs = ScenarioInputs::default();
        inputs.investment.initial_amount = dec!(25000);
        inputs.investment.annual_return_rate = dec!(0.08);
        inputs.investment.period_years = 3;

        let r = project(&inputs).investment;

        // 25000 × (1.08³ − 1) = 25000 × 0.259712
        assert_eq!(r.net_return, dec!(6492.8));
    }

    #[test]
    fn investment_roi_is_none_for_zero_amount() {
        let mut inputs = ScenarioInputs::default();
        inputs.investment.initial_amount = Decimal::ZERO;

        let r = project(&inputs).investment;

        assert_eq!(r.net_return, Decimal::ZERO);
        assert_eq!(r.roi, None);
    }

    // =========================================================================
    // renovate to live tests
    // =========================================================================

    #[test]
    fn renovate_to_live_with_defaults() {
        let results = project(&ScenarioInputs::default());
        let r = &results.renovate_to_live;

        assert_eq!(r.total_cost, dec!(160000));
        assert_eq!(round_half_up(r.total_return), dec!(488668.39));
        assert_eq!(round_half_up(r.net_return), dec!(328668.39));
        assert_eq!(rounded(r.roi), Some(dec!(657.34)));
    }

    #[test]
    fn renovate_to_live_roi_uses_renovation_cost_only() {
        let mut inputs = ScenarioInputs::default();
        inputs.renovate_to_live.property_value = dec!(100000);
        inputs.renovate_to_live.renovation_cost = dec!(10000);
        inputs.renovate_to_live.monthly_condo_fee = Decimal::ZERO;
        inputs.renovate_to_live.annual_iptu = Decimal::ZERO;
        inputs.renovate_to_live.annual_maintenance = Decimal::ZERO;
        inputs.renovate_to_live.annual_appreciation_rate = Decimal::ZERO;

        let r = project(&inputs).renovate_to_live;

        assert_eq!(r.net_return, dec!(90000));
        assert_eq!(r.roi, Some(dec!(900)));
    }

    #[test]
    fn renovate_to_live_roi_is_none_for_zero_renovation_cost() {
        let mut inputs = ScenarioInputs::default();
        inputs.renovate_to_live.renovation_cost = Decimal::ZERO;

        let results = project(&inputs);

        assert_eq!(results.renovate_to_live.roi, None);
        assert_eq!(results.renovate_to_rent.roi, None);
        assert_eq!(results.renovate_to_live.total_cost, dec!(110000));
    }

    // =========================================================================
    // renovate to rent tests
    // =========================================================================

    #[test]
    fn renovate_to_rent_adds_rent_income_to_live_scenario() {
        let results = project(&ScenarioInputs::default());
        let live = &results.renovate_to_live;
        let rent = &results.renovate_to_rent;

        assert_eq!(rent.total_cost, live.total_cost);
        assert_eq!(rent.total_return - live.total_return, dec!(240000));
        assert_eq!(rent.net_return - live.net_return, dec!(240000));
        assert_eq!(rounded(rent.roi), Some(dec!(1137.34)));
    }

    #[test]
    fn renovate_to_rent_follows_live_property_inputs() {
        let mut inputs = ScenarioInputs::default();
        inputs.renovate_to_live.property_value = dec!(500000);

        let results = project(&inputs);

        assert_eq!(
            results.renovate_to_rent.total_return,
            results.renovate_to_live.total_return + dec!(240000)
        );
    }

    // =========================================================================
    // current home tests
    // =========================================================================

    #[test]
    fn current_home_with_defaults() {
        let results = project(&ScenarioInputs::default());
        let r = &results.current_home;

        assert_eq!(r.total_cost, dec!(50000));
        assert_eq!(round_half_up(r.total_return), dec!(892097.71));
        assert_eq!(round_half_up(r.net_return), dec!(842097.71));
        assert_eq!(rounded(r.roi), Some(dec!(210.52)));
    }

    #[test]
    fn current_home_adds_renovation_cost_once() {
        let mut inputs = ScenarioInputs::default();
        inputs.current_home.renovation_cost = dec!(20000);

        let r = project(&inputs).current_home;

        assert_eq!(r.total_cost, dec!(70000));
    }

    #[test]
    fn current_home_roi_is_none_for_zero_property_value() {
        let mut inputs = ScenarioInputs::default();
        inputs.current_home.property_value = Decimal::ZERO;

        let r = project(&inputs).current_home;

        // Only the comparable rent remains: 300000 − 50000
        assert_eq!(r.net_return, dec!(250000));
        assert_eq!(r.roi, None);
    }

    // =========================================================================
    // shared horizon tests
    // =========================================================================

    #[test]
    fn every_scenario_uses_investment_period() {
        let mut inputs = ScenarioInputs::default();
        inputs.investment.period_years = 1;
        inputs.renovate_to_live.period_years = Some(30);
        inputs.renovate_to_rent.period_years = Some(30);
        inputs.current_home.period_years = Some(30);

        let results = project(&inputs);

        assert_eq!(results.period_years, 1);
        assert_eq!(results.renovate_to_live.total_cost, dec!(61000));
        assert_eq!(results.renovate_to_rent.total_return, dec!(339000));
        assert_eq!(results.current_home.total_return, dec!(446000));
    }

    #[test]
    fn zero_year_horizon_falls_back_to_default_period() {
        let mut inputs = ScenarioInputs::default();
        inputs.investment.period_years = 0;

        let results = project(&inputs);

        assert_eq!(results.period_years, DEFAULT_PERIOD_YEARS);
        assert_eq!(results, project(&ScenarioInputs::default()));
    }

    #[test]
    fn longest_horizon_projects_without_overflowing() {
        let mut inputs = ScenarioInputs::default();
        inputs.investment.period_years = u32::MAX;

        let results = project(&inputs);

        assert_eq!(results.period_years, u32::MAX);
        assert_eq!(results.investment.total_return, Decimal::MAX);
        assert_eq!(results.renovate_to_live.total_return, Decimal::MAX);
    }

    #[test]
    fn projection_is_deterministic() {
        let inputs = ScenarioInputs::default();

        assert_eq!(project(&inputs), project(&inputs));
    }

    #[test]
    fn extreme_inputs_saturate_instead_of_panicking() {
        let mut inputs = ScenarioInputs::default();
        inputs.investment.initial_amount = Decimal::MAX;
        inputs.investment.annual_return_rate = dec!(10);
        inputs.investment.period_years = 100;

        let r = project(&inputs).investment;

        assert_eq!(r.total_return, Decimal::MAX);
        assert_eq!(r.net_return, Decimal::ZERO);
    }
}
