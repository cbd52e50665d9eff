//! Typed inputs for the four scenarios.
//!
//! Rates are fractions (`0.10` is 10 %). Every struct's [`Default`] carries the
//! fallback value used when the matching form field is blank or not a number.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Projection horizon used when the investment period is blank or not positive.
pub const DEFAULT_PERIOD_YEARS: u32 = 10;

/// Money kept in a financial investment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentInputs {
    pub initial_amount: Decimal,
    pub annual_return_rate: Decimal,

    /// Horizon shared by all four scenarios.
    pub period_years: u32,
}

impl Default for InvestmentInputs {
    fn default() -> Self {
        Self {
            initial_amount: dec!(100000),
            annual_return_rate: dec!(0.10),
            period_years: DEFAULT_PERIOD_YEARS,
        }
    }
}

/// An apartment renovated and then lived in.
///
/// The renovate-to-rent scenario projects the same property, so these values
/// also drive [`RenovateToRentInputs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenovateToLiveInputs {
    pub property_value: Decimal,
    pub renovation_cost: Decimal,
    pub monthly_condo_fee: Decimal,

    /// Annual municipal property tax (IPTU).
    pub annual_iptu: Decimal,
    pub annual_maintenance: Decimal,
    pub annual_appreciation_rate: Decimal,

    /// Collected by the form but not read by the projector, which uses
    /// [`InvestmentInputs::period_years`].
    pub period_years: Option<u32>,
}

impl Default for RenovateToLiveInputs {
    fn default() -> Self {
        Self {
            property_value: dec!(300000),
            renovation_cost: dec!(50000),
            monthly_condo_fee: dec!(500),
            annual_iptu: dec!(3000),
            annual_maintenance: dec!(2000),
            annual_appreciation_rate: dec!(0.05),
            period_years: None,
        }
    }
}

/// The renovated apartment put up for rent.
///
/// Only the rent is owned here. Property value, renovation cost, fees,
/// appreciation and horizon come from [`RenovateToLiveInputs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenovateToRentInputs {
    pub monthly_rent: Decimal,

    /// Collected by the form but not read by the projector.
    pub period_years: Option<u32>,
}

impl Default for RenovateToRentInputs {
    fn default() -> Self {
        Self {
            monthly_rent: dec!(2000),
            period_years: None,
        }
    }
}

/// Staying in the home already owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentHomeInputs {
    pub property_value: Decimal,
    pub annual_iptu: Decimal,
    pub annual_maintenance: Decimal,
    pub renovation_cost: Decimal,
    pub annual_appreciation_rate: Decimal,

    /// Monthly rent a comparable home would fetch, counted as a notional gain.
    pub comparable_monthly_rent: Decimal,

    /// Collected by the form but not read by the projector.
    pub period_years: Option<u32>,
}

impl Default for CurrentHomeInputs {
    fn default() -> Self {
        Self {
            property_value: dec!(400000),
            annual_iptu: dec!(2000),
            annual_maintenance: dec!(3000),
            renovation_cost: Decimal::ZERO,
            annual_appreciation_rate: dec!(0.04),
            comparable_monthly_rent: dec!(2500),
            period_years: None,
        }
    }
}

/// Parameters for all four scenarios, projected together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    pub investment: InvestmentInputs,
    pub renovate_to_live: RenovateToLiveInputs,
    pub renovate_to_rent: RenovateToRentInputs,
    pub current_home: CurrentHomeInputs,
}

impl ScenarioInputs {
    /// The single horizon every scenario is projected over.
    ///
    /// A zero period falls back to [`DEFAULT_PERIOD_YEARS`].
    pub fn period_years(&self) -> u32 {
        match self.investment.period_years {
            0 => DEFAULT_PERIOD_YEARS,
            years => years,
        }
    }
}
