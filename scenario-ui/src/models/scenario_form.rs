//! Form state for the four scenario panels.
//!
//! Every field keeps the raw text the user typed. [`ScenarioForm::update_field`]
//! returns a new form instead of mutating, and [`ScenarioForm::resolve`] turns the
//! text into typed inputs, substituting defaults field by field.

use std::{collections::BTreeMap, fmt, str::FromStr};

use rust_decimal::Decimal;
use scenario_core::{
    CurrentHomeInputs, InvestmentInputs, RenovateToLiveInputs, RenovateToRentInputs,
    ScenarioInputs, ScenarioKind, UnknownScenario,
};
use thiserror::Error;

use crate::utils::{
    parse_optional_period, parse_or_default, parse_percent_or_default, parse_period,
    rate_to_percent_text,
};

/// Error returned when a `scenario.field` key cannot be resolved to a [`FormField`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldKeyError {
    #[error("field key '{0}' must look like 'scenario.field'")]
    Malformed(String),

    #[error(transparent)]
    UnknownScenario(#[from] UnknownScenario),

    #[error("scenario '{scenario}' has no field '{field}'")]
    UnknownField { scenario: String, field: String },
}

/// How a field's text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUnit {
    Currency,
    Percent,
    Years,
}

impl FieldUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Currency => "R$",
            Self::Percent => "%",
            Self::Years => "years",
        }
    }
}

/// Every input field of every scenario panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    InvestmentInitialAmount,
    InvestmentAnnualReturn,
    InvestmentPeriod,

    LivePropertyValue,
    LiveRenovationCost,
    LiveMonthlyCondoFee,
    LiveAnnualIptu,
    LiveAnnualMaintenance,
    LiveAppreciation,
    LivePeriod,

    RentMonthlyRent,
    RentPeriod,

    HomePropertyValue,
    HomeAnnualIptu,
    HomeAnnualMaintenance,
    HomeRenovationCost,
    HomeAppreciation,
    HomeComparableRent,
    HomePeriod,
}

impl FormField {
    pub const ALL: [FormField; 19] = [
        Self::InvestmentInitialAmount,
        Self::InvestmentAnnualReturn,
        Self::InvestmentPeriod,
        Self::LivePropertyValue,
        Self::LiveRenovationCost,
        Self::LiveMonthlyCondoFee,
        Self::LiveAnnualIptu,
        Self::LiveAnnualMaintenance,
        Self::LiveAppreciation,
        Self::LivePeriod,
        Self::RentMonthlyRent,
        Self::RentPeriod,
        Self::HomePropertyValue,
        Self::HomeAnnualIptu,
        Self::HomeAnnualMaintenance,
        Self::HomeRenovationCost,
        Self::HomeAppreciation,
        Self::HomeComparableRent,
        Self::HomePeriod,
    ];

    /// Fields of one scenario panel, in display order.
    pub fn for_scenario(scenario: ScenarioKind) -> impl Iterator<Item = FormField> {
        Self::ALL
            .into_iter()
            .filter(move |field| field.scenario() == scenario)
    }

    pub fn scenario(&self) -> ScenarioKind {
        match self {
            Self::InvestmentInitialAmount | Self::InvestmentAnnualReturn | Self::InvestmentPeriod => {
                ScenarioKind::Investment
            }
            Self::LivePropertyValue
            | Self::LiveRenovationCost
            | Self::LiveMonthlyCondoFee
            | Self::LiveAnnualIptu
            | Self::LiveAnnualMaintenance
            | Self::LiveAppreciation
            | Self::LivePeriod => ScenarioKind::RenovateToLive,
            Self::RentMonthlyRent | Self::RentPeriod => ScenarioKind::RenovateToRent,
            Self::HomePropertyValue
            | Self::HomeAnnualIptu
            | Self::HomeAnnualMaintenance
            | Self::HomeRenovationCost
            | Self::HomeAppreciation
            | Self::HomeComparableRent
            | Self::HomePeriod => ScenarioKind::CurrentHome,
        }
    }

    /// Finds a field by its name within one scenario.
    pub fn lookup(
        scenario: ScenarioKind,
        name: &str,
    ) -> Result<FormField, FieldKeyError> {
        Self::for_scenario(scenario)
            .find(|candidate| candidate.name() == name)
            .ok_or_else(|| FieldKeyError::UnknownField {
                scenario: scenario.as_str().to_string(),
                field: name.to_string(),
            })
    }

    /// Field part of the key, unique within its scenario.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvestmentInitialAmount => "initial_amount",
            Self::InvestmentAnnualReturn => "annual_return_pct",
            Self::LivePropertyValue | Self::HomePropertyValue => "property_value",
            Self::LiveRenovationCost | Self::HomeRenovationCost => "renovation_cost",
            Self::LiveMonthlyCondoFee => "monthly_condo_fee",
            Self::LiveAnnualIptu | Self::HomeAnnualIptu => "annual_iptu",
            Self::LiveAnnualMaintenance | Self::HomeAnnualMaintenance => "annual_maintenance",
            Self::LiveAppreciation | Self::HomeAppreciation => "appreciation_pct",
            Self::RentMonthlyRent => "monthly_rent",
            Self::HomeComparableRent => "comparable_monthly_rent",
            Self::InvestmentPeriod | Self::LivePeriod | Self::RentPeriod | Self::HomePeriod => {
                "period_years"
            }
        }
    }

    /// Full key, e.g. `renovate_to_live.monthly_condo_fee`.
    pub fn key(&self) -> String {
        format!("{}.{}", self.scenario().as_str(), self.name())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InvestmentInitialAmount => "Initial amount",
            Self::InvestmentAnnualReturn => "Annual return",
            Self::InvestmentPeriod => "Period",
            Self::LivePropertyValue => "Property value",
            Self::LiveRenovationCost => "Renovation cost",
            Self::LiveMonthlyCondoFee => "Monthly condo fee",
            Self::LiveAnnualIptu | Self::HomeAnnualIptu => "Annual IPTU",
            Self::LiveAnnualMaintenance | Self::HomeAnnualMaintenance => "Annual maintenance",
            Self::LiveAppreciation | Self::HomeAppreciation => "Annual appreciation",
            Self::RentMonthlyRent => "Monthly rent",
            Self::HomePropertyValue => "Current home value",
            Self::HomeRenovationCost => "Renovation cost",
            Self::HomeComparableRent => "Comparable rent / month",
            Self::LivePeriod | Self::RentPeriod | Self::HomePeriod => "Period (informational)",
        }
    }

    pub fn unit(&self) -> FieldUnit {
        match self {
            Self::InvestmentAnnualReturn | Self::LiveAppreciation | Self::HomeAppreciation => {
                FieldUnit::Percent
            }
            Self::InvestmentPeriod | Self::LivePeriod | Self::RentPeriod | Self::HomePeriod => {
                FieldUnit::Years
            }
            _ => FieldUnit::Currency,
        }
    }

    /// Whether the projector reads this field. Per-scenario periods other than
    /// the investment one are collected but ignored.
    pub fn is_used(&self) -> bool {
        !matches!(self, Self::LivePeriod | Self::RentPeriod | Self::HomePeriod)
    }

    /// Text shown in an empty field: the value used when it stays blank.
    pub fn placeholder(
        &self,
        defaults: &ScenarioInputs,
    ) -> String {
        let amount = |value: Decimal| value.normalize().to_string();
        match self {
            Self::InvestmentInitialAmount => amount(defaults.investment.initial_amount),
            Self::InvestmentAnnualReturn => {
                rate_to_percent_text(defaults.investment.annual_return_rate)
            }
            Self::InvestmentPeriod | Self::LivePeriod | Self::RentPeriod | Self::HomePeriod => {
                defaults.period_years().to_string()
            }
            Self::LivePropertyValue => amount(defaults.renovate_to_live.property_value),
            Self::LiveRenovationCost => amount(defaults.renovate_to_live.renovation_cost),
            Self::LiveMonthlyCondoFee => amount(defaults.renovate_to_live.monthly_condo_fee),
            Self::LiveAnnualIptu => amount(defaults.renovate_to_live.annual_iptu),
            Self::LiveAnnualMaintenance => amount(defaults.renovate_to_live.annual_maintenance),
            Self::LiveAppreciation => {
                rate_to_percent_text(defaults.renovate_to_live.annual_appreciation_rate)
            }
            Self::RentMonthlyRent => amount(defaults.renovate_to_rent.monthly_rent),
            Self::HomePropertyValue => amount(defaults.current_home.property_value),
            Self::HomeAnnualIptu => amount(defaults.current_home.annual_iptu),
            Self::HomeAnnualMaintenance => amount(defaults.current_home.annual_maintenance),
            Self::HomeRenovationCost => amount(defaults.current_home.renovation_cost),
            Self::HomeAppreciation => {
                rate_to_percent_text(defaults.current_home.annual_appreciation_rate)
            }
            Self::HomeComparableRent => amount(defaults.current_home.comparable_monthly_rent),
        }
    }
}

impl FromStr for FormField {
    type Err = FieldKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scenario, field) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| FieldKeyError::Malformed(s.to_string()))?;
        Self::lookup(scenario.parse::<ScenarioKind>()?, field)
    }
}

impl fmt::Display for FormField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Raw text of every field in the four scenario panels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioForm {
    values: BTreeMap<FormField, String>,
}

impl ScenarioForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The all-blank form used after a full reset.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Current text of a field; blank fields read as `""`.
    pub fn value(
        &self,
        field: FormField,
    ) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Returns a copy of the form with one field replaced.
    pub fn update_field(
        &self,
        field: FormField,
        value: impl Into<String>,
    ) -> Self {
        let value = value.into();
        let mut values = self.values.clone();
        if value.is_empty() {
            values.remove(&field);
        } else {
            values.insert(field, value);
        }
        Self { values }
    }

    /// Fields holding text, in field order.
    pub fn filled(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn is_blank(&self) -> bool {
        self.values.is_empty()
    }

    /// Typed inputs for the projector, with `defaults` standing in for every
    /// blank or non-numeric field independently.
    pub fn resolve(
        &self,
        defaults: &ScenarioInputs,
    ) -> ScenarioInputs {
        let amount = |field: FormField, default: Decimal| parse_or_default(self.value(field), default);
        let rate =
            |field: FormField, default: Decimal| parse_percent_or_default(self.value(field), default);
        let informational_period = |field: FormField| parse_optional_period(self.value(field));

        let live = &defaults.renovate_to_live;
        let home = &defaults.current_home;

        ScenarioInputs {
            investment: InvestmentInputs {
                initial_amount: amount(
                    FormField::InvestmentInitialAmount,
                    defaults.investment.initial_amount,
                ),
                annual_return_rate: rate(
                    FormField::InvestmentAnnualReturn,
                    defaults.investment.annual_return_rate,
                ),
                period_years: parse_period(
                    self.value(FormField::InvestmentPeriod),
                    defaults.period_years(),
                ),
            },
            renovate_to_live: RenovateToLiveInputs {
                property_value: amount(FormField::LivePropertyValue, live.property_value),
                renovation_cost: amount(FormField::LiveRenovationCost, live.renovation_cost),
                monthly_condo_fee: amount(FormField::LiveMonthlyCondoFee, live.monthly_condo_fee),
                annual_iptu: amount(FormField::LiveAnnualIptu, live.annual_iptu),
                annual_maintenance: amount(
                    FormField::LiveAnnualMaintenance,
                    live.annual_maintenance,
                ),
                annual_appreciation_rate: rate(
                    FormField::LiveAppreciation,
                    live.annual_appreciation_rate,
                ),
                period_years: informational_period(FormField::LivePeriod),
            },
            renovate_to_rent: RenovateToRentInputs {
                monthly_rent: amount(
                    FormField::RentMonthlyRent,
                    defaults.renovate_to_rent.monthly_rent,
                ),
                period_years: informational_period(FormField::RentPeriod),
            },
            current_home: CurrentHomeInputs {
                property_value: amount(FormField::HomePropertyValue, home.property_value),
                annual_iptu: amount(FormField::HomeAnnualIptu, home.annual_iptu),
                annual_maintenance: amount(
                    FormField::HomeAnnualMaintenance,
                    home.annual_maintenance,
                ),
                renovation_cost: amount(FormField::HomeRenovationCost, home.renovation_cost),
                annual_appreciation_rate: rate(
                    FormField::HomeAppreciation,
                    home.annual_appreciation_rate,
                ),
                comparable_monthly_rent: amount(
                    FormField::HomeComparableRent,
                    home.comparable_monthly_rent,
                ),
                period_years: informational_period(FormField::HomePeriod),
            },
        }
    }
}

/// Reducer form of [`ScenarioForm::update_field`].
pub fn update_field(
    form: &ScenarioForm,
    field: FormField,
    value: impl Into<String>,
) -> ScenarioForm {
    form.update_field(field, value)
}

/// Reducer keyed by scenario and field name, e.g.
/// `(RenovateToLive, "monthly_condo_fee")`.
pub fn update_scenario_field(
    form: &ScenarioForm,
    scenario: ScenarioKind,
    field: &str,
    value: impl Into<String>,
) -> Result<ScenarioForm, FieldKeyError> {
    let field = FormField::lookup(scenario, field)?;
    Ok(form.update_field(field, value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // FormField tests
    // =========================================================================

    #[test]
    fn every_key_parses_back_to_its_field() {
        for field in FormField::ALL {
            assert_eq!(field.key().parse::<FormField>(), Ok(field));
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<String> = FormField::ALL.iter().map(FormField::key).collect();
        keys.sort();
        keys.dedup();

        assert_eq!(keys.len(), FormField::ALL.len());
    }

    #[test]
    fn parse_rejects_key_without_dot() {
        assert_eq!(
            "initial_amount".parse::<FormField>(),
            Err(FieldKeyError::Malformed("initial_amount".to_string()))
        );
    }

    #[test]
    fn parse_rejects_unknown_scenario() {
        let err = "boat.initial_amount".parse::<FormField>().unwrap_err();

        assert_eq!(err.to_string(), "unknown scenario 'boat'");
    }

    #[test]
    fn parse_rejects_field_from_other_scenario() {
        assert_eq!(
            "investment.monthly_rent".parse::<FormField>(),
            Err(FieldKeyError::UnknownField {
                scenario: "investment".to_string(),
                field: "monthly_rent".to_string(),
            })
        );
    }

    #[test]
    fn renovate_to_rent_panel_owns_only_rent_and_period() {
        let fields: Vec<FormField> = FormField::for_scenario(ScenarioKind::RenovateToRent).collect();

        assert_eq!(fields, vec![FormField::RentMonthlyRent, FormField::RentPeriod]);
    }

    #[test]
    fn placeholders_show_defaults_in_form_units() {
        let defaults = ScenarioInputs::default();

        assert_eq!(FormField::InvestmentInitialAmount.placeholder(&defaults), "100000");
        assert_eq!(FormField::InvestmentAnnualReturn.placeholder(&defaults), "10");
        assert_eq!(FormField::LiveAppreciation.placeholder(&defaults), "5");
        assert_eq!(FormField::HomeRenovationCost.placeholder(&defaults), "0");
        assert_eq!(FormField::HomePeriod.placeholder(&defaults), "10");
    }

    // =========================================================================
    // update_field tests
    // =========================================================================

    #[test]
    fn update_field_leaves_input_form_untouched() {
        let form = ScenarioForm::new();

        let updated = update_field(&form, FormField::InvestmentInitialAmount, "150000");

        assert_eq!(form.value(FormField::InvestmentInitialAmount), "");
        assert_eq!(updated.value(FormField::InvestmentInitialAmount), "150000");
    }

    #[test]
    fn update_field_with_blank_clears_the_field() {
        let form = ScenarioForm::new().update_field(FormField::RentMonthlyRent, "1800");

        let cleared = form.update_field(FormField::RentMonthlyRent, "");

        assert!(cleared.is_blank());
    }

    #[test]
    fn update_scenario_field_resolves_names_within_scenario() {
        let form = ScenarioForm::new();

        let updated =
            update_scenario_field(&form, ScenarioKind::CurrentHome, "renovation_cost", "15000")
                .expect("known field");

        assert_eq!(updated.value(FormField::HomeRenovationCost), "15000");
        assert_eq!(updated.value(FormField::LiveRenovationCost), "");
        assert!(
            update_scenario_field(&form, ScenarioKind::RenovateToRent, "property_value", "1")
                .is_err()
        );
    }

    #[test]
    fn cleared_form_is_blank() {
        assert!(ScenarioForm::cleared().is_blank());
    }

    // =========================================================================
    // resolve tests
    // =========================================================================

    #[test]
    fn blank_form_resolves_to_defaults() {
        let defaults = ScenarioInputs::default();

        assert_eq!(ScenarioForm::new().resolve(&defaults), defaults);
    }

    #[test]
    fn resolve_converts_percent_text_to_rates() {
        let form = ScenarioForm::new()
            .update_field(FormField::InvestmentAnnualReturn, "12")
            .update_field(FormField::HomeAppreciation, "3.5");

        let inputs = form.resolve(&ScenarioInputs::default());

        assert_eq!(inputs.investment.annual_return_rate, dec!(0.12));
        assert_eq!(inputs.current_home.annual_appreciation_rate, dec!(0.035));
    }

    #[test]
    fn one_invalid_field_falls_back_alone() {
        let form = ScenarioForm::new()
            .update_field(FormField::LivePropertyValue, "lots")
            .update_field(FormField::LiveRenovationCost, "80,000");

        let inputs = form.resolve(&ScenarioInputs::default());

        assert_eq!(inputs.renovate_to_live.property_value, dec!(300000));
        assert_eq!(inputs.renovate_to_live.renovation_cost, dec!(80000));
        assert_eq!(inputs.renovate_to_live.monthly_condo_fee, dec!(500));
    }

    #[test]
    fn informational_periods_are_kept_but_not_shared() {
        let form = ScenarioForm::new()
            .update_field(FormField::InvestmentPeriod, "5")
            .update_field(FormField::HomePeriod, "20");

        let inputs = form.resolve(&ScenarioInputs::default());

        assert_eq!(inputs.period_years(), 5);
        assert_eq!(inputs.current_home.period_years, Some(20));
        assert_eq!(inputs.renovate_to_live.period_years, None);
    }

    #[test]
    fn resolve_uses_supplied_defaults() {
        let mut defaults = ScenarioInputs::default();
        defaults.renovate_to_rent.monthly_rent = dec!(3100);

        let inputs = ScenarioForm::new().resolve(&defaults);

        assert_eq!(inputs.renovate_to_rent.monthly_rent, dec!(3100));
    }
}
