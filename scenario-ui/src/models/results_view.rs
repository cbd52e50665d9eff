//! Display-ready data derived from one [`ProjectionResults`].

use rust_decimal::Decimal;
use scenario_core::{ProjectionResults, ScenarioKind, ScenarioResult};

use crate::utils::{format_currency, format_roi};

/// Closing notes shown under every recommendation.
pub const CONSIDERATIONS: [&str; 4] = [
    "These figures are estimates built on fixed annual rates.",
    "Weigh liquidity, risk and personal preference alongside the numbers.",
    "Inflation and taxes are not included and can change the ranking.",
    "Talk to a financial advisor before committing to a decision.",
];

/// One scenario's summary card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub kind: ScenarioKind,
    pub title: &'static str,
    pub total_return: String,
    pub total_cost: String,
    pub net_return: String,
    pub roi: String,

    /// Net return at or above zero; drives the green/red accent.
    pub net_positive: bool,
    pub roi_positive: bool,
}

impl ResultCard {
    pub fn from_result(result: &ScenarioResult) -> Self {
        Self {
            kind: result.kind,
            title: result.name(),
            total_return: format_currency(result.total_return),
            total_cost: format_currency(result.total_cost),
            net_return: format_currency(result.net_return),
            roi: format_roi(result.roi),
            net_positive: result.net_return >= Decimal::ZERO,
            roi_positive: result.roi.is_some_and(|roi| roi >= Decimal::ZERO),
        }
    }
}

pub fn result_cards(results: &ProjectionResults) -> Vec<ResultCard> {
    results.iter().map(ResultCard::from_result).collect()
}

/// One bar in the net-return chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartDatum {
    pub kind: ScenarioKind,
    pub label: &'static str,
    pub net_return: Decimal,
}

pub fn chart_data(results: &ProjectionResults) -> Vec<ChartDatum> {
    results
        .iter()
        .map(|result| ChartDatum {
            kind: result.kind,
            label: result.kind.short_label(),
            net_return: result.net_return,
        })
        .collect()
}

/// A scenario's slice of the net-return distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub kind: ScenarioKind,
    pub label: &'static str,
    pub net_return: Decimal,

    /// Percentage of the sum of positive net returns, 0 to 100.
    pub share: Decimal,
}

/// Splits the positive net returns into percentage shares.
///
/// Non-positive net returns get a zero share, and all shares are zero when
/// no scenario ends positive.
pub fn pie_slices(results: &ProjectionResults) -> Vec<PieSlice> {
    let positive_total = results
        .iter()
        .map(|result| result.net_return.max(Decimal::ZERO))
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value));

    results
        .iter()
        .map(|result| {
            let share = if result.net_return > Decimal::ZERO {
                result
                    .net_return
                    .checked_div(positive_total)
                    .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                    .unwrap_or(Decimal::ZERO)
            } else {
                Decimal::ZERO
            };
            PieSlice {
                kind: result.kind,
                label: result.kind.short_label(),
                net_return: result.net_return,
                share,
            }
        })
        .collect()
}

/// Best and worst outcome written out for the recommendation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub best: ScenarioKind,
    pub worst: ScenarioKind,
    pub best_line: String,
    pub worst_line: String,
}

impl Recommendation {
    pub fn from_results(results: &ProjectionResults) -> Self {
        let comparison = results.comparison();
        let best = comparison.best;
        let worst = comparison.worst;

        Self {
            best: best.kind,
            worst: worst.kind,
            best_line: format!(
                "Best option: {}, with a net return of {} (ROI {}).",
                best.name(),
                format_currency(best.net_return),
                format_roi(best.roi),
            ),
            worst_line: format!(
                "Least favourable: {}, with a net return of {} (ROI {}).",
                worst.name(),
                format_currency(worst.net_return),
                format_roi(worst.roi),
            ),
        }
    }

    pub fn considerations(&self) -> &'static [&'static str] {
        &CONSIDERATIONS
    }
}
