//! CSV export of projection results, one line per scenario per comparison.

use std::io;

use rust_decimal::Decimal;
use scenario_core::{
    ProjectionResults, ScenarioKind,
    calculations::{Comparison, common::round_half_up},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    comparison: &'a str,
    period_years: u32,
    scenario: &'static str,
    total_return: String,
    total_cost: String,
    net_return: String,
    roi_pct: Option<String>,
    rank: &'static str,
}

fn cents(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// A single scenario is both best and worst when every net return ties.
fn rank(
    kind: ScenarioKind,
    comparison: &Comparison<'_>,
) -> &'static str {
    match (kind == comparison.best.kind, kind == comparison.worst.kind) {
        (true, true) => "best,worst",
        (true, false) => "best",
        (false, true) => "worst",
        (false, false) => "",
    }
}

/// Writes every scenario of every labelled result set as CSV.
///
/// Amounts and ROI are rounded half-up to two decimals; an undefined ROI is an
/// empty cell.
/// `rank` is `best`, `worst`, `best,worst` or empty.
pub fn write_results<W: io::Write>(
    writer: W,
    results: &[(String, ProjectionResults)],
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    for (label, projection) in results {
        let comparison = projection.comparison();
        for result in projection.iter() {
            wtr.serialize(ResultRow {
                comparison: label,
                period_years: projection.period_years,
                scenario: result.kind.as_str(),
                total_return: cents(result.total_return),
                total_cost: cents(result.total_cost),
                net_return: cents(result.net_return),
                roi_pct: result.roi.map(cents),
                rank: rank(result.kind, &comparison),
            })?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scenario_core::{ScenarioInputs, project};

    use super::*;

    fn export(results: &[(String, ProjectionResults)]) -> String {
        let mut buf = Vec::new();
        write_results(&mut buf, results).expect("write to memory");
        String::from_utf8(buf).expect("utf-8")
    }

    #[test]
    fn default_projection_exports_four_ranked_rows() {
        let output = export(&[("baseline".to_string(), project(&ScenarioInputs::default()))]);

        assert_eq!(
            output,
            "\
comparison,period_years,scenario,total_return,total_cost,net_return,roi_pct,rank
baseline,10,investment,259374.25,100000.00,159374.25,159.37,worst
baseline,10,renovate_to_live,488668.39,160000.00,328668.39,657.34,
baseline,10,renovate_to_rent,728668.39,160000.00,568668.39,1137.34,
baseline,10,current_home,892097.71,50000.00,842097.71,210.52,best
"
        );
    }

    #[test]
    fn undefined_roi_is_an_empty_cell() {
        let mut inputs = ScenarioInputs::default();
        inputs.investment.initial_amount = Decimal::ZERO;

        let output = export(&[("zero".to_string(), project(&inputs))]);
        let investment_line = output.lines().nth(1).expect("investment row");

        assert_eq!(investment_line, "zero,10,investment,0.00,0.00,0.00,,worst");
    }

    #[test]
    fn all_equal_net_returns_mark_one_row_best_and_worst() {
        let mut tied = project(&ScenarioInputs::default());
        tied.investment.net_return = Decimal::ZERO;
        tied.renovate_to_live.net_return = Decimal::ZERO;
        tied.renovate_to_rent.net_return = Decimal::ZERO;
        tied.current_home.net_return = Decimal::ZERO;

        let output = export(&[("tied".to_string(), tied)]);
        let rows: Vec<&str> = output.lines().skip(1).collect();

        assert_eq!(rows[0], "tied,10,investment,259374.25,100000.00,0.00,159.37,\"best,worst\"");
        assert_eq!(rows.len(), 4);
        assert!(rows[1..].iter().all(|row| row.ends_with(',')));
    }

    #[test]
    fn empty_batch_writes_nothing() {
        assert_eq!(export(&[]), "");
    }
}
