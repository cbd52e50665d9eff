//! Plain-text comparison report for non-interactive runs.

use std::fmt::Write;

use scenario_core::ProjectionResults;

use crate::models::{Recommendation, result_cards};

/// Renders the comparison as aligned text, one block per scenario.
pub fn render_report(results: &ProjectionResults) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Scenario comparison over {} years", results.period_years);

    for card in result_cards(results) {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", card.title);
        let _ = writeln!(out, "  {:<14}{:>20}", "Total return", card.total_return);
        let _ = writeln!(out, "  {:<14}{:>20}", "Total cost", card.total_cost);
        let _ = writeln!(out, "  {:<14}{:>20}", "Net return", card.net_return);
        let _ = writeln!(out, "  {:<14}{:>20}", "ROI", card.roi);
    }

    let recommendation = Recommendation::from_results(results);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", recommendation.best_line);
    let _ = writeln!(out, "{}", recommendation.worst_line);
    let _ = writeln!(out);
    let _ = writeln!(out, "Keep in mind:");
    for note in recommendation.considerations() {
        let _ = writeln!(out, "- {note}");
    }

    out
}
