//! Results view: net return chart, return distribution, cards and recommendation.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph, Wrap},
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use scenario_core::ProjectionResults;

use super::theme::{Theme, scenario_color};
use crate::{
    models::{
        ChartDatum, PieSlice, Recommendation, ResultCard, chart_data, pie_slices, result_cards,
    },
    utils::format_currency,
};

/// Bar height for a net return; losses draw as an empty bar.
fn bar_value(net_return: Decimal) -> u64 {
    net_return
        .max(Decimal::ZERO)
        .trunc()
        .to_u64()
        .unwrap_or(u64::MAX)
}

fn render_empty(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
) {
    let paragraph = Paragraph::new(vec![
        Line::styled("No results yet.", theme.title_style()),
        Line::default(),
        Line::styled(
            "Fill in the scenario screens and press Enter to calculate all scenarios.",
            theme.text_style(),
        ),
    ])
    .wrap(Wrap { trim: false })
    .block(Block::default().borders(Borders::ALL).title(" Results "));

    frame.render_widget(paragraph, area);
}

fn render_chart(
    frame: &mut Frame,
    area: Rect,
    data: &[ChartDatum],
    theme: &Theme,
) {
    let bars: Vec<Bar> = data
        .iter()
        .map(|datum| {
            Bar::default()
                .label(Line::from(datum.label))
                .value(bar_value(datum.net_return))
                .text_value(format_currency(datum.net_return))
                .style(Style::default().fg(scenario_color(datum.kind)))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Net return by scenario ")
                .title_style(theme.title_style()),
        )
        .bar_width(16)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_distribution(
    frame: &mut Frame,
    area: Rect,
    slices: &[PieSlice],
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Share of positive net returns ")
        .title_style(theme.title_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); slices.len()])
        .split(inner);

    for (slice, row) in slices.iter().zip(rows.iter()) {
        let ratio = (slice.share / Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
            .clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(scenario_color(slice.kind)))
            .ratio(ratio)
            .label(format!("{} {}%", slice.label, slice.share.round()));
        frame.render_widget(gauge, *row);
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    card: &ResultCard,
    theme: &Theme,
) {
    let lines = vec![
        Line::styled("Total return", theme.muted_style()),
        Line::styled(card.total_return.clone(), theme.sign_style(true)),
        Line::styled("Total cost", theme.muted_style()),
        Line::styled(card.total_cost.clone(), theme.sign_style(false)),
        Line::styled("Net return", theme.muted_style()),
        Line::styled(card.net_return.clone(), theme.sign_style(card.net_positive)),
        Line::styled("ROI", theme.muted_style()),
        Line::styled(card.roi.clone(), theme.sign_style(card.roi_positive)),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scenario_color(card.kind)))
            .title(format!(" {} ", card.title)),
    );

    frame.render_widget(paragraph, area);
}

fn render_recommendation(
    frame: &mut Frame,
    area: Rect,
    recommendation: &Recommendation,
    theme: &Theme,
) {
    let mut lines = vec![
        Line::styled(recommendation.best_line.clone(), theme.sign_style(true)),
        Line::styled(recommendation.worst_line.clone(), theme.sign_style(false)),
        Line::default(),
        Line::styled("Keep in mind:", theme.title_style()),
    ];
    lines.extend(
        recommendation
            .considerations()
            .iter()
            .map(|note| Line::styled(format!("• {note}"), theme.text_style())),
    );

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Recommendations "));

    frame.render_widget(paragraph, area);
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    results: Option<&ProjectionResults>,
    theme: &Theme,
) {
    let Some(results) = results else {
        render_empty(frame, area, theme);
        return;
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(10),
            Constraint::Length(10),
        ])
        .split(area);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(sections[0]);
    render_chart(frame, charts[0], &chart_data(results), theme);
    render_distribution(frame, charts[1], &pie_slices(results), theme);

    let cards = result_cards(results);
    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
        .split(sections[1]);
    for (card, card_area) in cards.iter().zip(card_areas.iter()) {
        render_card(frame, *card_area, card, theme);
    }

    render_recommendation(
        frame,
        sections[2],
        &Recommendation::from_results(results),
        theme,
    );
}
