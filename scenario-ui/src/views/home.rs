use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use scenario_core::ScenarioKind;

use super::theme::{Theme, scenario_color};

fn blurb(kind: ScenarioKind) -> &'static str {
    match kind {
        ScenarioKind::Investment => "Return from keeping your money in a financial investment.",
        ScenarioKind::RenovateToLive => "Costs and gains of renovating an apartment to live in.",
        ScenarioKind::RenovateToRent => "Return from renovating an apartment and renting it out.",
        ScenarioKind::CurrentHome => "Costs and gains of staying where you live now.",
    }
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
) {
    let mut lines = vec![
        Line::styled("Welcome!", theme.title_style()),
        Line::styled(
            "Compare four real estate and investment scenarios over the same horizon.",
            theme.text_style(),
        ),
        Line::default(),
    ];

    for kind in ScenarioKind::ALL {
        lines.push(Line::from(Span::styled(
            kind.name(),
            Style::default()
                .fg(scenario_color(kind))
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::styled(format!("  {}", blurb(kind)), theme.muted_style()));
    }

    lines.push(Line::default());
    lines.push(Line::styled("Press Enter to start the comparison.", theme.text_style()));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Home "));

    frame.render_widget(paragraph, area);
}
