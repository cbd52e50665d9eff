//! Input panels for the Investment, Renovate and Current Home views.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use scenario_core::{ScenarioInputs, ScenarioKind};

use super::theme::{Theme, scenario_color};
use crate::{
    app::Session,
    models::{FormField, ScenarioForm},
};

const LABEL_WIDTH: usize = 34;

fn panel_title(kind: ScenarioKind) -> String {
    format!(" Scenario: {} ", kind.name())
}

fn panel_note(kind: ScenarioKind) -> Option<&'static str> {
    match kind {
        ScenarioKind::RenovateToRent => {
            Some("Property value, costs and appreciation are taken from Renovate to Live.")
        }
        ScenarioKind::Investment => Some("The period here is used for every scenario."),
        _ => None,
    }
}

fn field_line(
    field: FormField,
    form: &ScenarioForm,
    defaults: &ScenarioInputs,
    focused: bool,
    theme: &Theme,
) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let label = format!("{marker}{} ({})", field.label(), field.unit().suffix());

    let text = form.value(field);
    let value = if text.is_empty() {
        Span::styled(field.placeholder(defaults), theme.muted_style())
    } else {
        Span::styled(text.to_string(), theme.text_style())
    };
    let cursor = if focused { "_" } else { "" };

    let label_style = if focused {
        theme.focus_style()
    } else {
        theme.text_style()
    };

    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), label_style),
        value,
        Span::styled(cursor, theme.focus_style()),
    ])
}

fn render_panel(
    frame: &mut Frame,
    area: Rect,
    kind: ScenarioKind,
    session: &Session,
    theme: &Theme,
) {
    let focused = session.focused_field();
    let mut lines: Vec<Line> = FormField::for_scenario(kind)
        .filter(FormField::is_used)
        .map(|field| {
            field_line(
                field,
                session.form(),
                session.defaults(),
                focused == Some(field),
                theme,
            )
        })
        .collect();

    if let Some(note) = panel_note(kind) {
        lines.push(Line::default());
        lines.push(Line::styled(note, theme.muted_style()));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(scenario_color(kind)))
            .title(panel_title(kind)),
    );

    frame.render_widget(paragraph, area);
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    theme: &Theme,
) {
    let scenarios = session.view().scenarios();
    if scenarios.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, scenarios.len() as u32); scenarios.len()];
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (kind, panel) in scenarios.iter().zip(panels.iter()) {
        render_panel(frame, *panel, *kind, session, theme);
    }
}
