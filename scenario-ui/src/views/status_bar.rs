//! Status bar with keyboard shortcuts and the last status message.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme::Theme;
use crate::app::{Session, View};

/// Keyboard shortcut hint for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(
        key: &'static str,
        action: &'static str,
    ) -> Self {
        Self { key, action }
    }
}

/// Common key hints.
pub mod hints {
    use super::KeyHint;

    pub const TAB: KeyHint = KeyHint::new("Tab", "Next field");
    pub const ARROWS: KeyHint = KeyHint::new("←/→", "Screens");
    pub const ENTER_START: KeyHint = KeyHint::new("Enter", "Start");
    pub const ENTER_CALCULATE: KeyHint = KeyHint::new("Enter", "Calculate");
    pub const CLEAR: KeyHint = KeyHint::new("C-u", "Clear field");
    pub const NEW: KeyHint = KeyHint::new("n", "New comparison");
    pub const RESET: KeyHint = KeyHint::new("C-r", "Reset");
    pub const ESC: KeyHint = KeyHint::new("Esc", "Home");
    pub const QUIT: KeyHint = KeyHint::new("q", "Quit");
    pub const CTRL_Q: KeyHint = KeyHint::new("C-q", "Quit");
}

/// Hints for the keys that do something on `view`.
pub fn hints_for(view: View) -> &'static [KeyHint] {
    use hints::*;

    match view {
        View::Home => &[ENTER_START, ARROWS, RESET, QUIT],
        View::Investment | View::Renovate | View::CurrentHome => {
            &[TAB, ENTER_CALCULATE, CLEAR, ARROWS, ESC, CTRL_Q]
        }
        View::Results => &[NEW, ARROWS, RESET, ESC, QUIT],
    }
}

fn hint_line(
    hints: &[KeyHint],
    theme: &Theme,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", theme.muted_style()));
        }
        spans.push(Span::styled(hint.key, theme.key_style()));
        spans.push(Span::styled(format!(": {}", hint.action), theme.text_style()));
    }
    Line::from(spans)
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    theme: &Theme,
) {
    let mut lines = vec![hint_line(hints_for(session.view()), theme)];
    if let Some(status) = session.status() {
        lines.push(Line::styled(status.to_string(), theme.muted_style()));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_views_advertise_calculate() {
        for view in [View::Investment, View::Renovate, View::CurrentHome] {
            assert!(hints_for(view).contains(&hints::ENTER_CALCULATE));
        }
    }

    #[test]
    fn results_advertise_new_comparison() {
        assert!(hints_for(View::Results).contains(&hints::NEW));
    }

    #[test]
    fn hint_line_joins_with_separator() {
        let line = hint_line(&[hints::TAB, hints::QUIT], &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(text, "Tab: Next field │ q: Quit");
    }
}
