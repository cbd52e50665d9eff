//! Colors and styles shared by every view.

use ratatui::style::{Color, Modifier, Style};
use scenario_core::ScenarioKind;

/// One color per scenario, in scenario order.
pub const SCENARIO_COLORS: [Color; 4] = [
    Color::Rgb(0x00, 0x88, 0xFE),
    Color::Rgb(0x00, 0xC4, 0x9F),
    Color::Rgb(0xFF, 0xBB, 0x28),
    Color::Rgb(0xFF, 0x80, 0x42),
];

pub fn scenario_color(kind: ScenarioKind) -> Color {
    SCENARIO_COLORS[kind.index()]
}

pub struct Theme {
    pub primary: Color,
    pub positive: Color,
    pub negative: Color,
    pub muted: Color,
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            positive: Color::Green,
            negative: Color::Red,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Green at or above zero, red below.
    pub fn sign_style(
        &self,
        non_negative: bool,
    ) -> Style {
        Style::default()
            .fg(if non_negative {
                self.positive
            } else {
                self.negative
            })
            .add_modifier(Modifier::BOLD)
    }

    /// Border of the field receiving input.
    pub fn focus_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
