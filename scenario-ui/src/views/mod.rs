//! Terminal rendering of a [`Session`].

pub mod home;
pub mod inputs;
pub mod results;
pub mod status_bar;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Tabs},
};

use crate::app::{Session, View};
use theme::Theme;

/// Header tabs, the active view, and the status bar.
pub fn calculate_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area)
        .to_vec()
}

pub fn render(
    frame: &mut Frame,
    session: &Session,
) {
    let theme = Theme::default();
    let chunks = calculate_layout(frame.area());

    render_tabs(frame, chunks[0], session.view(), &theme);

    match session.view() {
        View::Home => home::render(frame, chunks[1], &theme),
        View::Investment | View::Renovate | View::CurrentHome => {
            inputs::render(frame, chunks[1], session, &theme)
        }
        View::Results => results::render(frame, chunks[1], session.results(), &theme),
    }

    status_bar::render(frame, chunks[2], session, &theme);
}

fn render_tabs(
    frame: &mut Frame,
    area: Rect,
    active: View,
    theme: &Theme,
) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!("{} {}", i + 1, view.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(theme.muted_style())
        .highlight_style(theme.title_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Real Estate Scenario Comparator ")
                .title_style(theme.title_style()),
        );

    frame.render_widget(tabs, area);
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_support::render_to_string;

    #[test]
    fn layout_has_header_body_and_footer() {
        let chunks = calculate_layout(Rect::new(0, 0, 100, 30));

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].height, 3);
        assert_eq!(chunks[2].height, 2);
    }

    #[test]
    fn tabs_list_all_five_views() {
        let screen = render_to_string(&Session::default(), 120, 40);

        for title in ["1 Home", "2 Investment", "3 Renovate", "4 Current Home", "5 Results"] {
            assert!(screen.contains(title), "missing tab {title}");
        }
    }
}
