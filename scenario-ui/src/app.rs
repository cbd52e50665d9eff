//! Interactive session state: the form, the last results and navigation.
//!
//! Everything here is independent of the terminal so key handling can be
//! tested without one.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scenario_core::{ProjectionResults, ScenarioInputs, ScenarioKind, project};
use tracing::{debug, info};

use crate::models::{FormField, ScenarioForm};

/// The five screens of the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Investment,
    Renovate,
    CurrentHome,
    Results,
}

impl View {
    pub const ALL: [View; 5] = [
        Self::Home,
        Self::Investment,
        Self::Renovate,
        Self::CurrentHome,
        Self::Results,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Investment => "Investment",
            Self::Renovate => "Renovate",
            Self::CurrentHome => "Current Home",
            Self::Results => "Results",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Investment => 1,
            Self::Renovate => 2,
            Self::CurrentHome => 3,
            Self::Results => 4,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Scenarios whose inputs are edited on this view.
    pub fn scenarios(&self) -> &'static [ScenarioKind] {
        match self {
            Self::Investment => &[ScenarioKind::Investment],
            Self::Renovate => &[ScenarioKind::RenovateToLive, ScenarioKind::RenovateToRent],
            Self::CurrentHome => &[ScenarioKind::CurrentHome],
            Self::Home | Self::Results => &[],
        }
    }

    /// Editable fields in focus order. Informational periods stay off screen.
    pub fn fields(&self) -> Vec<FormField> {
        self.scenarios()
            .iter()
            .flat_map(|kind| FormField::for_scenario(*kind))
            .filter(FormField::is_used)
            .collect()
    }

    pub fn is_input(&self) -> bool {
        !self.scenarios().is_empty()
    }
}

/// Everything the terminal UI shows, and the operations keys map to.
#[derive(Debug, Clone)]
pub struct Session {
    form: ScenarioForm,
    defaults: ScenarioInputs,
    results: Option<ProjectionResults>,
    view: View,
    focus: usize,
    status: Option<String>,
}

impl Session {
    pub fn new(
        form: ScenarioForm,
        defaults: ScenarioInputs,
    ) -> Self {
        Self {
            form,
            defaults,
            results: None,
            view: View::Home,
            focus: 0,
            status: None,
        }
    }

    pub fn form(&self) -> &ScenarioForm {
        &self.form
    }

    pub fn defaults(&self) -> &ScenarioInputs {
        &self.defaults
    }

    pub fn results(&self) -> Option<&ProjectionResults> {
        self.results.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The field receiving keystrokes, if the view has any.
    pub fn focused_field(&self) -> Option<FormField> {
        self.view.fields().get(self.focus).copied()
    }

    pub fn navigate(
        &mut self,
        view: View,
    ) {
        if view != self.view {
            debug!(from = self.view.title(), to = view.title(), "navigate");
            self.view = view;
            self.focus = 0;
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.view.fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.view.fields().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Replaces the focused field's text through the form reducer.
    pub fn set_focused(
        &mut self,
        value: impl Into<String>,
    ) {
        if let Some(field) = self.focused_field() {
            self.form = self.form.update_field(field, value);
        }
    }

    pub fn type_char(
        &mut self,
        c: char,
    ) {
        if let Some(field) = self.focused_field() {
            let mut text = self.form.value(field).to_string();
            text.push(c);
            self.set_focused(text);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut text = self.form.value(field).to_string();
            text.pop();
            self.set_focused(text);
        }
    }

    /// Projects the current form, replaces any earlier results and shows them.
    pub fn calculate(&mut self) {
        let inputs = self.form.resolve(&self.defaults);
        let results = project(&inputs);
        let best = results.comparison().best.kind;

        info!(
            years = results.period_years,
            best = best.as_str(),
            "calculated comparison"
        );
        self.status = Some(format!(
            "Calculated over {} years. Best: {}",
            results.period_years,
            best.name()
        ));
        self.results = Some(results);
        self.navigate(View::Results);
    }

    /// Back to the start screen, keeping every input.
    pub fn new_comparison(&mut self) {
        self.status = None;
        self.navigate(View::Home);
    }

    /// Clears inputs and results.
    pub fn reset(&mut self) {
        info!("reset inputs and results");
        self.form = ScenarioForm::cleared();
        self.results = None;
        self.focus = 0;
        self.status = Some("All inputs cleared".to_string());
    }

    /// Applies one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
    ) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('q') if ctrl => return true,
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char('u') if ctrl => self.set_focused(""),
            KeyCode::Right => self.navigate(self.view.next()),
            KeyCode::Left => self.navigate(self.view.prev()),
            KeyCode::Esc => self.navigate(View::Home),
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            _ if self.view.is_input() => self.handle_input_key(key),
            _ => return self.handle_screen_key(key),
        }
        false
    }

    fn handle_input_key(
        &mut self,
        key: KeyEvent,
    ) {
        match key.code {
            KeyCode::Enter => self.calculate(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.set_focused(""),
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '.' | ',' | '-') => {
                self.type_char(c)
            }
            _ => {}
        }
    }

    fn handle_screen_key(
        &mut self,
        key: KeyEvent,
    ) -> bool {
        match (self.view, key.code) {
            (_, KeyCode::Char('q')) => return true,
            (View::Home, KeyCode::Enter) => self.navigate(View::Investment),
            (View::Results, KeyCode::Char('n')) => self.new_comparison(),
            (_, KeyCode::Char(c @ '1'..='5')) => {
                let index = c as usize - '1' as usize;
                self.navigate(View::ALL[index]);
            }
            _ => {}
        }
        false
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ScenarioForm::new(), ScenarioInputs::default())
    }
}
