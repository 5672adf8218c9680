use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::action::Action;
use crate::components::Component;
use crate::config::Theme;
use crate::goods::{Color, ColorCatalog, ColorId, Good, GoodId};
use crate::input::focus::FocusArea;

const PLACEHOLDER_LABEL: &str = "Select Value";
const NAME_WIDTH_MIN: u16 = 16;
const SELECT_WIDTH: u16 = 20;
const BUTTON_WIDTH: u16 = 9;

/// The form's whole input state. Every transition consumes the old value and
/// returns a new one, so the four fields never drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft_name: String,
    pub draft_color: Option<Color>,
    pub name_error: bool,
    pub color_error: bool,
}

impl FormState {
    /// Typing replaces the name and always clears a pending name error.
    pub fn with_name_input(self, value: impl Into<String>) -> Self {
        Self {
            draft_name: value.into(),
            name_error: false,
            ..self
        }
    }

    /// Choosing a color clears a pending color error. Ids missing from the
    /// catalog, including the placeholder, leave no color selected.
    pub fn with_color_selected(self, selected_id: ColorId, colors: &ColorCatalog) -> Self {
        Self {
            draft_color: colors.get(selected_id).cloned(),
            color_error: false,
            ..self
        }
    }

    /// Set each error flag to whether its field is invalid right now.
    pub fn validated(self) -> Self {
        Self {
            name_error: self.draft_name.is_empty(),
            color_error: self.draft_color.is_none(),
            ..self
        }
    }

    /// Validate and, if both fields pass, build a good with `id` and reset the
    /// drafts. On failure the drafts are kept and the flags mark what is wrong.
    pub fn submit(self, id: GoodId) -> (Self, Option<Good>) {
        match self.validated() {
            FormState {
                draft_name,
                draft_color: Some(color),
                name_error: false,
                color_error: false,
            } => (Self::default(), Some(Good::with_color(id, draft_name, color))),
            rejected => (rejected, None),
        }
    }
}

/// Milliseconds since the Unix epoch. Two submits inside the same
/// millisecond produce the same id.
pub fn timestamp_id() -> GoodId {
    chrono::Utc::now().timestamp_millis()
}

/// Name input, color select and Add button.
pub struct GoodForm {
    state: FormState,
    colors: Arc<ColorCatalog>,
    active_field: Option<FocusArea>,
    id_source: fn() -> GoodId,
}

impl GoodForm {
    pub fn new(colors: Arc<ColorCatalog>) -> Self {
        Self::with_id_source(colors, timestamp_id)
    }

    pub fn with_id_source(colors: Arc<ColorCatalog>, id_source: fn() -> GoodId) -> Self {
        Self {
            state: FormState::default(),
            colors,
            active_field: Some(FocusArea::NameInput),
            id_source,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    #[cfg(test)]
    pub fn active_field(&self) -> Option<FocusArea> {
        self.active_field
    }

    pub fn on_name_input(&mut self, value: impl Into<String>) {
        let state = std::mem::take(&mut self.state);
        self.state = state.with_name_input(value);
    }

    pub fn on_color_select(&mut self, selected_id: ColorId) {
        let state = std::mem::take(&mut self.state);
        self.state = state.with_color_selected(selected_id, &self.colors);
    }

    /// Returns the new good when validation passes. The caller owns the list.
    pub fn on_submit(&mut self) -> Option<Good> {
        let state = std::mem::take(&mut self.state);
        let (state, good) = state.submit((self.id_source)());
        self.state = state;

        match &good {
            Some(good) => tracing::debug!("Form accepted good {} '{}'", good.id, good.name),
            None => tracing::debug!(
                "Form rejected submit: name_error={} color_error={}",
                self.state.name_error,
                self.state.color_error
            ),
        }
        good
    }

    fn selected_color_id(&self) -> Option<ColorId> {
        self.state.draft_color.as_ref().map(|c| c.id)
    }

    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match self.active_field? {
            FocusArea::NameInput => self.handle_name_key(key),
            FocusArea::ColorSelect => self.handle_select_key(key),
            FocusArea::AddButton => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Submit),
                _ => None,
            },
            FocusArea::GoodsList => None,
        }
    }

    fn handle_name_key(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut value = self.state.draft_name.clone();
                value.push(c);
                Some(Action::NameInput(value))
            }
            KeyCode::Backspace => {
                let mut value = self.state.draft_name.clone();
                value.pop()?;
                Some(Action::NameInput(value))
            }
            // Enter in the text field never submits
            KeyCode::Enter => Some(Action::Noop),
            _ => None,
        }
    }

    fn handle_select_key(&self, key: KeyEvent) -> Option<Action> {
        let current = self.selected_color_id();
        let color = match key.code {
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => self.colors.next_after(current),
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => self.colors.prev_before(current),
            KeyCode::Char(c @ '1'..='9') => {
                let pos = c.to_digit(10)? as usize - 1;
                self.colors.nth(pos)
            }
            _ => None,
        }?;
        Some(Action::ColorSelect(color.id))
    }

    fn handle_paste(&self, text: &str) -> Option<Action> {
        if self.active_field != Some(FocusArea::NameInput) {
            return None;
        }
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        if pasted.is_empty() {
            return None;
        }
        let mut value = self.state.draft_name.clone();
        value.push_str(&pasted);
        Some(Action::NameInput(value))
    }

    pub(crate) fn field_areas(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(NAME_WIDTH_MIN),
                Constraint::Length(SELECT_WIDTH),
                Constraint::Length(BUTTON_WIDTH),
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    fn is_active(&self, field: FocusArea, focused: bool) -> bool {
        focused && self.active_field == Some(field)
    }

    fn render_name(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let has_error = self.state.name_error;
        let title = if has_error { " Name (required) " } else { " Name " };
        let title_style = if has_error {
            Style::default().fg(theme.colors.error.to_color())
        } else {
            theme.title_style(focused)
        };

        let block = Block::default()
            .title(title)
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_style(theme.field_border_style(focused, has_error));

        let mut spans = vec![Span::styled(
            self.state.draft_name.as_str(),
            Style::default().fg(theme.colors.foreground.to_color()),
        )];
        if focused {
            spans.push(Span::styled(
                theme.form.cursor.to_string(),
                Style::default().fg(theme.colors.primary.to_color()),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_select(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let has_error = self.state.color_error;
        let title = if has_error { " Color (required) " } else { " Color " };
        let title_style = if has_error {
            Style::default().fg(theme.colors.error.to_color())
        } else {
            theme.title_style(focused)
        };

        let block = Block::default()
            .title(title)
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_style(theme.field_border_style(focused, has_error));

        let value = match &self.state.draft_color {
            Some(color) => {
                let mut style = Style::default().add_modifier(Modifier::BOLD);
                if let Some(fg) = color.to_terminal_color() {
                    style = style.fg(fg);
                }
                Span::styled(color.name.clone(), style)
            }
            None => Span::styled(PLACEHOLDER_LABEL, theme.placeholder_style()),
        };
        let arrow = Span::styled(
            if focused { " ▴▾" } else { " ▾" },
            Style::default().fg(theme.colors.muted.to_color()),
        );

        frame.render_widget(Paragraph::new(Line::from(vec![value, arrow])).block(block), area);
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));

        let label = Paragraph::new(Line::from(Span::styled(" Add ", theme.button_style(focused))))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(label, area);
    }
}

impl Component for GoodForm {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Paste(text) => self.handle_paste(text),
            _ => None,
        }
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::NameInput(value) => self.on_name_input(value.clone()),
            Action::ColorSelect(id) => self.on_color_select(*id),
            Action::FocusArea(area) => {
                self.active_field = area.is_form_field().then_some(*area);
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let (name_area, select_area, button_area) = Self::field_areas(area);

        self.render_name(frame, name_area, self.is_active(FocusArea::NameInput, focused), theme);
        self.render_select(frame, select_area, self.is_active(FocusArea::ColorSelect, focused), theme);
        self.render_button(frame, button_area, self.is_active(FocusArea::AddButton, focused), theme);
    }
}
