// Rendering - heading, form, goods list and key hints

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::components::Component;
use crate::input::focus::FocusArea;

use super::state::AppState;

const HEADING: &str = "Add todo form";

pub(super) struct ScreenAreas {
    pub heading: Rect,
    pub form: Rect,
    pub list: Rect,
    pub hints: Rect,
}

pub(super) fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(3), // Form row
            Constraint::Min(3),    // Goods
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    ScreenAreas {
        heading: chunks[0],
        form: chunks[1],
        list: chunks[2],
        hints: chunks[3],
    }
}

impl AppState {
    /// Draw the whole screen. Takes `&mut self` to record the list viewport.
    pub fn render(&mut self, frame: &mut Frame) {
        let areas = screen_areas(frame.area());
        let theme = &self.theme;

        let heading = Paragraph::new(Line::from(Span::styled(
            HEADING,
            Style::default()
                .fg(theme.colors.accent.to_color())
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(heading, areas.heading);

        self.good_form
            .render(frame, areas.form, self.focus.current().is_form_field(), theme);

        let visible_rows = areas.list.height.saturating_sub(2) as usize;
        self.goods_list.set_viewport(self.goods.len(), visible_rows);
        self.goods_list.render_goods(
            frame,
            areas.list,
            self.focus.is_focused(FocusArea::GoodsList),
            self.goods.goods(),
            theme,
        );

        let hint_style = Style::default().fg(theme.colors.muted.to_color());
        let key_style = Style::default().fg(theme.colors.primary.to_color());
        let hints = Line::from(vec![
            Span::styled("Tab", key_style),
            Span::styled(" next field  ", hint_style),
            Span::styled("↑↓", key_style),
            Span::styled(" pick color  ", hint_style),
            Span::styled("Enter", key_style),
            Span::styled(" on Add submits  ", hint_style),
            Span::styled("Esc", key_style),
            Span::styled(" quit", hint_style),
        ]);
        frame.render_widget(Paragraph::new(hints), areas.hints);
    }
}
