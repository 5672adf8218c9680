use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::action::Action;
use crate::components::Component;
use crate::config::Theme;
use crate::goods::{Good, GoodId};

/// One visual row of the list, keyed by the good's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoodRow {
    pub key: GoodId,
    pub text: String,
    /// Foreground override; `None` keeps the terminal default
    pub fg: Option<Color>,
}

/// Project `goods` to rows, in order.
pub fn rows(goods: &[Good]) -> Vec<GoodRow> {
    goods
        .iter()
        .map(|good| GoodRow {
            key: good.id,
            text: good.name.clone(),
            fg: good.color.as_ref().and_then(|c| c.to_terminal_color()),
        })
        .collect()
}

/// Scrollable view over the goods. Holds only viewport state; the goods
/// themselves are passed in on every render.
pub struct GoodsList {
    scroll_offset: usize,
    max_offset: usize,
    visible_rows: usize,
}

impl GoodsList {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            max_offset: 0,
            visible_rows: 0,
        }
    }

    #[cfg(test)]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Record how many rows exist and how many fit, so scrolling stays in range.
    pub fn set_viewport(&mut self, total_rows: usize, visible_rows: usize) {
        self.visible_rows = visible_rows;
        self.max_offset = total_rows.saturating_sub(visible_rows);
        self.scroll_offset = self.scroll_offset.min(self.max_offset);
    }

    /// Scroll so the last of `total_rows` is visible. Uses the row height
    /// from the last render; before any render the next one clamps it.
    pub fn reveal_last(&mut self, total_rows: usize) {
        self.set_viewport(total_rows, self.visible_rows);
        self.scroll_offset = self.max_offset;
    }

    fn page_size(&self) -> usize {
        self.visible_rows.max(1)
    }

    fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = (self.scroll_offset + amount).min(self.max_offset);
    }

    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp(1)),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown(1)),
            KeyCode::PageUp => Some(Action::ScrollPageUp),
            KeyCode::PageDown => Some(Action::ScrollPageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::ScrollToTop),
            KeyCode::End | KeyCode::Char('G') => Some(Action::ScrollToBottom),
            _ => None,
        }
    }

    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp(3)),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown(3)),
            _ => None,
        }
    }

    pub fn render_goods(&self, frame: &mut Frame, area: Rect, focused: bool, goods: &[Good], theme: &Theme) {
        let title = if focused {
            format!(" Goods ({}) [↑↓ scroll] ", goods.len())
        } else {
            format!(" Goods ({}) ", goods.len())
        };

        let block = Block::default()
            .title(title)
            .title_style(theme.title_style(focused))
            .borders(Borders::ALL)
            .border_style(theme.border_style(focused));

        if goods.is_empty() {
            let empty = ListItem::new(Line::from(Span::styled(
                "No goods yet",
                Style::default().fg(theme.colors.muted.to_color()).add_modifier(Modifier::ITALIC),
            )));
            frame.render_widget(List::new(vec![empty]).block(block), area);
            return;
        }

        let items: Vec<ListItem> = rows(goods)
            .into_iter()
            .skip(self.scroll_offset)
            .map(|row| {
                let style = match row.fg {
                    Some(fg) => Style::default().fg(fg),
                    None => Style::default(),
                };
                ListItem::new(Line::from(Span::styled(row.text, style)))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

impl Component for GoodsList {
    fn handle_event(&mut self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => None,
        }
    }

    fn update(&mut self, action: &Action) {
        match action {
            Action::ScrollUp(n) => self.scroll_up(*n as usize),
            Action::ScrollDown(n) => self.scroll_down(*n as usize),
            Action::ScrollPageUp => self.scroll_up(self.page_size()),
            Action::ScrollPageDown => self.scroll_down(self.page_size()),
            Action::ScrollToTop => self.scroll_offset = 0,
            Action::ScrollToBottom => self.scroll_offset = self.max_offset,
            _ => {}
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        self.render_goods(frame, area, focused, &[], theme);
    }
}

impl Default for GoodsList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goods::{seed_goods, Color as GoodColor, ColorCatalog};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(list: &GoodsList, goods: &[Good], width: u16, height: u16) -> Buffer {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| list.render_goods(frame, frame.area(), false, goods, &theme))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16, len: u16) -> String {
        (1..=len).map(|x| buffer[(x, y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_rows_follow_sequence_order_and_keys() {
        let goods = seed_goods(&ColorCatalog::builtin());
        let rows = rows(&goods);
        assert_eq!(rows.len(), 10);
        let keys: Vec<GoodId> = rows.iter().map(|r| r.key).collect();
        assert_eq!(keys, (1..=10).collect::<Vec<GoodId>>());
        assert_eq!(rows[0].text, "Dumplings");
        assert_eq!(rows[0].fg, Some(Color::Red));
        assert_eq!(rows[1].fg, Some(Color::Green));
        assert_eq!(rows[2].fg, Some(Color::Blue));
    }

    #[test]
    fn test_missing_color_has_no_override() {
        let goods = vec![Good {
            id: 1,
            name: "Ghost".to_string(),
            color_id: 99,
            color: None,
        }];
        assert_eq!(rows(&goods)[0].fg, None);
    }

    #[test]
    fn test_unparseable_color_name_has_no_override() {
        let goods = vec![Good::with_color(1, "Odd", GoodColor::new(4, "chartreuse-ish"))];
        assert_eq!(rows(&goods)[0].fg, None);
    }

    #[test]
    fn test_render_colors_rows() {
        let goods = vec![
            Good::with_color(1, "Milk", GoodColor::new(1, "red")),
            Good {
                id: 2,
                name: "Ghost".to_string(),
                color_id: 99,
                color: None,
            },
        ];
        let buffer = draw(&GoodsList::new(), &goods, 30, 5);

        assert_eq!(row_text(&buffer, 1, 4), "Milk");
        assert_eq!(buffer[(1, 1)].fg, Color::Red);
        assert_eq!(row_text(&buffer, 2, 5), "Ghost");
        assert_eq!(buffer[(1, 2)].fg, Color::Reset);
    }

    #[test]
    fn test_render_is_idempotent() {
        let goods = seed_goods(&ColorCatalog::builtin());
        let list = GoodsList::new();
        assert_eq!(draw(&list, &goods, 30, 14), draw(&list, &goods, 30, 14));
    }

    #[test]
    fn test_scroll_clamps_to_viewport() {
        let mut list = GoodsList::new();
        list.set_viewport(10, 4);

        list.update(&Action::ScrollDown(100));
        assert_eq!(list.scroll_offset(), 6);

        list.update(&Action::ScrollPageUp);
        assert_eq!(list.scroll_offset(), 2);

        list.update(&Action::ScrollToTop);
        assert_eq!(list.scroll_offset(), 0);

        list.update(&Action::ScrollToBottom);
        list.set_viewport(10, 8);
        assert_eq!(list.scroll_offset(), 2);
    }

    #[test]
    fn test_reveal_last_after_append() {
        let mut list = GoodsList::new();
        list.set_viewport(10, 4);
        list.reveal_last(11);
        assert_eq!(list.scroll_offset(), 7);

        list.update(&Action::ScrollPageUp);
        assert_eq!(list.scroll_offset(), 3);
    }

    #[test]
    fn test_reveal_last_before_first_render_is_clamped() {
        let mut list = GoodsList::new();
        list.reveal_last(10);
        list.set_viewport(10, 6);
        assert_eq!(list.scroll_offset(), 4);
    }

    #[test]
    fn test_component_render_without_goods() {
        let theme = Theme::default();
        let list = GoodsList::new();
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|frame| list.render(frame, frame.area(), true, &theme))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        assert_eq!(row_text(&buffer, 1, 12), "No goods yet");
    }

    #[test]
    fn test_scrolled_render_starts_at_offset() {
        let goods = seed_goods(&ColorCatalog::builtin());
        let mut list = GoodsList::new();
        list.set_viewport(goods.len(), 3);
        list.update(&Action::ScrollDown(2));

        let buffer = draw(&list, &goods, 30, 5);
        assert_eq!(row_text(&buffer, 1, 4), "Eggs");
    }
}
