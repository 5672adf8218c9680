// Event handlers and action dispatch
// Domain: route input by focus, apply actions to form, list and goods

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::components::Component;
use crate::input::focus::FocusArea;

use super::state::AppState;

impl AppState {
    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        if let Event::Key(key) = event {
            if let Some(action) = self.handle_global_key(key) {
                return Some(action);
            }
        }

        match self.focus.current() {
            FocusArea::GoodsList => self.goods_list.handle_event(&event),
            _ => self.good_form.handle_event(&event),
        }
    }

    fn handle_global_key(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            _ => None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Noop | Action::Tick => {}
            Action::Quit => {
                tracing::info!("Quit requested with {} goods", self.goods.len());
                self.should_quit = true;
            }
            Action::FocusNext => {
                self.focus.next();
                self.sync_form_focus();
            }
            Action::FocusPrev => {
                self.focus.prev();
                self.sync_form_focus();
            }
            Action::FocusArea(area) => {
                self.focus.focus(area);
                self.sync_form_focus();
            }
            Action::NameInput(_) | Action::ColorSelect(_) => {
                self.good_form.update(&action);
            }
            Action::Submit => {
                if let Some(good) = self.good_form.on_submit() {
                    self.dispatch(Action::AddGood(good));
                }
            }
            Action::AddGood(good) => {
                self.goods.append_good(good);
                self.goods_list.reveal_last(self.goods.len());
            }
            Action::ScrollUp(_)
            | Action::ScrollDown(_)
            | Action::ScrollPageUp
            | Action::ScrollPageDown
            | Action::ScrollToTop
            | Action::ScrollToBottom => {
                self.goods_list.update(&action);
            }
        }
        self.mark_dirty();
    }

    fn sync_form_focus(&mut self) {
        let current = self.focus.current();
        self.good_form.update(&Action::FocusArea(current));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::app::goods_state::GoodsState;
    use crate::components::GoodForm;
    use crate::config::Theme;
    use crate::goods::{ColorCatalog, GoodId};

    static NEXT_ID: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1_000);

    fn counting_id() -> GoodId {
        NEXT_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed)
    }

    fn app_state() -> AppState {
        let colors = Arc::new(ColorCatalog::builtin());
        AppState::with_parts(
            Theme::default(),
            GoodsState::seeded(&colors),
            GoodForm::with_id_source(Arc::clone(&colors), counting_id),
        )
    }

    fn press(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) {
        let event = Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        if let Some(action) = state.handle_event(event) {
            state.dispatch(action);
        }
    }

    fn key(state: &mut AppState, code: KeyCode) {
        press(state, code, KeyModifiers::NONE);
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            key(state, KeyCode::Char(c));
        }
    }

    /// From the name field: type `name`, pick the `color_steps`-th color, press Add.
    fn add(state: &mut AppState, name: &str, color_steps: usize) {
        state.dispatch(Action::FocusArea(FocusArea::NameInput));
        type_text(state, name);
        key(state, KeyCode::Tab);
        for _ in 0..color_steps {
            key(state, KeyCode::Down);
        }
        key(state, KeyCode::Tab);
        key(state, KeyCode::Enter);
    }

    fn names(state: &AppState) -> Vec<String> {
        state.goods.goods().iter().map(|g| g.name.clone()).collect()
    }

    #[test]
    fn test_submissions_append_after_seed_in_order() {
        let mut state = app_state();
        let mut expected = names(&state);

        add(&mut state, "Milk", 1);
        add(&mut state, "Tea", 2);
        add(&mut state, "Plum", 3);
        expected.extend(["Milk", "Tea", "Plum"].map(String::from));

        assert_eq!(names(&state), expected);
        let colors: Vec<_> = state.goods.goods()[10..].iter().map(|g| g.color_id).collect();
        assert_eq!(colors, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_submit_appends_nothing() {
        let mut state = app_state();
        state.dispatch(Action::FocusArea(FocusArea::AddButton));
        key(&mut state, KeyCode::Enter);

        assert_eq!(state.goods.len(), 10);
        assert!(state.good_form.state().name_error);
        assert!(state.good_form.state().color_error);
    }

    #[test]
    fn test_enter_in_name_field_does_not_append() {
        let mut state = app_state();
        type_text(&mut state, "Milk");
        key(&mut state, KeyCode::Enter);
        assert_eq!(state.goods.len(), 10);
        assert_eq!(state.good_form.state().draft_name, "Milk");
    }

    #[test]
    fn test_missing_color_then_fix_and_resubmit() {
        let mut state = app_state();
        type_text(&mut state, "Honeydew");
        state.dispatch(Action::FocusArea(FocusArea::AddButton));
        key(&mut state, KeyCode::Enter);
        assert!(state.good_form.state().color_error);
        assert_eq!(state.goods.len(), 10);

        key(&mut state, KeyCode::BackTab);
        key(&mut state, KeyCode::Up);
        assert!(!state.good_form.state().color_error);

        key(&mut state, KeyCode::Tab);
        key(&mut state, KeyCode::Enter);
        assert_eq!(state.goods.len(), 11);
        let last = &state.goods.goods()[10];
        assert_eq!(last.name, "Honeydew");
        assert_eq!(last.color.as_ref().map(|c| c.name.as_str()), Some("blue"));
    }

    #[test]
    fn test_focus_ring_reaches_list_and_scrolls() {
        let mut state = app_state();
        state.goods_list.set_viewport(state.goods.len(), 4);
        for _ in 0..3 {
            key(&mut state, KeyCode::Tab);
        }
        assert_eq!(state.focus.current(), FocusArea::GoodsList);
        assert_eq!(state.good_form.active_field(), None);

        key(&mut state, KeyCode::Down);
        key(&mut state, KeyCode::Char('j'));
        assert_eq!(state.goods_list.scroll_offset(), 2);
        assert_eq!(state.goods.len(), 10);
    }

    #[test]
    fn test_typing_on_list_does_not_reach_form() {
        let mut state = app_state();
        state.dispatch(Action::FocusArea(FocusArea::GoodsList));
        type_text(&mut state, "abc");
        assert_eq!(state.good_form.state().draft_name, "");
    }

    #[test]
    fn test_quit_keys() {
        let mut state = app_state();
        key(&mut state, KeyCode::Esc);
        assert!(state.should_quit);

        let mut state = app_state();
        press(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(state.should_quit);
        assert_eq!(state.good_form.state().draft_name, "");
    }

    #[test]
    fn test_dispatch_marks_dirty() {
        let mut state = app_state();
        state.needs_redraw = false;
        state.dispatch(Action::Tick);
        assert!(state.needs_redraw);
    }
}
