// AppState - everything the screen shows, without the terminal itself

use std::sync::Arc;

use crate::components::{GoodForm, GoodsList};
use crate::config::Theme;
use crate::goods::ColorCatalog;
use crate::input::focus::FocusManager;

use super::goods_state::GoodsState;

pub struct AppState {
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub focus: FocusManager,
    pub theme: Theme,
    pub goods: GoodsState,
    pub good_form: GoodForm,
    pub goods_list: GoodsList,
}

impl AppState {
    pub fn new(colors: Arc<ColorCatalog>, theme: Theme) -> Self {
        let goods = GoodsState::seeded(&colors);
        let good_form = GoodForm::new(Arc::clone(&colors));
        Self::with_parts(theme, goods, good_form)
    }

    pub fn with_parts(theme: Theme, goods: GoodsState, good_form: GoodForm) -> Self {
        Self {
            should_quit: false,
            needs_redraw: true,
            focus: FocusManager::new(),
            theme,
            goods,
            good_form,
            goods_list: GoodsList::new(),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }
}
