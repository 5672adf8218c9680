// App module - split into submodules for maintainability
// - mod.rs: App struct, terminal setup and teardown
// - state.rs: AppState (everything drawn, no terminal)
// - goods_state.rs: the goods sequence
// - event_loop.rs: Main run() loop
// - rendering.rs: All UI drawing
// - handlers.rs: Event handlers and action dispatch

mod event_loop;
mod goods_state;
mod handlers;
mod rendering;
mod state;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::ConfigManager;
use crate::error::{GoodsError, Result};
use crate::goods::ColorCatalog;

pub use goods_state::GoodsState;
pub use state::AppState;

pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: AppState,
    tick_interval: Duration,
    last_tick: Instant,
}

impl App {
    pub fn new(config: &ConfigManager) -> Result<Self> {
        let colors = Arc::new(ColorCatalog::builtin());
        let state = AppState::new(colors, config.theme().clone());
        let tick_interval = Duration::from_millis(config.app_config().general.tick_interval_ms.max(1));

        let terminal = init_terminal()?;

        tracing::info!(
            "Started with {} goods, theme '{}'",
            state.goods.len(),
            config.theme().name
        );

        Ok(Self {
            terminal,
            state,
            tick_interval,
            last_tick: Instant::now(),
        })
    }

    pub fn goods(&self) -> &GoodsState {
        &self.state.goods
    }
}

impl Drop for App {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().map_err(|e| GoodsError::Terminal(e.to_string()))?;

    // No App exists yet, so Drop won't run if the rest fails
    let terminal = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)
        .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())));
    restore_on_error(terminal, restore_terminal)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, DisableBracketedPaste);
}

fn restore_on_error<T>(result: io::Result<T>, restore: impl FnOnce()) -> Result<T> {
    result.map_err(|e| {
        restore();
        GoodsError::Terminal(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_restore_runs_only_on_error() {
        let restored = Cell::new(0);

        let ok = restore_on_error(Ok(7), || restored.set(restored.get() + 1));
        assert_eq!(ok.unwrap(), 7);
        assert_eq!(restored.get(), 0);

        let err: Result<()> = restore_on_error(Err(io::Error::other("no tty")), || restored.set(restored.get() + 1));
        assert!(matches!(err, Err(GoodsError::Terminal(msg)) if msg == "no tty"));
        assert_eq!(restored.get(), 1);
    }
}
