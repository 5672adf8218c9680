// Event loop - poll input, dispatch, redraw when dirty

use std::time::{Duration, Instant};

use crossterm::event;

use super::App;
use crate::action::Action;
use crate::error::{GoodsError, Result};

const INPUT_POLL_MS: u64 = 16;

impl App {
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.last_tick.elapsed() >= self.tick_interval {
                self.state.dispatch(Action::Tick);
                self.last_tick = Instant::now();
            }

            if self.state.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(INPUT_POLL_MS))
                .map_err(|e| GoodsError::Terminal(e.to_string()))?
            {
                let event = event::read().map_err(|e| GoodsError::Terminal(e.to_string()))?;

                // Any user input implies we want to give UI feedback
                self.state.mark_dirty();

                if let Some(action) = self.state.handle_event(event) {
                    self.state.dispatch(action);
                }
            }

            if self.state.should_quit {
                break;
            }

            if self.state.needs_redraw {
                self.draw()?;
                self.state.needs_redraw = false;
            }
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let state = &mut self.state;
        self.terminal
            .draw(|frame| state.render(frame))
            .map_err(|e| GoodsError::Terminal(e.to_string()))?;
        Ok(())
    }
}
