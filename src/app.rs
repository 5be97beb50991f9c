use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crate::config::Config;
use crate::flow::{FlowController, StepDefinition};
use crate::ui::keybindings::{action_for, NavAction};
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};
use crate::ui::FlowView;

/// Event loop host wiring keyboard input to the flow controller.
///
/// All transitions run synchronously on the event thread; exactly one runs at
/// a time because they are dispatched from serialized key events.
pub struct App {
    config: Config,
    controller: FlowController,
    view: FlowView,
    /// Times the flow reached completion, incremented by the controller's
    /// completion callback
    completions: Rc<Cell<u32>>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, steps: Vec<StepDefinition>) -> Self {
        let completions = Rc::new(Cell::new(0));
        let counter = Rc::clone(&completions);
        let controller = FlowController::new(steps).on_complete(move || {
            counter.set(counter.get() + 1);
            tracing::info!("flow completed");
        });
        let view = FlowView::new(&config.theme);

        Self {
            config,
            controller,
            view,
            completions,
            should_quit: false,
        }
    }

    /// Times the flow reached completion.
    pub fn completions(&self) -> u32 {
        self.completions.get()
    }

    pub fn controller(&self) -> &FlowController {
        &self.controller
    }

    pub fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);

        while !self.should_quit {
            let view = &self.view;
            let controller = &mut self.controller;
            terminal.draw(|f| view.render(f, f.area(), controller))?;

            // Marker widths are only valid once the layout above has
            // committed, so margins are derived after each draw
            self.controller.recompute_edge_margins();

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        drop(guard);
        Ok(())
    }

    /// Dispatch a key press, honoring the nav enablement table.
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(key) else {
            return;
        };
        match action {
            NavAction::Back => {
                if self.controller.back_enabled() {
                    self.controller.retreat();
                    tracing::debug!(step = self.controller.current_step(), "retreated");
                }
            }
            NavAction::Next => {
                if self.controller.next_enabled() {
                    self.controller.advance();
                    tracing::debug!(
                        step = self.controller.current_step(),
                        complete = self.controller.is_complete(),
                        "advanced"
                    );
                }
            }
            NavAction::Skip => {
                if self.controller.skip_enabled() {
                    self.controller.skip();
                    tracing::debug!(step = self.controller.current_step(), "skipped");
                }
            }
            NavAction::Quit => {
                self.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(step_count: usize) -> App {
        App::new(Config::default(), crate::demo::numbered_flow(step_count))
    }

    #[test]
    fn test_keys_drive_the_flow() {
        let mut app = test_app(4);
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.controller().current_step(), 3);
        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.controller().current_step(), 4);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.controller().current_step(), 3);
    }

    #[test]
    fn test_disabled_back_is_ignored() {
        let mut app = test_app(3);
        app.handle_key(KeyCode::Char('b'));
        app.handle_key(KeyCode::Left);
        assert_eq!(app.controller().current_step(), 1);
    }

    #[test]
    fn test_next_disabled_after_completion_prevents_refire() {
        let mut app = test_app(2);
        app.handle_key(KeyCode::Char('n'));
        app.handle_key(KeyCode::Char('n'));
        assert!(app.controller().is_complete());
        assert_eq!(app.completions(), 1);

        // Next is disabled once complete, so further presses don't re-fire
        app.handle_key(KeyCode::Char('n'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.completions(), 1);
    }

    #[test]
    fn test_skip_disabled_on_final_step() {
        let mut app = test_app(3);
        app.handle_key(KeyCode::Char('n'));
        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.controller().current_step(), 3);
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.controller().current_step(), 3);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = test_app(2);
        assert!(!app.should_quit);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut app = test_app(2);
        app.handle_key(KeyCode::Char('z'));
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.controller().current_step(), 1);
    }

    #[test]
    fn test_empty_flow_keys_are_inert() {
        let mut app = test_app(0);
        app.handle_key(KeyCode::Char('n'));
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.controller().current_step(), 1);
        assert!(!app.controller().is_complete());
        assert_eq!(app.completions(), 0);
    }
}
