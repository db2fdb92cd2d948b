use std::{
    io::{self, stdout},
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use suggest_core::view::WidgetView;

use super::types::{Command, CommandOutcome};
use super::App;

const TARGET: &str = "ui::run";
const FRAME: Duration = Duration::from_millis(100);

impl App {
    /// Drive the widget until the user quits. Returns the committed suggestion.
    pub fn run(mut self) -> io::Result<Option<String>> {
        let mut stdout = stdout();
        let raw_ok = enable_raw_mode().is_ok();
        if raw_ok {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        if !raw_ok {
            // Non-interactive fallback: draw once and exit cleanly
            tracing::warn!(target: TARGET, "raw mode unavailable; rendering a single frame");
            let _ = terminal.draw(|f| self.draw(f));
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
            return Ok(None);
        }

        let mut exit = false;
        while !exit {
            self.pump();
            self.poll_results();
            terminal.draw(|f| self.draw(f))?;

            let timeout = self
                .controller
                .next_deadline(Instant::now())
                .map_or(FRAME, |d| d.min(FRAME));
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                        if let Some(command) = Command::from_key(&self, key) {
                            if self.apply_command(command) == CommandOutcome::Exit {
                                exit = true;
                            }
                        }
                    }
                    Ok(Event::Mouse(mouse)) => {
                        if !self.view.show_help {
                            self.handle_mouse(mouse);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::error!(target: TARGET, "terminal read failed: {e}");
                        exit = true;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::error!(target: TARGET, "terminal poll failed: {e}");
                    exit = true;
                }
            }
        }

        self.controller.teardown();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(self.selection())
    }

    fn draw(&mut self, f: &mut Frame<'_>) {
        let size = f.area();
        self.last_frame = size;
        let widget = WidgetView::build(self.controller.state());
        self.view.render(f, size, &widget, &self.input);
    }
}
