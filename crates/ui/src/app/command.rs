use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::types::{Command, CommandOutcome};
use super::App;

const TARGET: &str = "ui::command";

impl Command {
    pub(super) fn from_key(app: &App, key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if app.view.show_help {
            return match key.code {
                KeyCode::Char('c') if ctrl => Some(Command::Exit),
                KeyCode::Esc | KeyCode::F(1) => Some(Command::CloseHelp),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('c') if ctrl => Some(Command::Exit),
            KeyCode::Char('u') if ctrl => Some(Command::ClearInput),
            KeyCode::Char('v') if ctrl => Some(Command::Paste),
            KeyCode::Char('a') if ctrl => Some(Command::CursorHome),
            KeyCode::Char('e') if ctrl => Some(Command::CursorEnd),
            KeyCode::Char('n') if ctrl => Some(Command::NextOption),
            KeyCode::Char('p') if ctrl => Some(Command::PrevOption),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Command::Insert(c)),
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Delete => Some(Command::Delete),
            KeyCode::Left => Some(Command::CursorLeft),
            KeyCode::Right => Some(Command::CursorRight),
            KeyCode::Home => Some(Command::CursorHome),
            KeyCode::End => Some(Command::CursorEnd),
            KeyCode::Enter => Some(Command::Submit),
            KeyCode::Down | KeyCode::Tab => Some(Command::NextOption),
            KeyCode::Up | KeyCode::BackTab => Some(Command::PrevOption),
            KeyCode::F(1) => Some(Command::ToggleHelp),
            KeyCode::Esc => {
                if app.controller.state().visible {
                    Some(Command::Dismiss)
                } else if !app.input.text().is_empty() {
                    Some(Command::ClearInput)
                } else {
                    Some(Command::Exit)
                }
            }
            _ => None,
        }
    }
}

impl App {
    pub(super) fn apply_command(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::Exit => return CommandOutcome::Exit,
            Command::Insert(c) => {
                if self.input.insert(c) {
                    self.input_edited();
                }
            }
            Command::Backspace => {
                if self.input.backspace() {
                    self.input_edited();
                }
            }
            Command::Delete => {
                if self.input.delete() {
                    self.input_edited();
                }
            }
            Command::ClearInput => {
                if self.input.clear() {
                    self.input_edited();
                }
            }
            Command::Paste => {
                if let Some(text) = self.clipboard_text() {
                    if self.input.insert_str(&text) {
                        self.input_edited();
                    }
                }
            }
            Command::CursorLeft => self.input.left(),
            Command::CursorRight => self.input.right(),
            Command::CursorHome => self.input.home(),
            Command::CursorEnd => self.input.end(),
            Command::Submit => {
                if self.controller.key_enter() {
                    self.sync_input();
                }
            }
            Command::NextOption => self.controller.move_active(1),
            Command::PrevOption => self.controller.move_active(-1),
            Command::Dismiss => self.controller.dismiss(),
            Command::ToggleHelp => self.view.show_help = !self.view.show_help,
            Command::CloseHelp => self.view.show_help = false,
        }
        CommandOutcome::Continue
    }

    fn clipboard_text(&mut self) -> Option<String> {
        if self.clipboard.is_none() {
            self.clipboard = Clipboard::new()
                .map_err(|e| tracing::warn!(target: TARGET, "clipboard unavailable: {e}"))
                .ok();
        }
        let clipboard = self.clipboard.as_mut()?;
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!(target: TARGET, "clipboard read failed: {e}");
                None
            }
        }
    }
}
