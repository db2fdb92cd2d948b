mod areas;
mod input;
mod render;
mod theme;

#[cfg(test)]
mod tests;

use std::time::Instant;

pub use areas::{rect_contains, WidgetAreas};
pub use input::InputLine;
pub use theme::Theme;

pub const DEFAULT_COLUMN_WIDTH: u16 = 60;
const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

pub struct SuggestView {
    pub column_width: u16,
    pub theme: Theme,
    pub show_help: bool,
    started: Instant,
}

impl Default for SuggestView {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestView {
    pub fn new() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            theme: Theme::default(),
            show_help: false,
            started: Instant::now(),
        }
    }

    fn spinner_frame(&self) -> &'static str {
        let step = (self.started.elapsed().as_millis() / 100) as usize;
        SPINNER[step % SPINNER.len()]
    }
}
