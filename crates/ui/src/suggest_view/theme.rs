use ratatui::prelude::Color;

// Tokyonight-inspired palette.
const TN_BG_ALT: Color = Color::Rgb(31, 35, 53); // #1f2335
const TN_BG_STRONG: Color = Color::Rgb(65, 72, 104); // #414868
const TN_FG: Color = Color::Rgb(192, 202, 245); // #c0caf5
const TN_COMMENT: Color = Color::Rgb(86, 95, 137); // #565f89
const TN_BLUE: Color = Color::Rgb(122, 162, 247); // #7aa2f7
const TN_YELLOW: Color = Color::Rgb(224, 175, 104); // #e0af68

#[derive(Clone)]
pub struct Theme {
    pub border: Color,
    pub border_active: Color,
    pub text: Color,
    pub placeholder: Color,
    pub match_fg: Color,
    pub match_bg: Color,
    pub active_bg: Color,
    pub loader: Color,
    pub footer_bg: Color,
    pub footer_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            border: TN_COMMENT,
            border_active: TN_BLUE,
            text: TN_FG,
            placeholder: TN_COMMENT,
            match_fg: Color::Black,
            match_bg: TN_YELLOW,
            active_bg: TN_BG_STRONG,
            loader: TN_BLUE,
            footer_bg: TN_BG_ALT,
            footer_fg: TN_BLUE,
        }
    }
}
