use ratatui::{prelude::*, widgets::*};

use highlight::Segment;
use suggest_core::view::{Body, ListboxView, OptionView, WidgetView};
use unicode_width::UnicodeWidthStr;

use super::{InputLine, SuggestView, WidgetAreas};

pub(super) const FOOTER: &str = " Enter pick · ↑/↓ move · Esc hide · F1 help · Ctrl-C quit ";

pub(super) const HELP_LINES: [&str; 10] = [
    "Type to search; results follow a short pause.",
    "",
    "Enter: pick highlighted (or first) result",
    "Up / Down: move highlight",
    "Mouse: hover to show, click to pick",
    "Esc: hide list, then clear, then quit",
    "Ctrl-U: clear input",
    "Ctrl-V: paste from clipboard",
    "F1 / Esc: close this help",
    "Ctrl-C: quit",
];

impl SuggestView {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect, widget: &WidgetView, input: &InputLine) {
        let areas = self.areas(area, widget);
        self.render_input(f, &areas, widget, input);
        if let Some(results) = areas.results {
            match &widget.body {
                Body::Loading => self.render_loader(f, results),
                Body::List(list) => self.render_list(f, results, list),
                Body::Hidden => {}
            }
        }
        self.render_footer(f, areas.footer);
        if self.show_help {
            self.render_help(f, area);
        }
    }

    fn render_input(
        &self,
        f: &mut Frame<'_>,
        areas: &WidgetAreas,
        widget: &WidgetView,
        input: &InputLine,
    ) {
        let rect = areas.input;
        if rect.height < 3 {
            return;
        }
        let border = if widget.input.aria_expanded {
            self.theme.border_active
        } else {
            self.theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Search ");
        let line = if input.text().is_empty() {
            Line::styled(
                widget.input.placeholder,
                Style::default()
                    .fg(self.theme.placeholder)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Line::styled(input.text().to_string(), Style::default().fg(self.theme.text))
        };
        let inner_w = rect.width.saturating_sub(2) as usize;
        // Keep the cursor visible on long queries.
        let scroll = input.cursor_column().saturating_sub(inner_w.saturating_sub(1));
        f.render_widget(
            Paragraph::new(line).block(block).scroll((0, scroll as u16)),
            rect,
        );
        if !self.show_help {
            let x = rect.x + 1 + (input.cursor_column() - scroll) as u16;
            f.set_cursor_position(Position::new(x, rect.y + 1));
        }
    }

    fn render_loader(&self, f: &mut Frame<'_>, rect: Rect) {
        let loader = Paragraph::new(Line::styled(
            format!(" {} Loading…", self.spinner_frame()),
            Style::default().fg(self.theme.loader),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.border)),
        );
        f.render_widget(Clear, rect);
        f.render_widget(loader, rect);
    }

    fn render_list(&self, f: &mut Frame<'_>, rect: Rect, list: &ListboxView) {
        let items: Vec<ListItem> = list
            .options
            .iter()
            .map(|option| self.option_item(option, list.placeholder))
            .collect();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_active));
        f.render_widget(Clear, rect);
        f.render_widget(List::new(items).block(block), rect);
    }

    fn option_item(&self, option: &OptionView, placeholder: bool) -> ListItem<'static> {
        let mut base = Style::default().fg(self.theme.text);
        if placeholder {
            base = base
                .fg(self.theme.placeholder)
                .add_modifier(Modifier::ITALIC);
        }
        if option.selected {
            base = base.bg(self.theme.active_bg).add_modifier(Modifier::BOLD);
        }
        let spans: Vec<Span<'static>> = option
            .segments
            .iter()
            .map(|seg| self.segment_span(seg, base))
            .collect();
        ListItem::new(Line::from(spans)).style(base)
    }

    fn segment_span(&self, seg: &Segment, base: Style) -> Span<'static> {
        if seg.matched {
            Span::styled(
                seg.text.clone(),
                base.fg(self.theme.match_fg).bg(self.theme.match_bg),
            )
        } else {
            Span::styled(seg.text.clone(), base)
        }
    }

    fn render_footer(&self, f: &mut Frame<'_>, rect: Rect) {
        let footer = Paragraph::new(Line::styled(
            FOOTER,
            Style::default()
                .fg(self.theme.footer_fg)
                .bg(self.theme.footer_bg),
        ))
        .bg(self.theme.footer_bg);
        f.render_widget(footer, rect);
    }

    fn render_help(&self, f: &mut Frame<'_>, area: Rect) {
        let longest = HELP_LINES.iter().map(|l| l.width()).max().unwrap_or(0);
        let width = (longest as u16 + 4).max(20).min(area.width);
        let inner = width.saturating_sub(2) as usize;
        let rows: u16 = HELP_LINES.iter().map(|l| wrapped_rows(l, inner)).sum();
        let height = (rows + 2).min(area.height);
        let popup = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };
        let help = Paragraph::new(HELP_LINES.join("\n"))
            .block(Block::default().title("Help").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(Clear, popup);
        f.render_widget(help, popup);
    }
}

/// Rows `line` takes when word-wrapped to `width` columns.
fn wrapped_rows(line: &str, width: usize) -> u16 {
    if width == 0 {
        return 1;
    }
    let mut rows = 1;
    let mut used = 0;
    for word in line.split(' ') {
        let w = word.width();
        if used > 0 && used + 1 + w <= width {
            used += 1 + w;
            continue;
        }
        if used > 0 {
            rows += 1;
        }
        used = w;
        while used > width {
            rows += 1;
            used -= width;
        }
    }
    rows
}
