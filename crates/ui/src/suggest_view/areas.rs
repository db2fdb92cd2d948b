use ratatui::layout::{Constraint, Direction, Layout, Rect};

use suggest_core::view::{Body, WidgetView};

use super::SuggestView;

pub struct WidgetAreas {
    /// Everything the pointer counts as "inside the widget".
    pub container: Rect,
    pub input: Rect,
    /// Loader or listbox, bordered.
    pub results: Option<Rect>,
    pub footer: Rect,
}

impl WidgetAreas {
    /// Inner rect of the listbox, one row per option.
    pub fn list_rows(&self) -> Option<Rect> {
        self.results.map(|r| Rect {
            x: r.x + 1,
            y: r.y + 1,
            width: r.width.saturating_sub(2),
            height: r.height.saturating_sub(2),
        })
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

impl SuggestView {
    pub fn areas(&self, area: Rect, widget: &WidgetView) -> WidgetAreas {
        let vchunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        let content = vchunks[0];
        let footer = vchunks[1];
        let col_w = self.column_width.min(content.width);
        let left_pad = content.width.saturating_sub(col_w) / 2;
        let top = content.y + content.height.min(1);
        let input = Rect {
            x: content.x + left_pad,
            y: top,
            width: col_w,
            height: 3.min(content.height.saturating_sub(top - content.y)),
        };
        let below = input.y + input.height;
        let room = (content.y + content.height).saturating_sub(below);
        let wanted = match &widget.body {
            Body::Hidden => 0,
            Body::Loading => 3,
            Body::List(list) => list.options.len() as u16 + 2,
        };
        let results = (wanted > 0 && room >= 3).then(|| Rect {
            x: input.x,
            y: below,
            width: input.width,
            height: wanted.min(room),
        });
        let container = match results {
            Some(r) => input.union(r),
            None => input,
        };
        WidgetAreas {
            container,
            input,
            results,
            footer,
        }
    }

    /// Index of the suggestion drawn at (`col`, `row`), if any.
    pub fn option_at(
        &self,
        areas: &WidgetAreas,
        widget: &WidgetView,
        col: u16,
        row: u16,
    ) -> Option<usize> {
        let rows = areas.list_rows()?;
        if !rect_contains(rows, col, row) {
            return None;
        }
        let list = widget.listbox()?;
        let offset = (row - rows.y) as usize;
        list.options.get(offset).and_then(|o| o.index)
    }
}
