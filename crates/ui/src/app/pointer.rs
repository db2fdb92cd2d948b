use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use suggest_core::view::WidgetView;

use crate::suggest_view::rect_contains;

use super::App;

impl App {
    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
        let widget = WidgetView::build(self.controller.state());
        let areas = self.view.areas(self.last_frame, &widget);
        let inside = rect_contains(areas.container, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if inside != self.pointer_inside {
                    self.pointer_inside = inside;
                    if inside {
                        self.controller.pointer_enter();
                    } else {
                        self.controller.pointer_leave();
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.view.option_at(&areas, &widget, mouse.column, mouse.row) {
                    if self.controller.click(index) {
                        self.sync_input();
                    }
                }
            }
            MouseEventKind::ScrollDown if inside => self.controller.move_active(1),
            MouseEventKind::ScrollUp if inside => self.controller.move_active(-1),
            _ => {}
        }
    }
}
