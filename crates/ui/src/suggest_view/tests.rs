use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

use suggest_core::controller::{ControllerState, Phase};
use suggest_core::view::{WidgetView, NO_SUGGESTIONS};
use suggest_core::Suggestion;

use super::render::{FOOTER, HELP_LINES};
use super::{InputLine, SuggestView};

fn showing(query: &str, titles: &[&str]) -> ControllerState {
    ControllerState {
        query: query.into(),
        results: titles
            .iter()
            .enumerate()
            .map(|(i, t)| Suggestion::new(i as u64 + 1, *t))
            .collect(),
        visible: true,
        phase: Phase::Showing,
        ..Default::default()
    }
}

fn draw(view: &SuggestView, state: &ControllerState, input: &InputLine) -> Buffer {
    draw_sized(view, state, input, 60, 20)
}

fn draw_sized(
    view: &SuggestView,
    state: &ControllerState,
    input: &InputLine,
    width: u16,
    height: u16,
) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let widget = WidgetView::build(state);
    terminal
        .draw(|f| view.render(f, f.area(), &widget, input))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

fn screen_text(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| row_text(buf, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn input_with(text: &str) -> InputLine {
    let mut input = InputLine::new();
    input.set(text);
    input
}

#[test]
fn empty_input_shows_placeholder_and_no_list() {
    let view = SuggestView::new();
    let buf = draw(&view, &ControllerState::default(), &InputLine::new());
    let text = screen_text(&buf);
    assert!(text.contains("Search products..."));
    assert!(!text.contains(NO_SUGGESTIONS));
}

#[test]
fn loading_state_draws_loader() {
    let view = SuggestView::new();
    let mut state = showing("pho", &[]);
    state.loading = true;
    let buf = draw(&view, &state, &input_with("pho"));
    assert!(screen_text(&buf).contains("Loading…"));
}

#[test]
fn results_are_listed_below_input() {
    let view = SuggestView::new();
    let state = showing("phone", &["iPhone 9", "Phone Stand (Adjustable)"]);
    let buf = draw(&view, &state, &input_with("phone"));
    let text = screen_text(&buf);
    let first = text.find("iPhone 9").unwrap();
    let second = text.find("Phone Stand (Adjustable)").unwrap();
    assert!(first < second);
}

#[test]
fn matched_text_uses_highlight_colors() {
    let view = SuggestView::new();
    let state = showing("sham", &["Anti-Dandruff Shampoo"]);
    let input = input_with("sham");
    let buf = draw(&view, &state, &input);
    let widget = WidgetView::build(&state);
    let areas = view.areas(Rect::new(0, 0, 60, 20), &widget);
    let rows = areas.list_rows().unwrap();
    let label = row_text(&buf, rows.y);
    let byte = label.find("Sham").unwrap();
    let col = label[..byte].chars().count() as u16;
    assert_eq!(buf[(col, rows.y)].bg, view.theme.match_bg);
    assert_eq!(buf[(col + 4, rows.y)].symbol(), "p");
    assert_ne!(buf[(col + 4, rows.y)].bg, view.theme.match_bg);
}

#[test]
fn empty_results_show_no_suggestions_row() {
    let view = SuggestView::new();
    let buf = draw(&view, &showing("zzz", &[]), &input_with("zzz"));
    assert!(screen_text(&buf).contains(NO_SUGGESTIONS));
}

#[test]
fn active_option_is_shaded() {
    let view = SuggestView::new();
    let mut state = showing("a", &["Alpha", "Beta"]);
    state.active = Some(1);
    let buf = draw(&view, &state, &input_with("a"));
    let widget = WidgetView::build(&state);
    let rows = view
        .areas(Rect::new(0, 0, 60, 20), &widget)
        .list_rows()
        .unwrap();
    assert_eq!(buf[(rows.x, rows.y + 1)].bg, view.theme.active_bg);
    assert_ne!(buf[(rows.x, rows.y)].bg, view.theme.active_bg);
}

#[test]
fn help_popup_shows_every_entry() {
    let mut view = SuggestView::new();
    view.show_help = true;
    let buf = draw(&view, &ControllerState::default(), &InputLine::new());
    let text = screen_text(&buf);
    for line in HELP_LINES.iter().filter(|l| !l.is_empty()) {
        assert!(text.contains(line), "missing help line {line:?}");
    }
}

#[test]
fn help_popup_grows_when_lines_wrap() {
    let mut view = SuggestView::new();
    view.show_help = true;
    let buf = draw_sized(&view, &ControllerState::default(), &InputLine::new(), 40, 20);
    let text = screen_text(&buf);
    assert!(text.contains("Ctrl-V: paste from clipboard"));
    assert!(text.contains("F1 / Esc: close this help"));
    assert!(text.contains("Ctrl-C: quit"));
}

#[test]
fn footer_fits_default_width() {
    let view = SuggestView::new();
    let buf = draw(&view, &ControllerState::default(), &InputLine::new());
    let footer = row_text(&buf, 19);
    assert_eq!(footer.trim_end(), FOOTER.trim_end());
    assert!(footer.contains("Ctrl-C quit"));
}

#[test]
fn option_at_maps_rows_to_indices() {
    let view = SuggestView::new();
    let state = showing("a", &["Alpha", "Banana", "Cat"]);
    let widget = WidgetView::build(&state);
    let areas = view.areas(Rect::new(0, 0, 80, 24), &widget);
    let rows = areas.list_rows().unwrap();
    assert_eq!(view.option_at(&areas, &widget, rows.x, rows.y), Some(0));
    assert_eq!(view.option_at(&areas, &widget, rows.x + 3, rows.y + 2), Some(2));
    assert_eq!(view.option_at(&areas, &widget, rows.x, rows.y + 3), None);
    assert_eq!(view.option_at(&areas, &widget, areas.input.x, areas.input.y), None);
}

#[test]
fn placeholder_row_is_not_clickable() {
    let view = SuggestView::new();
    let state = showing("zzz", &[]);
    let widget = WidgetView::build(&state);
    let areas = view.areas(Rect::new(0, 0, 80, 24), &widget);
    let rows = areas.list_rows().unwrap();
    assert_eq!(view.option_at(&areas, &widget, rows.x, rows.y), None);
}

#[test]
fn container_covers_input_and_results() {
    let view = SuggestView::new();
    let state = showing("a", &["Alpha"]);
    let widget = WidgetView::build(&state);
    let areas = view.areas(Rect::new(0, 0, 80, 24), &widget);
    let results = areas.results.unwrap();
    assert!(super::rect_contains(areas.container, areas.input.x, areas.input.y));
    assert!(super::rect_contains(
        areas.container,
        results.x,
        results.y + results.height - 1
    ));
}

#[test]
fn hidden_body_has_no_results_area() {
    let view = SuggestView::new();
    let mut state = showing("a", &["Alpha"]);
    state.visible = false;
    let widget = WidgetView::build(&state);
    let areas = view.areas(Rect::new(0, 0, 80, 24), &widget);
    assert!(areas.results.is_none());
    assert_eq!(areas.container, areas.input);
}

#[test]
fn input_backspace_removes_whole_grapheme() {
    let mut input = input_with("cafe\u{301}");
    assert!(input.backspace());
    assert_eq!(input.text(), "caf");
    input.home();
    assert!(!input.backspace());
}

#[test]
fn input_insert_at_cursor() {
    let mut input = input_with("phne");
    input.left();
    input.left();
    assert!(input.insert('o'));
    assert_eq!(input.text(), "phone");
    assert!(!input.insert('\u{7}'));
}

#[test]
fn input_paste_collapses_line_breaks() {
    let mut input = InputLine::new();
    assert!(input.insert_str("phone\ncase"));
    assert_eq!(input.text(), "phone case");
    assert_eq!(input.cursor(), "phone case".len());
    assert!(!input.insert_str(""));
}

#[test]
fn input_delete_and_clear() {
    let mut input = input_with("abc");
    input.home();
    assert!(input.delete());
    assert_eq!(input.text(), "bc");
    input.end();
    assert!(!input.delete());
    assert!(input.clear());
    assert!(!input.clear());
}

#[test]
fn cursor_column_counts_display_width() {
    let mut input = input_with("日本");
    assert_eq!(input.cursor_column(), 4);
    input.left();
    assert_eq!(input.cursor_column(), 2);
}
