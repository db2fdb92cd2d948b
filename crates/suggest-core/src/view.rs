//! Render-ready snapshot of the widget, including its accessibility contract.
//!
//! The terminal front end draws from [`WidgetView`]; tests can assert on it
//! without a terminal.

use highlight::{highlight_matches, Segment};

use crate::controller::ControllerState;
use crate::types::ProductId;

pub const INPUT_ID: &str = "search-input";
pub const RESULTS_ID: &str = "autocomplete-results";
pub const INPUT_PLACEHOLDER: &str = "Search products...";
pub const NO_SUGGESTIONS: &str = "No suggestions found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Combobox,
    Listbox,
    Option,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Combobox => "combobox",
            Role::Listbox => "listbox",
            Role::Option => "option",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    pub id: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub role: Role,
    pub aria_autocomplete: &'static str,
    pub aria_expanded: bool,
    pub aria_controls: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub role: Role,
    /// `None` for the "no suggestions" placeholder row.
    pub id: Option<ProductId>,
    pub index: Option<usize>,
    pub segments: Vec<Segment>,
    pub selected: bool,
}

impl OptionView {
    pub fn label(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListboxView {
    pub id: &'static str,
    pub role: Role,
    pub options: Vec<OptionView>,
    pub placeholder: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Hidden,
    Loading,
    List(ListboxView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    pub input: InputView,
    pub body: Body,
}

impl WidgetView {
    pub fn build(state: &ControllerState) -> Self {
        let shown = state.visible && !state.loading;
        let input = InputView {
            id: INPUT_ID,
            value: state.query.clone(),
            placeholder: INPUT_PLACEHOLDER,
            role: Role::Combobox,
            aria_autocomplete: "list",
            aria_expanded: shown && !state.results.is_empty(),
            aria_controls: RESULTS_ID,
        };
        let body = if state.loading {
            Body::Loading
        } else if state.query.is_empty() || !state.visible {
            Body::Hidden
        } else if state.results.is_empty() {
            Body::List(ListboxView {
                id: RESULTS_ID,
                role: Role::Listbox,
                options: vec![OptionView {
                    role: Role::Option,
                    id: None,
                    index: None,
                    segments: highlight_matches(&state.query, NO_SUGGESTIONS),
                    selected: false,
                }],
                placeholder: true,
            })
        } else {
            let options = state
                .results
                .iter()
                .enumerate()
                .map(|(i, p)| OptionView {
                    role: Role::Option,
                    id: Some(p.id.clone()),
                    index: Some(i),
                    segments: highlight_matches(&state.query, &p.title),
                    selected: state.active == Some(i),
                })
                .collect();
            Body::List(ListboxView {
                id: RESULTS_ID,
                role: Role::Listbox,
                options,
                placeholder: false,
            })
        };
        Self { input, body }
    }

    pub fn listbox(&self) -> Option<&ListboxView> {
        match &self.body {
            Body::List(list) => Some(list),
            _ => None,
        }
    }
}
