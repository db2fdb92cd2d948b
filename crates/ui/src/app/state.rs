use std::sync::{
    mpsc::{self, Receiver, Sender},
    Arc,
};

use arboard::Clipboard;
use ratatui::layout::Rect;
use suggest_core::{config::Settings, Controller, Phase, SuggestionSource};

use crate::suggest_view::{InputLine, SuggestView};

use super::types::FetchMessage;

pub struct App {
    pub controller: Controller,
    pub input: InputLine,
    pub view: SuggestView,
    pub source: Arc<dyn SuggestionSource>,
    pub pointer_inside: bool,
    pub last_frame: Rect,
    pub clipboard: Option<Clipboard>,
    pub(super) results_tx: Sender<FetchMessage>,
    pub(super) results_rx: Receiver<FetchMessage>,
}

impl App {
    pub fn new(source: Arc<dyn SuggestionSource>, settings: &Settings) -> Self {
        let (results_tx, results_rx) = mpsc::channel();
        Self {
            controller: Controller::from_settings(settings),
            input: InputLine::new(),
            view: SuggestView::new(),
            source,
            pointer_inside: false,
            last_frame: Rect::default(),
            clipboard: None,
            results_tx,
            results_rx,
        }
    }

    /// The committed suggestion, if the session ended on one.
    pub fn selection(&self) -> Option<String> {
        (self.controller.phase() == Phase::Selected).then(|| self.controller.state().query.clone())
    }

    /// Start with `query` typed into the input.
    pub fn seed_query(&mut self, query: &str) {
        if self.input.insert_str(query) {
            self.input_edited();
        }
    }

    /// Report the input's current text to the controller.
    pub(super) fn input_edited(&mut self) {
        self.controller.text_changed(self.input.text());
    }

    /// Mirror a committed selection into the input line.
    pub(super) fn sync_input(&mut self) {
        let query = &self.controller.state().query;
        if self.input.text() != query {
            let query = query.clone();
            self.input.set(&query);
            // Selection echo; the controller drops it.
            self.input_edited();
        }
    }
}
