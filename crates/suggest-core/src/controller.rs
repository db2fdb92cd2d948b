use std::time::{Duration, Instant};

use highlight::contains_ignore_case;

use crate::config::Settings;
use crate::debounce::Debouncer;
use crate::types::{FetchOutcome, FetchRequest, Suggestion};


const TARGET: &str = "suggest_core::controller";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Empty query, nothing shown.
    #[default]
    Idle,
    /// Waiting on the debounce window or an in-flight fetch.
    Pending,
    /// Results for the current query are in (possibly none).
    Showing,
    /// The user committed to a suggestion; fetching is suppressed.
    Selected,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    pub query: String,
    pub results: Vec<Suggestion>,
    pub visible: bool,
    pub loading: bool,
    pub locked: bool,
    /// Keyboard-highlighted option.
    pub active: Option<usize>,
    pub phase: Phase,
}

/// Owns the suggestion state and every transition on it.
///
/// The controller never performs I/O. A debounce firing surfaces as a
/// [`FetchRequest`] from [`Controller::tick`]; the caller runs it and hands the
/// outcome back through [`Controller::resolve`]. Only the most recently issued
/// request is allowed to update state.
#[derive(Debug)]
pub struct Controller {
    state: ControllerState,
    debouncer: Debouncer,
    max_results: usize,
    next_seq: u64,
    awaiting: Option<u64>,
}

impl Controller {
    pub fn new(debounce: Duration, max_results: usize) -> Self {
        Self {
            state: ControllerState::default(),
            debouncer: Debouncer::new(debounce),
            max_results: max_results.max(1),
            next_seq: 1,
            awaiting: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.debounce(), settings.max_results)
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Time until the pending debounce fires, for sizing the event poll.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    pub fn text_changed(&mut self, text: impl Into<String>) {
        self.text_changed_at(text, Instant::now());
    }

    pub fn text_changed_at(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if self.state.locked && text == self.state.query {
            // Echo of the committed selection.
            return;
        }
        self.state.query = text;
        self.state.locked = false;
        self.state.active = None;
        self.awaiting = None;
        if self.state.query.is_empty() {
            self.debouncer.cancel();
            self.state.results.clear();
            self.state.visible = false;
            self.state.loading = false;
            self.state.phase = Phase::Idle;
        } else {
            self.state.loading = true;
            self.state.phase = Phase::Pending;
            self.debouncer.trigger_at(now);
        }
        tracing::trace!(target: TARGET, query = %self.state.query, phase = ?self.state.phase, "text changed");
    }

    pub fn tick(&mut self) -> Option<FetchRequest> {
        self.tick_at(Instant::now())
    }

    /// Poll the debouncer; returns the request to run when it fires.
    pub fn tick_at(&mut self, now: Instant) -> Option<FetchRequest> {
        if !self.debouncer.poll_at(now) {
            return None;
        }
        if self.state.locked || self.state.query.is_empty() {
            return None;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.awaiting = Some(seq);
        tracing::debug!(target: TARGET, seq, query = %self.state.query, "issuing fetch");
        Some(FetchRequest {
            seq,
            query: self.state.query.clone(),
        })
    }

    pub fn is_awaiting(&self, seq: u64) -> bool {
        self.awaiting == Some(seq)
    }

    /// Apply a fetch outcome. Returns `false` when the outcome is stale and was
    /// dropped.
    pub fn resolve(&mut self, seq: u64, outcome: FetchOutcome) -> bool {
        if !self.is_awaiting(seq) {
            tracing::debug!(target: TARGET, seq, latest = ?self.awaiting, "dropping stale fetch result");
            return false;
        }
        self.awaiting = None;
        match outcome {
            FetchOutcome::Live(products) | FetchOutcome::Fallback(products) => {
                let results = self.filter(products);
                tracing::debug!(target: TARGET, seq, shown = results.len(), "fetch resolved");
                self.state.results = results;
                self.state.visible = true;
            }
            FetchOutcome::Failed(reason) => {
                tracing::warn!(target: TARGET, seq, "suggestion pipeline failed: {reason}");
                self.state.results.clear();
                self.state.visible = false;
            }
        }
        self.state.loading = false;
        self.state.active = None;
        self.state.phase = Phase::Showing;
        true
    }

    fn filter(&self, products: Vec<Suggestion>) -> Vec<Suggestion> {
        let query = self.state.query.to_lowercase();
        products
            .into_iter()
            .filter(|p| contains_ignore_case(&p.title, &query))
            .take(self.max_results)
            .collect()
    }

    /// Commit the active suggestion, or the first one when none is active.
    /// Nothing is committed while results for the current query are pending.
    pub fn key_enter(&mut self) -> bool {
        if self.state.results.is_empty() {
            return false;
        }
        let idx = self
            .state
            .active
            .filter(|&i| i < self.state.results.len())
            .unwrap_or(0);
        self.select(idx)
    }

    pub fn click(&mut self, index: usize) -> bool {
        self.select(index)
    }

    fn select(&mut self, index: usize) -> bool {
        if self.state.phase != Phase::Showing {
            return false;
        }
        let Some(choice) = self.state.results.get(index) else {
            return false;
        };
        tracing::debug!(target: TARGET, id = %choice.id, title = %choice.title, "suggestion selected");
        self.state.query = choice.title.clone();
        self.state.locked = true;
        self.state.visible = false;
        self.state.loading = false;
        self.state.active = None;
        self.state.phase = Phase::Selected;
        self.debouncer.cancel();
        self.awaiting = None;
        true
    }

    /// Move the keyboard highlight by `delta`, wrapping at both ends.
    pub fn move_active(&mut self, delta: isize) {
        let len = self.state.results.len();
        if !self.state.visible || self.state.loading || len == 0 {
            return;
        }
        let next = match self.state.active {
            None if delta >= 0 => 0,
            None => len - 1,
            Some(cur) => (cur as isize + delta).rem_euclid(len as isize) as usize,
        };
        self.state.active = Some(next);
    }

    pub fn dismiss(&mut self) {
        self.state.visible = false;
        self.state.active = None;
    }

    pub fn pointer_enter(&mut self) {
        if !self.state.results.is_empty() {
            self.state.visible = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        self.state.visible = false;
    }

    /// Stop all pending work; later ticks and resolutions become no-ops.
    pub fn teardown(&mut self) {
        self.debouncer.cancel();
        self.awaiting = None;
        self.state.loading = false;
    }
}
