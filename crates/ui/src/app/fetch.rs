use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
    thread,
};

use suggest_core::{FetchOutcome, FetchRequest};

use super::types::FetchMessage;
use super::App;

const TARGET: &str = "ui::fetch";

impl App {
    /// Advance the debouncer and start a fetch if it fired.
    pub(super) fn pump(&mut self) {
        if let Some(request) = self.controller.tick() {
            self.spawn_fetch(request);
        }
    }

    fn spawn_fetch(&self, request: FetchRequest) {
        let source = Arc::clone(&self.source);
        let tx = self.results_tx.clone();
        let seq = request.seq;
        let spawned = thread::Builder::new()
            .name(format!("suggest-fetch-{seq}"))
            .spawn(move || {
                let outcome =
                    match panic::catch_unwind(AssertUnwindSafe(|| source.fetch(&request.query))) {
                        Ok(response) => FetchOutcome::from(response),
                        Err(_) => FetchOutcome::Failed("suggestion source panicked".into()),
                    };
                // The receiver is gone once the app has shut down.
                let _ = tx.send(FetchMessage { seq, outcome });
            });
        if let Err(e) = spawned {
            tracing::error!(target: TARGET, seq, "failed to start fetch thread: {e}");
            let _ = self.results_tx.send(FetchMessage {
                seq,
                outcome: FetchOutcome::Failed(e.to_string()),
            });
        }
    }

    /// Apply finished fetches. Returns true if any of them updated the state.
    pub(super) fn poll_results(&mut self) -> bool {
        let mut changed = false;
        while let Ok(msg) = self.results_rx.try_recv() {
            changed |= self.controller.resolve(msg.seq, msg.outcome);
        }
        changed
    }
}
