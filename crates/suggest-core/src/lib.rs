pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod source;
pub mod types;
pub mod view;

pub use controller::{Controller, ControllerState, Phase};
pub use debounce::Debouncer;
pub use source::{HttpSource, StaticSource, SuggestionSource};
pub use types::{FetchOutcome, FetchRequest, Origin, SourceResponse, Suggestion};
