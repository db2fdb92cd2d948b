mod command;
mod fetch;
mod pointer;
mod run;
mod state;
mod types;


pub use state::App;
pub use types::FetchMessage;
