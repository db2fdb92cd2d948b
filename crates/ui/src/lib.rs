pub mod app;
pub mod suggest_view;
