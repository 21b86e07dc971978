//! Ratatui front-end: a single screen with the input panel, the shopping
//! list, and a footer for status and key hints.

mod app;
mod forms;
mod helpers;
mod terminal;


pub use app::App;
pub use forms::Focus;
pub use terminal::run_app;
