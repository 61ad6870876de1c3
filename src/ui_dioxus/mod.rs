// Dioxus UI module - the whole board lives under here
pub mod app;
pub mod state;
pub mod views;


pub use app::{App, TodoBoard};
pub use state::{BoardAction, BoardState};
