//! Ratatui front-end: the home menu, the periodic table grid, the element
//! detail page and the quiz.

mod app;
mod helpers;
mod palette;
mod screens;
mod terminal;

pub use app::App;
pub use palette::{tint_color, Palette};
pub use terminal::run_app;
