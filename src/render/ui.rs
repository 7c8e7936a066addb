//! Terminal rendering components.
//!
//! This module hosts the concrete terminal UI implementation along with the page renderer,
//! layout, per-frame view state and styling utilities.

pub mod layout;
pub mod page;
pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

pub use layout::{HitTarget, TourLayout};
pub use page::{TextPage, TextPageRenderer};
pub use renderer::UIRenderer;
pub use state::{PageView, ViewState};
pub use terminal::TerminalUI;
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;

pub use ratatui::style::{Color, Style};
