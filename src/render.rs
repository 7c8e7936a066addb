//! Rendering subsystem.
//!
//! The terminal host surface of the tour: the clock-driven animation host the paging
//! coordinator drives, background art assets, and the ratatui drawing code.

pub mod animation;
pub mod assets;
pub mod ui;

pub use animation::TerminalHost;
pub use assets::{BackgroundArt, Rgb};
