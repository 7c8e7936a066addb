//! # pagetour - Terminal Onboarding Tour
//!
//! A paged introduction sequence for the terminal: message pages that slide in, a background
//! gradient that crossfades with the page, a clickable page indicator, and a dismiss button.
//!
//! ## Architecture
//!
//! - [`catalog`] - The fixed, ordered set of pages
//! - [`paging`] - Page-transition synchronization (the coordinator state machine)
//! - [`render`] - Terminal host surface: animation host, background art, ratatui drawing
//! - [`input`] - Key and mouse handling
//! - [`config`] - TOML configuration
//! - [`error`] - Centralized error types
//! - [`app`] - Application loop tying the pieces together

// Core modules
pub mod catalog;
pub mod error;
pub mod paging;

// Host surface
pub mod input;
pub mod render;

// Application
pub mod app;
pub mod config;

// Re-export commonly used types for convenience
pub use error::{Result, TourError};

// Public API surface for external usage
pub use app::{Application, Outcome};
pub use catalog::{ImageRef, PageCatalog, PageDescriptor};
pub use config::TourConfig;
pub use paging::{PageRenderer, PagingCoordinator, PagingOptions, TransitionHost};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
