//! Input subsystem.
//!
//! `raw` polls crossterm and folds wheel bursts into swipes; `service` applies key bindings and
//! forwards actions to the application loop from a dedicated thread.

pub mod raw;
pub mod service;

// Modules outside this crate should prefer importing from `crate::input` rather than reaching
// into submodules.
pub use raw::SwipeDirection;
pub use service::{spawn_input_thread, translate_key, InputAction, InputService};
