//! Page-transition synchronization.
//!
//! This module owns the "current page" concept of the tour. Swipes, indicator taps and
//! animation completions all funnel into [`PagingCoordinator`], which serializes animated
//! transitions and keeps the page view, background crossfade and page indicator in lockstep.
//!
//! - [`coordinator`] - the Idle/Transitioning state machine
//! - [`host`] - traits the host surface implements (renderer and animation primitives)
//! - [`neighbors`] - circular index arithmetic used for swipe lookahead

pub mod coordinator;
pub mod host;
pub mod neighbors;
mod window;

pub use coordinator::{PagingCoordinator, PagingOptions, PagingState, Phase};
pub use host::{PageRenderer, TransitionDirection, TransitionHost, TransitionId};
pub use neighbors::{neighbor_after, neighbor_before};
