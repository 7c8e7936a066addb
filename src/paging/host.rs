//! Collaborator traits consumed by the paging coordinator.
//!
//! The coordinator never draws anything itself. It asks a [`PageRenderer`] for page handles
//! and drives a [`TransitionHost`] that owns the actual animation, crossfade and indicator
//! widgets.

use crate::catalog::{ImageRef, PageDescriptor};
use std::time::Duration;

/// Identifier attached to each animated transition so its completion can be correlated.
pub type TransitionId = u64;

/// Visual direction of an animated page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    /// New page enters from the trailing edge.
    Forward,
    /// New page enters from the leading edge.
    Reverse,
}

/// Produces displayable pages from descriptors.
///
/// Implementations must be pure: rendering the same descriptor twice yields equivalent pages
/// and never affects pages returned earlier.
pub trait PageRenderer {
    type Page;

    fn render(&self, descriptor: &PageDescriptor) -> Self::Page;
}

/// Animation and indicator primitives provided by the host surface.
pub trait TransitionHost<P> {
    /// Show `page` immediately, without animation.
    fn present(&mut self, page: &P);

    /// Start an animated replacement of `from` by `to`.
    ///
    /// The host must eventually report completion exactly once by calling
    /// [`PagingCoordinator::finish_transition`](super::PagingCoordinator::finish_transition)
    /// with the same `transition` id. Until then the coordinator stays in the transitioning state.
    fn animate(&mut self, from: &P, to: &P, direction: TransitionDirection, transition: TransitionId);

    /// Crossfade the background to `image` over `duration`. Fire and forget.
    fn crossfade(&mut self, image: &ImageRef, duration: Duration);

    /// Move the page indicator to `index` out of `count` dots.
    fn set_indicator(&mut self, index: usize, count: usize);
}
