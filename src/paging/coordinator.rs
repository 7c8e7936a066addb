//! Paging coordinator: the Idle/Transitioning state machine behind the tour.
//!
//! Three independent drivers change the desired page: swipes, indicator taps, and the
//! completion of an animated transition. Every request lands in [`PagingCoordinator::request_page`],
//! which records the desired page and then runs a single reconcile step. Reconcile starts an
//! animation only when none is in flight; when an animation finishes, the host reports it through
//! [`PagingCoordinator::finish_transition`], which settles the displayed page and reconciles
//! again. Requests that arrive mid-animation are therefore coalesced: only the most recent one is
//! honored once the host is free.
//!
//! The background crossfade and the page indicator follow the desired page immediately; they are
//! never deferred to animation completion.

use crate::catalog::{PageCatalog, PageDescriptor};
use crate::paging::host::{PageRenderer, TransitionDirection, TransitionHost, TransitionId};
use crate::paging::neighbors::{neighbor_after, neighbor_before};
use crate::paging::window::RenderedWindow;
use log::{debug, warn};
use std::time::Duration;

/// Default background crossfade length.
pub const DEFAULT_CROSSFADE: Duration = Duration::from_millis(250);

/// Tunables passed to the coordinator at initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingOptions {
    /// Duration handed to the host's crossfade primitive.
    pub crossfade: Duration,
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            crossfade: DEFAULT_CROSSFADE,
        }
    }
}

/// Whether an animated transition is currently executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning {
        transition: TransitionId,
        /// Page the in-flight animation is moving to.
        target: usize,
    },
}

/// Coordinator-owned paging state. Hosts can read it but only change it through requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingState {
    selected: Option<usize>,
    displayed: usize,
    phase: Phase,
}

impl PagingState {
    fn initial() -> Self {
        Self {
            selected: Some(0),
            displayed: 0,
            phase: Phase::Idle,
        }
    }

    /// Most recently requested page.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Page that is settled on screen.
    pub fn displayed(&self) -> usize {
        self.displayed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Desired page, with an unset selection meaning "stay where we are".
    fn desired(&self) -> usize {
        self.selected.unwrap_or(self.displayed)
    }
}

/// Serializes page transitions and keeps page, background and indicator consistent.
pub struct PagingCoordinator<R: PageRenderer> {
    catalog: PageCatalog,
    renderer: R,
    options: PagingOptions,
    state: PagingState,
    window: RenderedWindow<R::Page>,
    next_transition: TransitionId,
}

impl<R: PageRenderer> PagingCoordinator<R> {
    /// Start the flow on the first page.
    ///
    /// Page 0 is presented without animation, the background crossfades to its image and the
    /// indicator is set to 0. The neighbors of page 0 are rendered ahead of time.
    pub fn initialize<H>(
        catalog: PageCatalog,
        renderer: R,
        options: PagingOptions,
        host: &mut H,
    ) -> Self
    where
        H: TransitionHost<R::Page> + ?Sized,
    {
        let window = RenderedWindow::new(catalog.count());
        let mut coordinator = Self {
            catalog,
            renderer,
            options,
            state: PagingState::initial(),
            window,
            next_transition: 1,
        };

        coordinator.settle_window();
        if let Some(page) = coordinator.window.get(0) {
            host.present(page);
        }
        coordinator.sync_background(0, host);
        coordinator.sync_indicator(0, host);

        debug!("paging: initialized with {} pages", coordinator.catalog.count());
        coordinator
    }

    /// Ask for page `index` to become current.
    ///
    /// Out-of-range indices and requests for the already selected page are ignored. Otherwise
    /// the background and indicator follow `index` right away and a transition starts as soon as
    /// no other one is in flight.
    pub fn request_page<H>(&mut self, index: usize, host: &mut H)
    where
        H: TransitionHost<R::Page> + ?Sized,
    {
        let count = self.catalog.count();
        if index >= count {
            debug!("paging: ignoring request for page {index} (catalog has {count})");
            return;
        }
        if self.state.selected == Some(index) {
            return;
        }

        debug!(
            "paging: select {} (displayed {}, {:?})",
            index, self.state.displayed, self.state.phase
        );
        self.state.selected = Some(index);
        self.sync_background(index, host);
        self.sync_indicator(index, host);
        self.reconcile(host);
    }

    /// Completion handler for the host's animation primitive.
    ///
    /// Settles the page the finished animation moved to, then reconciles again to pick up
    /// requests that arrived while it was running. Ids that do not match the in-flight
    /// transition are ignored.
    pub fn finish_transition<H>(&mut self, transition: TransitionId, host: &mut H)
    where
        H: TransitionHost<R::Page> + ?Sized,
    {
        match self.state.phase {
            Phase::Transitioning {
                transition: current,
                target,
            } if current == transition => {
                debug!("paging: transition {transition} settled on page {target}");
                self.state.displayed = target;
                self.state.phase = Phase::Idle;
                self.settle_window();
                self.reconcile(host);
            }
            phase => {
                warn!("paging: ignoring completion of transition {transition} while {phase:?}");
            }
        }
    }

    /// Start an animated transition toward the desired page if the host is free.
    fn reconcile<H>(&mut self, host: &mut H)
    where
        H: TransitionHost<R::Page> + ?Sized,
    {
        if self.state.is_transitioning() {
            return;
        }
        let displayed = self.state.displayed;
        let target = self.state.desired();
        if target == displayed {
            return;
        }

        let transition = self.next_transition;
        self.next_transition += 1;
        self.state.phase = Phase::Transitioning { transition, target };

        self.window.ensure(displayed, &self.catalog, &self.renderer);
        self.window.ensure(target, &self.catalog, &self.renderer);
        let (Some(from), Some(to)) = (self.window.get(displayed), self.window.get(target)) else {
            unreachable!("pages {displayed} and {target} were just rendered");
        };

        debug!("paging: transition {transition} {displayed} -> {target}");
        // Always forward, whatever the numeric distance between the pages.
        host.animate(from, to, TransitionDirection::Forward, transition);
    }

    fn sync_background<H>(&self, index: usize, host: &mut H)
    where
        H: TransitionHost<R::Page> + ?Sized,
    {
        host.crossfade(&self.descriptor(index).background, self.options.crossfade);
    }

    fn sync_indicator<H>(&self, index: usize, host: &mut H)
    where
        H: TransitionHost<R::Page> + ?Sized,
    {
        host.set_indicator(index, self.catalog.count());
    }

    /// Keep only the displayed page and its neighbors rendered.
    fn settle_window(&mut self) {
        let count = self.catalog.count();
        let displayed = self.state.displayed;
        let keep = [
            displayed,
            neighbor_before(displayed, count),
            neighbor_after(displayed, count),
        ];
        self.window.retain(&keep);
        for index in keep {
            self.window.ensure(index, &self.catalog, &self.renderer);
        }
    }

    fn descriptor(&self, index: usize) -> &PageDescriptor {
        self.catalog
            .page_at(index)
            .unwrap_or_else(|err| unreachable!("coordinator used a bad index: {err}"))
    }

    /// Settled, visible page.
    pub fn current_index(&self) -> usize {
        self.state.displayed
    }

    /// Page the indicator and background reflect; may run ahead of [`Self::current_index`].
    pub fn selected_index(&self) -> usize {
        self.state.desired()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn neighbor_before(&self, index: usize) -> usize {
        neighbor_before(index, self.catalog.count())
    }

    pub fn neighbor_after(&self, index: usize) -> usize {
        neighbor_after(index, self.catalog.count())
    }

    pub fn page_count(&self) -> usize {
        self.catalog.count()
    }

    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &PagingState {
        &self.state
    }

    /// Rendered handle for `index`, if it is currently held.
    pub fn rendered(&self, index: usize) -> Option<&R::Page> {
        self.window.get(index)
    }

    /// Indices whose rendered pages are currently held.
    pub fn rendered_indices(&self) -> Vec<usize> {
        self.window.held()
    }
}
