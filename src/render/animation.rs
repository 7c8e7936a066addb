//! Clock-driven animation host for the terminal.
//!
//! [`TerminalHost`] implements the paging coordinator's [`TransitionHost`] primitives. Slides and
//! crossfades are recorded when requested and stamped with a start time on the next
//! [`TerminalHost::advance`] call, so progress depends only on the instants the render loop feeds
//! in. `advance` reports a finished slide exactly once; the caller passes that id back to the
//! coordinator.

use crate::catalog::ImageRef;
use crate::paging::{TransitionDirection, TransitionHost, TransitionId};
use crate::render::assets::BackgroundArt;
use crate::render::ui::page::TextPage;
use crate::render::ui::state::{PageView, ViewState};
use log::trace;
use std::time::{Duration, Instant};

/// Progress of a timed effect, stamped lazily on the first tick after it starts.
#[derive(Debug, Clone)]
struct Timeline {
    duration: Duration,
    started: Option<Instant>,
    progress: f32,
}

impl Timeline {
    fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: None,
            progress: 0.0,
        }
    }

    fn advance(&mut self, now: Instant) -> f32 {
        let started = *self.started.get_or_insert(now);
        self.progress = if self.duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(started).as_secs_f32() / self.duration.as_secs_f32())
                .min(1.0)
        };
        self.progress
    }

    fn is_done(&self) -> bool {
        self.progress >= 1.0
    }
}

#[derive(Debug, Clone)]
struct Slide {
    from: TextPage,
    to: TextPage,
    direction: TransitionDirection,
    transition: TransitionId,
    timeline: Timeline,
}

#[derive(Debug, Clone)]
struct Crossfade {
    from: BackgroundArt,
    to: BackgroundArt,
    timeline: Timeline,
}

impl Crossfade {
    fn current(&self) -> BackgroundArt {
        self.from.blend(self.to, self.timeline.progress)
    }
}

/// Ease-out cubic: fast start, gentle landing.
pub fn ease_out(t: f32) -> f32 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}

/// Terminal implementation of the coordinator's animation and indicator primitives.
#[derive(Debug)]
pub struct TerminalHost {
    transition_duration: Duration,
    page: Option<TextPage>,
    slide: Option<Slide>,
    background: BackgroundArt,
    crossfade: Option<Crossfade>,
    indicator: usize,
    indicator_count: usize,
}

impl TerminalHost {
    pub fn new(transition_duration: Duration) -> Self {
        Self {
            transition_duration,
            page: None,
            slide: None,
            background: BackgroundArt::NEUTRAL,
            crossfade: None,
            indicator: 0,
            indicator_count: 0,
        }
    }

    /// Step all running effects to `now`. Returns the id of a slide that just finished.
    pub fn advance(&mut self, now: Instant) -> Option<TransitionId> {
        if let Some(crossfade) = &mut self.crossfade {
            crossfade.timeline.advance(now);
            if crossfade.timeline.is_done() {
                self.background = crossfade.to;
                self.crossfade = None;
            }
        }

        let slide = self.slide.as_mut()?;
        slide.timeline.advance(now);
        if !slide.timeline.is_done() {
            return None;
        }
        let finished = self.slide.take()?;
        trace!("host: slide {} finished", finished.transition);
        self.page = Some(finished.to);
        Some(finished.transition)
    }

    #[cfg(test)]
    pub(crate) fn is_animating(&self) -> bool {
        self.slide.is_some() || self.crossfade.is_some()
    }

    /// Background as currently blended.
    pub fn background(&self) -> BackgroundArt {
        self.crossfade
            .as_ref()
            .map_or(self.background, Crossfade::current)
    }

    /// Background the crossfade is heading to.
    #[cfg(test)]
    pub(crate) fn background_target(&self) -> BackgroundArt {
        self.crossfade.as_ref().map_or(self.background, |c| c.to)
    }

    pub fn indicator(&self) -> (usize, usize) {
        (self.indicator, self.indicator_count)
    }

    /// Transition id of the running slide, if any.
    #[cfg(test)]
    pub(crate) fn running_transition(&self) -> Option<TransitionId> {
        self.slide.as_ref().map(|slide| slide.transition)
    }

    /// Snapshot of everything the renderer draws.
    pub fn view_state<'a>(&'a self, button_label: &'a str) -> ViewState<'a> {
        let page = match (&self.slide, &self.page) {
            (Some(slide), _) => PageView::Sliding {
                from: &slide.from,
                to: &slide.to,
                progress: ease_out(slide.timeline.progress),
                direction: slide.direction,
            },
            (None, Some(page)) => PageView::Static(page),
            (None, None) => PageView::Blank,
        };

        ViewState {
            page,
            background: self.background(),
            indicator: self.indicator,
            indicator_count: self.indicator_count,
            button_label,
        }
    }
}

impl TransitionHost<TextPage> for TerminalHost {
    fn present(&mut self, page: &TextPage) {
        self.page = Some(page.clone());
    }

    fn animate(
        &mut self,
        from: &TextPage,
        to: &TextPage,
        direction: TransitionDirection,
        transition: TransitionId,
    ) {
        trace!("host: slide {transition} started");
        self.page = Some(from.clone());
        self.slide = Some(Slide {
            from: from.clone(),
            to: to.clone(),
            direction,
            transition,
            timeline: Timeline::new(self.transition_duration),
        });
    }

    fn crossfade(&mut self, image: &ImageRef, duration: Duration) {
        // Restart from whatever is on screen so an interrupted fade never jumps.
        let from = self.background();
        self.crossfade = Some(Crossfade {
            from,
            to: BackgroundArt::lookup(image),
            timeline: Timeline::new(duration),
        });
    }

    fn set_indicator(&mut self, index: usize, count: usize) {
        self.indicator = index;
        self.indicator_count = count;
    }
}
