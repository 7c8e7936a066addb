//! Per-frame view state.
//!
//! A `ViewState` is a borrowed snapshot of what the terminal should show: the page (static or
//! mid-slide), the blended background, the indicator position and the dismiss button label.

use crate::paging::TransitionDirection;
use crate::render::assets::BackgroundArt;
use crate::render::ui::page::{slide_rows, TextPage};

/// What occupies the page area this frame.
#[derive(Debug, Clone, Copy)]
pub enum PageView<'a> {
    Blank,
    Static(&'a TextPage),
    Sliding {
        from: &'a TextPage,
        to: &'a TextPage,
        /// Eased progress in `[0, 1]`
        progress: f32,
        direction: TransitionDirection,
    },
}

impl PageView<'_> {
    /// Rows of text filling a `width` x `height` page area.
    pub fn rows(&self, width: usize, height: usize) -> Vec<String> {
        match *self {
            PageView::Blank => vec![" ".repeat(width); height],
            PageView::Static(page) => page.rows(width, height),
            PageView::Sliding {
                from,
                to,
                progress,
                direction,
            } => slide_rows(from, to, width, height, progress, direction),
        }
    }
}

/// Everything drawn in one frame.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub page: PageView<'a>,
    pub background: BackgroundArt,
    pub indicator: usize,
    pub indicator_count: usize,
    pub button_label: &'a str,
}

impl ViewState<'_> {
    /// Indicator dots as text, e.g. `○ ● ○`.
    pub fn indicator_text(&self) -> String {
        (0..self.indicator_count)
            .map(|index| if index == self.indicator { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
