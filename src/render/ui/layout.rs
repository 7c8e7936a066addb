//! Screen layout and hit testing.
//!
//! The tour screen is split top to bottom into the page area, the indicator row and the dismiss
//! button. Mouse clicks are resolved against the same layout the renderer draws with.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

const BUTTON_HEIGHT: u16 = 3;
const BUTTON_MARGIN_X: u16 = 2;
const BOTTOM_MARGIN: u16 = 1;
const INDICATOR_GAP: u16 = 2;

/// Something clickable on the tour screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Indicator dot for a zero-based page index.
    IndicatorDot(usize),
    DismissButton,
}

/// Areas of the tour screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourLayout {
    pub page: Rect,
    pub indicator: Rect,
    pub button: Rect,
}

impl TourLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(INDICATOR_GAP),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(BOTTOM_MARGIN),
            ])
            .split(area);

        let button_row = rows[3];
        let button = Rect {
            x: button_row.x + BUTTON_MARGIN_X.min(button_row.width / 2),
            width: button_row.width.saturating_sub(BUTTON_MARGIN_X * 2),
            ..button_row
        };

        Self {
            page: rows[0],
            indicator: rows[1],
            button,
        }
    }

    /// Column of each indicator dot. Dots are one cell wide, one blank cell apart, centered.
    pub fn dot_columns(&self, count: usize) -> Vec<u16> {
        if count == 0 {
            return Vec::new();
        }
        let total = (count * 2 - 1) as u16;
        let start = self.indicator.x + self.indicator.width.saturating_sub(total) / 2;
        (0..count as u16).map(|index| start + index * 2).collect()
    }

    pub fn hit_test(&self, column: u16, row: u16, dot_count: usize) -> Option<HitTarget> {
        if contains(self.button, column, row) {
            return Some(HitTarget::DismissButton);
        }
        if row == self.indicator.y && self.indicator.height > 0 {
            return self
                .dot_columns(dot_count)
                .iter()
                .position(|&dot| dot == column)
                .map(HitTarget::IndicatorDot);
        }
        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> TourLayout {
        TourLayout::new(Rect::new(0, 0, 40, 20))
    }

    #[test]
    fn areas_stack_from_the_bottom() {
        let layout = screen();
        assert_eq!(layout.button, Rect::new(2, 16, 36, 3));
        assert_eq!(layout.indicator, Rect::new(0, 13, 40, 1));
        assert_eq!(layout.page, Rect::new(0, 0, 40, 13));
    }

    #[test]
    fn dots_are_centered() {
        assert_eq!(screen().dot_columns(2), vec![18, 20]);
        assert_eq!(screen().dot_columns(3), vec![17, 19, 21]);
        assert!(screen().dot_columns(0).is_empty());
    }

    #[test]
    fn clicks_resolve_to_targets() {
        let layout = screen();
        assert_eq!(layout.hit_test(20, 13, 2), Some(HitTarget::IndicatorDot(1)));
        assert_eq!(layout.hit_test(19, 13, 2), None);
        assert_eq!(layout.hit_test(5, 17, 2), Some(HitTarget::DismissButton));
        assert_eq!(layout.hit_test(1, 17, 2), None);
        assert_eq!(layout.hit_test(10, 3, 2), None);
    }
}
