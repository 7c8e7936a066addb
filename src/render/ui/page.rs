//! Text page rendering.
//!
//! Turns a page descriptor into word-wrapped lines and lays those lines out as fixed-size
//! rows so two pages can be spliced together during a slide.

use crate::catalog::PageDescriptor;
use crate::paging::{PageRenderer, TransitionDirection};

/// Default wrap width, roughly a phone screen's worth of large-type text.
pub const DEFAULT_WRAP_WIDTH: usize = 32;

/// A rendered page: wrapped lines of message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPage {
    lines: Vec<String>,
}

impl TextPage {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lay the page out as `height` rows of exactly `width` characters, centered both ways.
    pub fn rows(&self, width: usize, height: usize) -> Vec<String> {
        let top = height.saturating_sub(self.lines.len()) / 2;
        (0..height)
            .map(|row| {
                let line = row
                    .checked_sub(top)
                    .and_then(|index| self.lines.get(index))
                    .map(String::as_str)
                    .unwrap_or("");
                center(line, width)
            })
            .collect()
    }
}

fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}

/// Greedy word wrap that keeps explicit line breaks and splits words longer than `width`.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                lines.push(word.drain(..width).collect());
            }
            if word.is_empty() {
                continue;
            }

            let current_len = current.chars().count();
            if current_len > 0 && current_len + 1 + word.len() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.extend(word);
        }
        lines.push(current);
    }

    lines
}

/// Splice two pages into a single frame of a horizontal slide.
///
/// `progress` runs from 0 (only `from` visible) to 1 (only `to` visible). A forward slide moves
/// content toward the leading edge so the new page enters from the trailing edge.
pub fn slide_rows(
    from: &TextPage,
    to: &TextPage,
    width: usize,
    height: usize,
    progress: f32,
    direction: TransitionDirection,
) -> Vec<String> {
    let shift = ((width as f32) * progress.clamp(0.0, 1.0)).round() as usize;
    let from_rows = from.rows(width, height);
    let to_rows = to.rows(width, height);

    from_rows
        .iter()
        .zip(to_rows.iter())
        .map(|(from_row, to_row)| {
            let (strip, start) = match direction {
                TransitionDirection::Forward => (format!("{from_row}{to_row}"), shift),
                TransitionDirection::Reverse => (format!("{to_row}{from_row}"), width - shift),
            };
            strip.chars().skip(start).take(width).collect()
        })
        .collect()
}

/// Stateless renderer producing [`TextPage`]s.
#[derive(Debug, Clone)]
pub struct TextPageRenderer {
    wrap_width: usize,
}

impl TextPageRenderer {
    pub fn new(wrap_width: usize) -> Self {
        Self { wrap_width }
    }
}

impl Default for TextPageRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WRAP_WIDTH)
    }
}

impl PageRenderer for TextPageRenderer {
    type Page = TextPage;

    fn render(&self, descriptor: &PageDescriptor) -> TextPage {
        TextPage {
            lines: wrap_text(&descriptor.text, self.wrap_width),
        }
    }
}
