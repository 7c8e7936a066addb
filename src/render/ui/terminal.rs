//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using ratatui for the tour
//! screen. It only draws; paging decisions stay with the coordinator and animation progress with
//! the terminal host.

use crate::error::Result;
use crate::render::assets::BackgroundArt;
use crate::render::ui::layout::TourLayout;
use crate::render::ui::state::{PageView, ViewState};
use crate::render::ui::{ColorTheme, UIRenderer};
use ratatui::crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default())
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    /// Paint the background gradient one row at a time
    fn render_background(frame: &mut Frame, area: Rect, art: BackgroundArt) {
        for row in 0..area.height {
            let color = art.row_color(row, area.height).to_color();
            let line = Rect {
                y: area.y + row,
                height: 1,
                ..area
            };
            frame.render_widget(Block::default().style(Style::default().bg(color)), line);
        }
    }

    fn render_page(frame: &mut Frame, area: Rect, page: &PageView, theme: &ColorTheme) {
        let lines: Vec<Line> = page
            .rows(area.width as usize, area.height as usize)
            .into_iter()
            .map(|row| Line::styled(row, theme.page_text))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Indicator dots, centered so they line up with `TourLayout::dot_columns`
    fn render_indicator(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let mut spans = Vec::with_capacity(view_state.indicator_count * 2);
        for index in 0..view_state.indicator_count {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            let (dot, color) = if index == view_state.indicator {
                ("●", theme.indicator_active)
            } else {
                ("○", theme.indicator_inactive)
            };
            spans.push(Span::styled(dot, Style::default().fg(color)));
        }

        let indicator = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(indicator, area);
    }

    fn render_button(frame: &mut Frame, area: Rect, label: &str, theme: &ColorTheme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.button_border))
            .style(theme.button);
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(theme.button)
            .block(block);
        frame.render_widget(button, area);
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            // Extract theme before closure to avoid borrowing issues
            let theme = &self.theme;

            terminal.draw(move |frame| {
                let size = frame.size();
                let layout = TourLayout::new(size);

                Self::render_background(frame, size, view_state.background);
                Self::render_page(frame, layout.page, &view_state.page, theme);
                Self::render_indicator(frame, layout.indicator, view_state, theme);
                Self::render_button(frame, layout.button, view_state.button_label, theme);
            })?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ImageRef, PageDescriptor};
    use crate::paging::PageRenderer;
    use crate::render::ui::page::TextPageRenderer;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color};

    fn draw(view_state: &ViewState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        let theme = ColorTheme::default();
        terminal
            .draw(|frame| {
                let size = frame.size();
                let layout = TourLayout::new(size);
                TerminalUI::render_background(frame, size, view_state.background);
                TerminalUI::render_page(frame, layout.page, &view_state.page, &theme);
                TerminalUI::render_indicator(frame, layout.indicator, view_state, &theme);
                TerminalUI::render_button(frame, layout.button, view_state.button_label, &theme);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer.get(x, y).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_terminal_ui_creation() {
        let ui = TerminalUI::new().unwrap();
        assert!(ui.terminal.is_none());

        let ui = TerminalUI::with_theme(ColorTheme::monochrome()).unwrap();
        assert_eq!(ui.theme.indicator_active, Color::Black);
    }

    #[test]
    fn test_frame_layout() {
        let page = TextPageRenderer::default()
            .render(&PageDescriptor::new("Track only what you want", ImageRef::new("x")));
        let view_state = ViewState {
            page: PageView::Static(&page),
            background: BackgroundArt::NEUTRAL,
            indicator: 1,
            indicator_count: 2,
            button_label: "What a technology!",
        };

        let buffer = draw(&view_state);

        assert!(row_text(&buffer, 6).contains("Track only what you want"));
        assert_eq!(row_text(&buffer, 13).trim(), "○ ●");
        assert!(row_text(&buffer, 17).contains("What a technology!"));
        assert_eq!(
            buffer.get(0, 0).bg,
            BackgroundArt::NEUTRAL.top.to_color()
        );
    }
}
