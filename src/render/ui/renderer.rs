//! UI renderer trait
//!
//! This module defines the `UIRenderer` trait for drawing tour frames and managing terminal
//! lifecycle hooks such as initialization and cleanup.

use crate::error::Result;
use crate::render::ui::state::ViewState;

/// Core trait for UI rendering
pub trait UIRenderer {
    /// Render one frame of the tour
    ///
    /// This method should:
    /// - Paint the background gradient
    /// - Draw the page (static or mid-slide)
    /// - Draw the indicator dots and the dismiss button
    fn render(&mut self, view_state: &ViewState) -> Result<()>;

    /// Initialize the terminal UI
    ///
    /// This method should:
    /// - Set up raw mode
    /// - Enter the alternate screen
    /// - Enable mouse capture
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::render::ui::state::PageView;

    /// Mock UI renderer for testing
    ///
    /// Records render invocations along with the indicator position and page rows drawn in the
    /// most recent frame.
    pub struct MockUIRenderer {
        pub render_count: usize,
        pub terminal_size: (u16, u16),
        pub is_initialized: bool,
        pub last_indicator: Option<(usize, usize)>,
        pub last_rows: Vec<String>,
    }

    impl Default for MockUIRenderer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUIRenderer {
        /// Create a new mock renderer with default settings
        pub fn new() -> Self {
            Self {
                render_count: 0,
                terminal_size: (40, 20),
                is_initialized: false,
                last_indicator: None,
                last_rows: Vec::new(),
            }
        }

        /// Set terminal size for testing
        pub fn set_terminal_size(&mut self, width: u16, height: u16) {
            self.terminal_size = (width, height);
        }
    }

    impl UIRenderer for MockUIRenderer {
        fn render(&mut self, view_state: &ViewState) -> Result<()> {
            self.render_count += 1;
            self.last_indicator = Some((view_state.indicator, view_state.indicator_count));
            self.last_rows = view_state.page.rows(self.terminal_size.0 as usize, 3);
            Ok(())
        }

        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }

        fn get_terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }
    }

    #[test]
    fn test_mock_renderer_basic() {
        use crate::render::assets::BackgroundArt;

        let mut renderer = MockUIRenderer::new();
        let view_state = ViewState {
            page: PageView::Blank,
            background: BackgroundArt::NEUTRAL,
            indicator: 0,
            indicator_count: 2,
            button_label: "Go",
        };

        assert!(!renderer.is_initialized);
        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        assert_eq!(renderer.render_count, 0);
        renderer.render(&view_state).unwrap();
        assert_eq!(renderer.render_count, 1);
        assert_eq!(renderer.last_indicator, Some((0, 2)));

        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }

    #[test]
    fn test_mock_renderer_resize_handling() {
        let mut renderer = MockUIRenderer::new();
        renderer.set_terminal_size(120, 30);
        assert_eq!(renderer.get_terminal_size().unwrap(), (120, 30));
    }
}
