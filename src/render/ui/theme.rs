//! Color theme and styling definitions using ratatui colors
//!
//! Themes cover the foreground elements of the tour (message text, indicator dots, dismiss
//! button). The background gradient comes from the page's art asset, not from the theme.

use crate::config::ThemeName;
use ratatui::style::{Color, Modifier, Style};

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Page message text
    pub page_text: Style,

    /// Indicator dot of the selected page
    pub indicator_active: Color,

    /// Indicator dots of the other pages
    pub indicator_inactive: Color,

    /// Dismiss button fill and label
    pub button: Style,

    /// Dismiss button border
    pub button_border: Color,
}

impl Default for ColorTheme {
    /// Dark text and a black button, like the original light onboarding screens
    fn default() -> Self {
        Self {
            page_text: Style::default()
                .fg(Color::Rgb(26, 27, 34))
                .add_modifier(Modifier::BOLD),
            indicator_active: Color::Rgb(26, 27, 34),
            indicator_inactive: Color::Rgb(120, 120, 128),
            button: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(26, 27, 34))
                .add_modifier(Modifier::BOLD),
            button_border: Color::Rgb(26, 27, 34),
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            page_text: Style::default().fg(Color::Black),
            indicator_active: Color::Black,
            indicator_inactive: Color::Gray,
            button: Style::default().fg(Color::White).bg(Color::Black),
            button_border: Color::Black,
        }
    }

    /// Create a high-contrast theme
    pub fn high_contrast() -> Self {
        Self {
            page_text: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            indicator_active: Color::LightYellow,
            indicator_inactive: Color::White,
            button: Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
            button_border: Color::White,
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::default(),
            ThemeName::Monochrome => Self::monochrome(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.button.fg, Some(Color::White));
        assert_eq!(theme.page_text.bg, None);
        assert_ne!(theme.indicator_active, theme.indicator_inactive);
    }

    #[test]
    fn test_monochrome_theme() {
        let theme = ColorTheme::monochrome();
        assert_eq!(theme.indicator_active, Color::Black);
        assert_eq!(theme.button.bg, Some(Color::Black));
    }

    #[test]
    fn test_theme_from_name() {
        let theme = ColorTheme::from_name(ThemeName::HighContrast);
        assert_eq!(theme.button.bg, Some(Color::LightYellow));
        assert!(theme.page_text.add_modifier.contains(Modifier::UNDERLINED));

        let theme = ColorTheme::from_name(ThemeName::Monochrome);
        assert_eq!(theme.indicator_inactive, Color::Gray);
    }
}
