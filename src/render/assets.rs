//! Background art assets.
//!
//! Terminal stand-ins for the onboarding background images: each [`ImageRef`] resolves to a
//! vertical two-color gradient. Unknown references fall back to a neutral gradient so a typo in
//! the config never breaks the tour.

use crate::catalog::ImageRef;
use ratatui::style::Color;

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear interpolation toward `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

/// Vertical gradient drawn behind the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundArt {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl BackgroundArt {
    pub const NEUTRAL: BackgroundArt = BackgroundArt {
        top: Rgb(236, 236, 240),
        bottom: Rgb(200, 200, 208),
    };

    /// Resolve an image reference to its art.
    pub fn lookup(image: &ImageRef) -> BackgroundArt {
        match image.name() {
            "onboarding-1" => BackgroundArt {
                top: Rgb(84, 148, 236),
                bottom: Rgb(190, 226, 250),
            },
            "onboarding-2" => BackgroundArt {
                top: Rgb(238, 120, 148),
                bottom: Rgb(252, 214, 180),
            },
            "sunset" => BackgroundArt {
                top: Rgb(120, 72, 160),
                bottom: Rgb(250, 170, 90),
            },
            "forest" => BackgroundArt {
                top: Rgb(40, 110, 80),
                bottom: Rgb(170, 214, 150),
            },
            other => {
                log::debug!("assets: no art for {other:?}, using neutral background");
                Self::NEUTRAL
            }
        }
    }

    /// Blend toward `other` by `t`.
    pub fn blend(self, other: BackgroundArt, t: f32) -> BackgroundArt {
        BackgroundArt {
            top: self.top.lerp(other.top, t),
            bottom: self.bottom.lerp(other.bottom, t),
        }
    }

    /// Color of `row` out of `rows` (row 0 is the top).
    pub fn row_color(self, row: u16, rows: u16) -> Rgb {
        if rows <= 1 {
            return self.top;
        }
        self.top
            .lerp(self.bottom, row as f32 / (rows - 1) as f32)
    }
}
