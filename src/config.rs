//! Configuration loading.
//!
//! Settings come from an optional TOML file (explicit `--config` path, or
//! `$CONFIG_DIR/pagetour/config.toml` when it exists) and are then overridden by command line
//! flags. Every field has a default, so an empty file is valid.

use crate::catalog::{ImageRef, PageCatalog, PageDescriptor, MAX_PAGES};
use crate::error::{Result, TourError};
use crate::paging::PagingOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TRANSITION_MS: u64 = 350;
const DEFAULT_CROSSFADE_MS: u64 = 250;
const DEFAULT_TICK_MS: u64 = 16;
const DEFAULT_BUTTON_LABEL: &str = "What a technology!";

/// Named color theme selectable from config or CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Default,
    Monochrome,
    HighContrast,
}

/// A page entry in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageConfig {
    pub text: String,
    pub background: String,
}

/// Fully resolved tour settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    /// Length of the page slide animation
    pub transition_ms: u64,
    /// Length of the background crossfade
    pub crossfade_ms: u64,
    /// Frame interval of the render loop
    pub tick_ms: u64,
    pub theme: ThemeName,
    pub button_label: String,
    /// Custom pages; the builtin catalog is used when absent
    pub pages: Option<Vec<PageConfig>>,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            crossfade_ms: DEFAULT_CROSSFADE_MS,
            tick_ms: DEFAULT_TICK_MS,
            theme: ThemeName::Default,
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
            pages: None,
        }
    }
}

impl TourConfig {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pagetour").join("config.toml"))
    }

    /// Load from an explicit path, or from the default location if a file exists there.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|err| {
            TourError::file_error(format!("Failed to read {}", path.display()), err)
        })?;
        Self::parse(&contents, path)
    }

    /// Parse and validate TOML text. `origin` is only used for error messages.
    pub fn parse(contents: &str, origin: &Path) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|err| TourError::config(origin, err.to_string()))?;
        config.validate(origin)?;
        Ok(config)
    }

    fn validate(&self, origin: &Path) -> Result<()> {
        for (name, value) in [
            ("transition_ms", self.transition_ms),
            ("crossfade_ms", self.crossfade_ms),
            ("tick_ms", self.tick_ms),
        ] {
            if value == 0 {
                return Err(TourError::config(origin, format!("{name} must be positive")));
            }
        }

        if let Some(pages) = &self.pages {
            if pages.len() > MAX_PAGES {
                return Err(TourError::config(
                    origin,
                    format!("at most {MAX_PAGES} pages are supported, found {}", pages.len()),
                ));
            }
            if let Some(position) = pages.iter().position(|page| page.text.trim().is_empty()) {
                return Err(TourError::config(
                    origin,
                    format!("page {} has empty text", position + 1),
                ));
            }
        }
        Ok(())
    }

    /// Build the page catalog described by this config.
    pub fn catalog(&self) -> Result<PageCatalog> {
        match &self.pages {
            None => Ok(PageCatalog::builtin()),
            Some(pages) => PageCatalog::new(
                pages
                    .iter()
                    .map(|page| {
                        PageDescriptor::new(page.text.clone(), ImageRef::new(page.background.clone()))
                    })
                    .collect(),
            ),
        }
    }

    pub fn paging_options(&self) -> PagingOptions {
        PagingOptions {
            crossfade: self.crossfade(),
        }
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn crossfade(&self) -> Duration {
        Duration::from_millis(self.crossfade_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
