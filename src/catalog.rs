//! Page catalog: the fixed, ordered sequence of pages shown by the tour.
//!
//! The catalog is pure data. It is built once at startup (from the builtin pages or from
//! configuration) and never mutated afterwards.

use crate::error::{Result, TourError};
use std::fmt;

/// Upper bound on catalog length. Each page owns one indicator dot addressable by a number key.
pub const MAX_PAGES: usize = 9;

/// Reference to a background image asset, resolved by the host surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single onboarding page: message text plus the background shown behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub text: String,
    pub background: ImageRef,
}

impl PageDescriptor {
    pub fn new(text: impl Into<String>, background: ImageRef) -> Self {
        Self {
            text: text.into(),
            background,
        }
    }
}

/// Ordered, non-empty, fixed-size sequence of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCatalog {
    pages: Vec<PageDescriptor>,
}

impl PageCatalog {
    /// Build a catalog, rejecting empty input and anything longer than [`MAX_PAGES`].
    pub fn new(pages: Vec<PageDescriptor>) -> Result<Self> {
        if pages.is_empty() {
            return Err(TourError::EmptyCatalog);
        }
        if pages.len() > MAX_PAGES {
            return Err(TourError::TooManyPages {
                count: pages.len(),
                max: MAX_PAGES,
            });
        }
        Ok(Self { pages })
    }

    /// The two pages the tour ships with.
    pub fn builtin() -> Self {
        Self {
            pages: vec![
                PageDescriptor::new("Track only what you want", ImageRef::new("onboarding-1")),
                PageDescriptor::new(
                    "Even if it's not\nliters of water and yoga",
                    ImageRef::new("onboarding-2"),
                ),
            ],
        }
    }

    pub fn page_at(&self, index: usize) -> Result<&PageDescriptor> {
        self.pages.get(index).ok_or(TourError::IndexOutOfRange {
            index,
            len: self.pages.len(),
        })
    }

    pub fn count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize) -> PageDescriptor {
        PageDescriptor::new(format!("page {n}"), ImageRef::new(format!("bg-{n}")))
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = PageCatalog::builtin();
        assert_eq!(catalog.count(), 2);
        assert_eq!(catalog.page_at(0).unwrap().background.name(), "onboarding-1");
        assert!(catalog.page_at(1).unwrap().text.contains('\n'));
    }

    #[test]
    fn test_page_at_out_of_range() {
        let catalog = PageCatalog::new(vec![page(0), page(1), page(2)]).unwrap();
        assert_eq!(catalog.page_at(2).unwrap().text, "page 2");

        match catalog.page_at(3) {
            Err(TourError::IndexOutOfRange { index, len }) => {
                assert_eq!(index, 3);
                assert_eq!(len, 3);
            }
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_bounds() {
        assert!(matches!(
            PageCatalog::new(Vec::new()),
            Err(TourError::EmptyCatalog)
        ));

        let too_many: Vec<_> = (0..=MAX_PAGES).map(page).collect();
        assert!(matches!(
            PageCatalog::new(too_many),
            Err(TourError::TooManyPages { count: 10, max: 9 })
        ));

        let max: Vec<_> = (0..MAX_PAGES).map(page).collect();
        assert_eq!(PageCatalog::new(max).unwrap().count(), MAX_PAGES);
    }
}
