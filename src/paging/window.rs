//! Rendered-page cache holding only the pages the coordinator currently needs.

use crate::catalog::PageCatalog;
use crate::paging::host::PageRenderer;

/// Lazily rendered page slots, one per catalog index.
///
/// Slots are filled on demand and cleared by [`RenderedWindow::retain`], so at rest only the
/// displayed page and its neighbors are held.
pub(crate) struct RenderedWindow<P> {
    slots: Vec<Option<P>>,
}

impl<P> RenderedWindow<P> {
    pub(crate) fn new(count: usize) -> Self {
        Self {
            slots: (0..count).map(|_| None).collect(),
        }
    }

    /// Render `index` unless it is already held.
    pub(crate) fn ensure<R>(&mut self, index: usize, catalog: &PageCatalog, renderer: &R)
    where
        R: PageRenderer<Page = P>,
    {
        if self.slots[index].is_some() {
            return;
        }
        let descriptor = catalog
            .page_at(index)
            .unwrap_or_else(|err| unreachable!("coordinator rendered a bad index: {err}"));
        self.slots[index] = Some(renderer.render(descriptor));
    }

    pub(crate) fn get(&self, index: usize) -> Option<&P> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Drop every page whose index is not listed in `keep`.
    pub(crate) fn retain(&mut self, keep: &[usize]) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if !keep.contains(&index) {
                *slot = None;
            }
        }
    }

    pub(crate) fn held(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|_| index))
            .collect()
    }
}
