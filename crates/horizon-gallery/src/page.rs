//! Page capabilities supplied by the host.
//!
//! A page is the host's rendering of a single gallery item: typically a
//! zoomable scroll view around an image. The gallery never draws, decodes or
//! zooms anything itself; it only needs to create pages, ask them which item
//! they show, and nudge them when the collection or the chrome changes.

use std::time::Duration;

use crate::chrome::EdgeInsets;

/// A single displayed page of the gallery.
///
/// Implementations are owned by the paging surface. The controller borrows
/// them for the duration of one call and never keeps them.
pub trait GalleryPage<I> {
    /// The item this page shows, or `None` for a placeholder page.
    ///
    /// The controller locates the page in its collection by comparing this
    /// item for equality, so it must return the value passed to
    /// [`PageFactory::create_page`] or [`GalleryPage::set_item`].
    fn item(&self) -> Option<&I>;

    /// Show a different item in this page, keeping the page itself alive.
    ///
    /// Called when the collection is replaced while the page is on screen or
    /// prefetched. Pan, zoom and gesture state of the page should survive.
    fn set_item(&mut self, item: I);

    /// Apply chrome insets to the page's interactive surface.
    ///
    /// `animation` is `Some` when the change follows a visibility toggle and
    /// should be animated over the given duration.
    fn set_base_insets(&mut self, insets: EdgeInsets, animation: Option<Duration>) {
        let _ = (insets, animation);
    }

    /// Toggle between the fitted and zoomed-in presentation.
    fn toggle_zoom(&mut self) {}
}

/// Creates pages for items.
pub trait PageFactory<I> {
    /// The page type produced by this factory.
    type Page: GalleryPage<I>;

    /// Create a page showing `item`.
    fn create_page(&mut self, item: &I) -> Self::Page;

    /// Create a blank page, shown when navigation targets an index outside
    /// the collection.
    fn placeholder_page(&mut self) -> Self::Page;
}

/// Position of a page's item within a collection, by equality lookup.
pub(crate) fn index_of<I: PartialEq, P: GalleryPage<I>>(items: &[I], page: &P) -> Option<usize> {
    let item = page.item()?;
    items.iter().position(|candidate| candidate == item)
}
