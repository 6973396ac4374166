//! The paging surface.
//!
//! The paging surface is the host component that actually shows pages and
//! performs swipe-driven transitions. It owns the live pages (the frontmost
//! one plus whatever neighbors it has prefetched) and talks to the
//! [`GalleryController`] in both directions:
//!
//! - the controller pushes page sets with [`PagingSurface::set_pages`];
//! - the surface pulls neighbors with [`GalleryController::neighbor`] and
//!   reports settled transitions with
//!   [`GalleryController::transition_completed`].
//!
//! [`PageStrip`] is a ready-made surface model holding a current page and at
//! most one prefetched page on each side. Hosts can embed it to get the
//! bookkeeping right and only add the drawing.

use crate::controller::GalleryController;
use crate::direction::{NavigationDirection, NeighborDirection};
use crate::page::{GalleryPage, PageFactory};

/// Callback invoked when a requested transition finishes.
///
/// The argument tells whether the transition ran to completion.
pub type TransitionCompletion = Box<dyn FnOnce(bool)>;

/// Host component that displays pages and drives transitions between them.
pub trait PagingSurface<P> {
    /// Replace the displayed pages, transitioning in `direction`.
    ///
    /// The first page becomes frontmost. Previously prefetched neighbors are
    /// stale after this call and should be discarded.
    fn set_pages(
        &mut self,
        pages: Vec<P>,
        direction: NavigationDirection,
        animated: bool,
        completion: Option<TransitionCompletion>,
    );

    /// The page currently in front, if any.
    fn frontmost_page(&self) -> Option<&P>;

    /// Mutable access to the page currently in front, if any.
    fn frontmost_page_mut(&mut self) -> Option<&mut P>;

    /// Visit every page the surface keeps alive, including prefetched ones.
    fn for_each_live_page(&mut self, f: &mut dyn FnMut(&mut P));

    /// Drop prefetched pages for which `keep` returns `false`.
    ///
    /// Called after the collection is replaced. The frontmost page is never
    /// discarded; it stays until the next transition replaces it.
    fn discard_unresolved(&mut self, keep: &mut dyn FnMut(&P) -> bool) {
        let _ = keep;
    }

    /// Show or hide the navigation bar, toolbar and status bar.
    fn set_chrome_hidden(&mut self, hidden: bool, animated: bool) {
        let _ = (hidden, animated);
    }

    /// Platform-standard dismissal of the gallery.
    ///
    /// Used when nobody handles the controller's `dismiss_requested` signal.
    fn dismiss(&mut self, animated: bool);
}

/// A paging surface model with one prefetched page on each side.
#[derive(Debug)]
pub struct PageStrip<P> {
    before: Option<P>,
    current: Option<P>,
    after: Option<P>,
    last_direction: Option<NavigationDirection>,
    chrome_hidden: bool,
    dismissed: bool,
}

impl<P> Default for PageStrip<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> PageStrip<P> {
    /// Create an empty strip.
    pub fn new() -> Self {
        Self {
            before: None,
            current: None,
            after: None,
            last_direction: None,
            chrome_hidden: false,
            dismissed: false,
        }
    }

    /// The prefetched page in `direction`, if any.
    pub fn neighbor(&self, direction: NeighborDirection) -> Option<&P> {
        match direction {
            NeighborDirection::Before => self.before.as_ref(),
            NeighborDirection::After => self.after.as_ref(),
        }
    }

    /// Number of pages alive in the strip (0 to 3).
    pub fn live_page_count(&self) -> usize {
        [&self.before, &self.current, &self.after]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Direction of the most recent [`PagingSurface::set_pages`] call.
    pub fn last_direction(&self) -> Option<NavigationDirection> {
        self.last_direction
    }

    /// Whether the host was last told to hide the chrome.
    pub fn chrome_hidden(&self) -> bool {
        self.chrome_hidden
    }

    /// Whether the default dismissal was performed.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Ask the controller for any missing neighbor of the current page.
    ///
    /// A `None` answer is terminal for that side until the current page
    /// changes.
    pub fn prefetch<I, F>(&mut self, controller: &mut GalleryController<I, F>)
    where
        I: PartialEq + Clone + 'static,
        F: PageFactory<I, Page = P>,
        P: GalleryPage<I>,
    {
        let Some(current) = self.current.as_ref() else {
            return;
        };
        if self.before.is_none() {
            self.before = controller.neighbor(current, NeighborDirection::Before);
        }
        if self.after.is_none() {
            self.after = controller.neighbor(current, NeighborDirection::After);
        }
    }

    /// Finish a swipe towards `direction`.
    ///
    /// When `completed` is `false` the gesture was abandoned and the current
    /// page stays in front. Either way the controller is told which page is
    /// frontmost once the swipe settles. Returns `true` if the frontmost page
    /// changed.
    pub fn swipe<I, F>(
        &mut self,
        controller: &mut GalleryController<I, F>,
        direction: NeighborDirection,
        completed: bool,
    ) -> bool
    where
        I: PartialEq + Clone + 'static,
        F: PageFactory<I, Page = P>,
        P: GalleryPage<I>,
    {
        self.prefetch(controller);

        let moved = completed && self.neighbor(direction).is_some();
        if moved {
            match direction {
                NeighborDirection::After => {
                    self.before = self.current.take();
                    self.current = self.after.take();
                }
                NeighborDirection::Before => {
                    self.after = self.current.take();
                    self.current = self.before.take();
                }
            }
        }

        if let Some(frontmost) = self.current.as_ref() {
            controller.transition_completed(frontmost);
        }
        moved
    }
}

impl<P> PagingSurface<P> for PageStrip<P> {
    fn set_pages(
        &mut self,
        pages: Vec<P>,
        direction: NavigationDirection,
        _animated: bool,
        completion: Option<TransitionCompletion>,
    ) {
        self.before = None;
        self.after = None;
        self.current = pages.into_iter().next();
        self.last_direction = Some(direction);
        if let Some(completion) = completion {
            completion(true);
        }
    }

    fn frontmost_page(&self) -> Option<&P> {
        self.current.as_ref()
    }

    fn frontmost_page_mut(&mut self) -> Option<&mut P> {
        self.current.as_mut()
    }

    fn for_each_live_page(&mut self, f: &mut dyn FnMut(&mut P)) {
        for page in [&mut self.before, &mut self.current, &mut self.after]
            .into_iter()
            .flatten()
        {
            f(page);
        }
    }

    fn discard_unresolved(&mut self, keep: &mut dyn FnMut(&P) -> bool) {
        for slot in [&mut self.before, &mut self.after] {
            if slot.as_ref().is_some_and(|page| !keep(page)) {
                *slot = None;
            }
        }
    }

    fn set_chrome_hidden(&mut self, hidden: bool, _animated: bool) {
        self.chrome_hidden = hidden;
    }

    fn dismiss(&mut self, _animated: bool) {
        self.dismissed = true;
    }
}
