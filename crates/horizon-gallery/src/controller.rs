//! The gallery navigation state machine.
//!
//! [`GalleryController`] maps an ordered collection of items onto a paging
//! surface. It decides which page to show for a navigation request, answers
//! the surface's lazy neighbor queries, and re-derives the current index from
//! whatever page ends up in front after a (possibly interrupted) swipe.
//!
//! # Example
//!
//! ```
//! use horizon_gallery::{GalleryController, GalleryPage, PageFactory, PageStrip, PagingSurface};
//!
//! struct Page(Option<String>);
//!
//! impl GalleryPage<String> for Page {
//!     fn item(&self) -> Option<&String> {
//!         self.0.as_ref()
//!     }
//!     fn set_item(&mut self, item: String) {
//!         self.0 = Some(item);
//!     }
//! }
//!
//! struct Factory;
//!
//! impl PageFactory<String> for Factory {
//!     type Page = Page;
//!     fn create_page(&mut self, item: &String) -> Page {
//!         Page(Some(item.clone()))
//!     }
//!     fn placeholder_page(&mut self) -> Page {
//!         Page(None)
//!     }
//! }
//!
//! let mut surface = PageStrip::new();
//! let mut gallery = GalleryController::new(Factory)
//!     .with_items(vec!["a.jpg".to_string(), "b.jpg".to_string()]);
//!
//! gallery.set_current_image(&mut surface, 1, false);
//! assert_eq!(gallery.current_index(), 1);
//! assert_eq!(surface.frontmost_page().and_then(|p| p.item()).map(String::as_str), Some("b.jpg"));
//! ```

use std::fmt;
use std::time::Instant;

use horizon_gallery_core::logging::targets;
use horizon_gallery_core::{PerfSpan, Signal};

use crate::chrome::{ChromeMetrics, ChromeState};
use crate::config::GalleryConfig;
use crate::direction::{NavigationDirection, NeighborDirection};
use crate::gesture::{GalleryGesture, TapDisambiguator};
use crate::page::{GalleryPage, PageFactory, index_of};
use crate::surface::PagingSurface;

/// Derived navigation state of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalleryState {
    /// Nothing to show: no items, a placeholder page, or a stale index.
    Empty,
    /// The item at the given index is current.
    Showing(usize),
}

/// Payload of [`GalleryController::position_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GalleryPosition {
    /// Zero-based current index.
    pub position: usize,
    /// Number of items in the collection.
    pub total: usize,
}

impl fmt::Display for GalleryPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total == 0 {
            return Ok(());
        }
        write!(f, "{} of {}", (self.position + 1).min(self.total), self.total)
    }
}

/// Which bar affordances the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeItems {
    /// "Done" button requesting dismissal.
    pub done: bool,
    /// The user-supplied action button.
    pub action: bool,
    /// Toolbar label with the current position.
    pub position_label: bool,
}

/// Paged image gallery controller.
///
/// The controller owns the item collection and the page factory. The paging
/// surface is owned by the host and passed in by reference to the operations
/// that need it.
///
/// # Signals
///
/// - `index_changed(usize)`: Emitted on every assignment of the current index
/// - `position_changed(GalleryPosition)`: Emitted with the index and the count
/// - `dismiss_requested(())`: Emitted when the user asks to close the gallery
/// - `action_invoked(I)`: Emitted with the frontmost item when the action runs
/// - `display_context_changed(())`: Emitted when the display traits change
pub struct GalleryController<I, F>
where
    F: PageFactory<I>,
{
    items: Vec<I>,
    current_index: usize,
    showing_placeholder: bool,
    factory: F,
    chrome: ChromeState,
    config: GalleryConfig,
    taps: TapDisambiguator,

    /// Signal emitted whenever the current index is assigned.
    pub index_changed: Signal<usize>,
    /// Signal emitted with the position shown in the toolbar label.
    ///
    /// Connecting does not replay the current position; call
    /// [`refresh_position`](Self::refresh_position) after connecting.
    pub position_changed: Signal<GalleryPosition>,
    /// Signal emitted when the user asks to dismiss the gallery.
    pub dismiss_requested: Signal<()>,
    /// Signal emitted when the user triggers the action affordance.
    pub action_invoked: Signal<I>,
    /// Signal emitted when the host reports a display context change.
    ///
    /// Connecting does not fire it; call
    /// [`notify_display_context_changed`](Self::notify_display_context_changed)
    /// once after connecting to sync a new observer.
    pub display_context_changed: Signal<()>,
}

impl<I, F> GalleryController<I, F>
where
    I: PartialEq + Clone + 'static,
    F: PageFactory<I>,
{
    /// Create an empty controller with the default configuration.
    pub fn new(factory: F) -> Self {
        Self::with_config(factory, GalleryConfig::default())
    }

    /// Create an empty controller with the given configuration.
    ///
    /// The configuration is used as is; call [`GalleryConfig::validate`]
    /// first if it comes from an untrusted source.
    pub fn with_config(factory: F, config: GalleryConfig) -> Self {
        Self {
            items: Vec::new(),
            current_index: 0,
            showing_placeholder: false,
            factory,
            chrome: ChromeState::new(config.metrics),
            taps: TapDisambiguator::new(config.double_tap_timeout()),
            config,
            index_changed: Signal::new(),
            position_changed: Signal::new(),
            dismiss_requested: Signal::new(),
            action_invoked: Signal::new(),
            display_context_changed: Signal::new(),
        }
    }

    /// Set the initial items using builder pattern.
    pub fn with_items(mut self, items: Vec<I>) -> Self {
        self.items = items;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The item collection.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current index.
    ///
    /// May point past the end after a shrinking [`replace_items`](Self::replace_items).
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The derived navigation state.
    pub fn state(&self) -> GalleryState {
        if self.showing_placeholder || self.current_index >= self.items.len() {
            GalleryState::Empty
        } else {
            GalleryState::Showing(self.current_index)
        }
    }

    /// The item at the current index, if the gallery is showing one.
    pub fn current_item(&self) -> Option<&I> {
        match self.state() {
            GalleryState::Showing(index) => self.items.get(index),
            GalleryState::Empty => None,
        }
    }

    /// The chrome visibility state.
    pub fn chrome(&self) -> &ChromeState {
        &self.chrome
    }

    /// The configuration.
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// The page factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Mutable access to the page factory.
    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    /// Bar affordances the host should display.
    pub fn chrome_items(&self) -> ChromeItems {
        ChromeItems {
            done: self.config.show_done_button,
            action: self.config.show_action_button,
            position_label: self.config.show_position_label && !self.items.is_empty(),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate to the item at `index`.
    ///
    /// An index outside the collection resets the current index to 0 and
    /// shows a placeholder page. The current index is updated before this
    /// returns, independent of the transition animation.
    pub fn set_current_image<S>(&mut self, surface: &mut S, index: isize, animated: bool)
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        let previous = self.current_index;
        let len = self.items.len();

        let Some(target) = usize::try_from(index).ok().filter(|&target| target < len) else {
            tracing::debug!(
                target: targets::CONTROLLER,
                index,
                len,
                "index out of range, showing placeholder"
            );
            self.showing_placeholder = true;
            self.assign_index(0);
            let mut page = self.factory.placeholder_page();
            page.set_base_insets(self.chrome.insets(), None);
            surface.set_pages(vec![page], NavigationDirection::Forward, animated, None);
            return;
        };

        let direction = NavigationDirection::between(previous, target);
        tracing::debug!(
            target: targets::CONTROLLER,
            previous,
            target,
            ?direction,
            animated,
            "navigating"
        );

        self.showing_placeholder = false;
        self.assign_index(target);
        if let Some(page) = self.make_page(target) {
            surface.set_pages(vec![page], direction, animated, None);
        }
    }

    /// Create the page adjacent to `page` in `direction`.
    ///
    /// Returns `None` when `page` does not show an item of the collection or
    /// when it is the first (for `Before`) or last (for `After`) item.
    pub fn neighbor(&mut self, page: &F::Page, direction: NeighborDirection) -> Option<F::Page> {
        let Some(index) = index_of(&self.items, page) else {
            tracing::trace!(target: targets::CONTROLLER, ?direction, "neighbor query for unknown page");
            return None;
        };
        let target = direction.step(index, self.items.len())?;
        tracing::trace!(target: targets::CONTROLLER, index, target, "creating neighbor page");
        self.make_page(target)
    }

    /// Record the page that ended up in front after a transition.
    ///
    /// The current index follows the frontmost page even when an earlier
    /// [`set_current_image`](Self::set_current_image) commanded otherwise.
    pub fn transition_completed(&mut self, frontmost: &F::Page) {
        match index_of(&self.items, frontmost) {
            Some(index) => {
                tracing::trace!(target: targets::CONTROLLER, index, "transition completed");
                self.showing_placeholder = false;
                self.assign_index(index);
            }
            None => {
                tracing::debug!(
                    target: targets::CONTROLLER,
                    current = self.current_index,
                    "frontmost page not in collection, index unchanged"
                );
            }
        }
    }

    /// Replace the whole collection.
    ///
    /// Every live page is matched to its position in the old collection and,
    /// if that position still exists, switched in place to the new item at
    /// the same position. Prefetched pages that no longer show an item of the
    /// collection are then discarded by the surface. The current index is not
    /// clamped.
    pub fn replace_items<S>(&mut self, surface: &mut S, items: Vec<I>)
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        let _perf = PerfSpan::new("GalleryController::replace_items");

        let old = std::mem::replace(&mut self.items, items);
        let new_items = &self.items;
        let insets = self.chrome.insets();
        let mut updated = 0usize;

        surface.for_each_live_page(&mut |page| {
            let Some(position) = index_of(&old, &*page) else {
                return;
            };
            if let Some(item) = new_items.get(position) {
                page.set_item(item.clone());
                page.set_base_insets(insets, None);
                updated += 1;
            }
        });

        let current_items = self.items.as_slice();
        surface.discard_unresolved(&mut |page| index_of(current_items, page).is_some());

        tracing::debug!(
            target: targets::CONTROLLER,
            old_len = old.len(),
            new_len = self.items.len(),
            updated,
            "items replaced"
        );
        self.refresh_position();
    }

    /// Prepare the surface when the gallery becomes visible.
    ///
    /// Applies the chrome state without animation and shows the item at the
    /// current index whenever it is in range, replacing a placeholder left by
    /// an out-of-range request. No index observers fire.
    pub fn appear<S>(&mut self, surface: &mut S)
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        surface.set_chrome_hidden(self.chrome.bars_hidden(), false);
        if let Some(page) = self.make_page(self.current_index) {
            self.showing_placeholder = false;
            surface.set_pages(vec![page], NavigationDirection::Forward, false, None);
        }
    }

    /// Apply the current insets to pages about to become visible.
    pub fn will_transition_to(&self, pending: &mut [F::Page]) {
        let insets = self.chrome.insets();
        for page in pending {
            page.set_base_insets(insets, None);
        }
    }

    /// Re-apply the current insets to the frontmost page after a layout pass.
    pub fn layout<S>(&self, surface: &mut S)
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        if let Some(page) = surface.frontmost_page_mut() {
            page.set_base_insets(self.chrome.insets(), None);
        }
    }

    /// Re-emit the position observer.
    pub fn refresh_position(&self) {
        self.position_changed.emit(GalleryPosition {
            position: self.current_index,
            total: self.items.len(),
        });
    }

    // =========================================================================
    // Chrome and gestures
    // =========================================================================

    /// Show or hide the bars and animate the frontmost page's insets.
    ///
    /// Returns the new hidden state.
    pub fn toggle_chrome<S>(&mut self, surface: &mut S) -> bool
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        let hidden = self.chrome.toggle();
        surface.set_chrome_hidden(hidden, true);
        if let Some(page) = surface.frontmost_page_mut() {
            page.set_base_insets(self.chrome.insets(), Some(self.config.chrome_animation()));
        }
        hidden
    }

    /// Update bar heights, e.g. after a rotation.
    pub fn set_chrome_metrics<S>(&mut self, surface: &mut S, metrics: ChromeMetrics)
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        if self.chrome.set_metrics(metrics) {
            self.layout(surface);
        }
    }

    /// Toggle zoom on the frontmost page.
    pub fn toggle_zoom<S>(&mut self, surface: &mut S)
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        if let Some(page) = surface.frontmost_page_mut() {
            page.toggle_zoom();
        }
    }

    /// Perform the action bound to a recognized gesture.
    pub fn handle_gesture<S>(&mut self, surface: &mut S, gesture: GalleryGesture)
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        tracing::trace!(target: targets::GESTURE, ?gesture, "handling gesture");
        match gesture {
            GalleryGesture::ToggleChrome => {
                self.toggle_chrome(surface);
            }
            GalleryGesture::ToggleZoom => self.toggle_zoom(surface),
        }
    }

    /// Feed a tap on the page area at `at`.
    ///
    /// A double tap is handled immediately. A single tap is handled by a
    /// later call to [`poll_gestures`](Self::poll_gestures).
    pub fn tap<S>(&mut self, surface: &mut S, at: Instant)
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        if let Some(gesture) = self.taps.tap(at) {
            self.handle_gesture(surface, gesture);
        }
    }

    /// Resolve a pending single tap whose double-tap window has closed.
    pub fn poll_gestures<S>(&mut self, surface: &mut S, now: Instant)
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        if let Some(gesture) = self.taps.poll(now) {
            self.handle_gesture(surface, gesture);
        }
    }

    /// When the host should next call [`poll_gestures`](Self::poll_gestures).
    pub fn gesture_deadline(&self) -> Option<Instant> {
        self.taps.deadline()
    }

    /// Drop a pending tap, e.g. when a swipe begins.
    pub fn cancel_pending_tap(&mut self) {
        self.taps.reset();
    }

    // =========================================================================
    // Host actions
    // =========================================================================

    /// Ask for the gallery to be closed.
    ///
    /// Observers of `dismiss_requested` take over when connected; otherwise
    /// the surface performs its default dismissal. Does nothing when the done
    /// affordance is disabled. Returns `true` if a dismissal was requested.
    pub fn request_dismiss<S>(&mut self, surface: &mut S) -> bool
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        if !self.config.show_done_button {
            return false;
        }
        if self.dismiss_requested.is_connected() {
            self.dismiss_requested.emit(());
        } else {
            tracing::debug!(target: targets::CONTROLLER, "no dismiss handler, using default dismissal");
            surface.dismiss(true);
        }
        true
    }

    /// Run the action affordance on the frontmost item.
    ///
    /// Returns `true` if `action_invoked` was emitted.
    pub fn invoke_action<S>(&self, surface: &S) -> bool
    where
        S: PagingSurface<F::Page> + ?Sized,
    {
        if !self.config.show_action_button {
            return false;
        }
        let Some(item) = surface.frontmost_page().and_then(|page| page.item()).cloned() else {
            return false;
        };
        self.action_invoked.emit(item);
        true
    }

    /// Notify observers that size classes or other display traits changed.
    pub fn notify_display_context_changed(&self) {
        self.display_context_changed.emit(());
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn assign_index(&mut self, index: usize) {
        self.current_index = index;
        self.index_changed.emit(index);
        self.refresh_position();
    }

    fn make_page(&mut self, index: usize) -> Option<F::Page> {
        let item = self.items.get(index)?;
        let mut page = self.factory.create_page(item);
        page.set_base_insets(self.chrome.insets(), None);
        Some(page)
    }
}

impl<I, F> fmt::Debug for GalleryController<I, F>
where
    F: PageFactory<I>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryController")
            .field("len", &self.items.len())
            .field("current_index", &self.current_index)
            .field("showing_placeholder", &self.showing_placeholder)
            .field("chrome", &self.chrome)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
