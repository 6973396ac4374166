//! Tap disambiguation for the gallery.
//!
//! The gallery reacts to two tap gestures on the page area:
//!
//! - a single tap toggles the chrome,
//! - a double tap toggles zoom on the current page.
//!
//! A single tap is only recognized once the double tap has failed, i.e. once
//! the double-tap timeout elapses without a second tap. The host feeds tap
//! timestamps through [`TapDisambiguator::tap`] and calls
//! [`TapDisambiguator::poll`] from a timer (see
//! [`TapDisambiguator::deadline`]) to resolve pending single taps.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use horizon_gallery::gesture::{GalleryGesture, TapDisambiguator};
//!
//! let mut taps = TapDisambiguator::new(Duration::from_millis(300));
//! let start = Instant::now();
//!
//! assert_eq!(taps.tap(start), None);
//! assert_eq!(taps.tap(start + Duration::from_millis(120)), Some(GalleryGesture::ToggleZoom));
//! ```

use std::time::{Duration, Instant};

use horizon_gallery_core::logging::targets;

/// Default double-tap timeout in milliseconds.
///
/// Two taps must occur within this duration to be recognized as a double-tap.
pub const DEFAULT_DOUBLE_TAP_TIMEOUT_MS: u64 = 300;

/// High-level gestures the gallery responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalleryGesture {
    /// Show or hide the navigation bar, toolbar and status bar.
    ToggleChrome,
    /// Zoom the current page in or back out.
    ToggleZoom,
}

/// Resolves raw taps into single-tap and double-tap gestures.
#[derive(Debug, Clone)]
pub struct TapDisambiguator {
    double_tap_timeout: Duration,
    pending_tap: Option<Instant>,
}

impl Default for TapDisambiguator {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DOUBLE_TAP_TIMEOUT_MS))
    }
}

impl TapDisambiguator {
    /// Create a disambiguator with the given double-tap timeout.
    pub fn new(double_tap_timeout: Duration) -> Self {
        Self {
            double_tap_timeout,
            pending_tap: None,
        }
    }

    /// The double-tap timeout.
    pub fn double_tap_timeout(&self) -> Duration {
        self.double_tap_timeout
    }

    /// Record a completed tap at `at`.
    ///
    /// Returns `ToggleZoom` when this tap completes a double tap. A tap
    /// arriving after an expired, unpolled pending tap resolves the old one
    /// as `ToggleChrome` and becomes pending itself.
    pub fn tap(&mut self, at: Instant) -> Option<GalleryGesture> {
        match self.pending_tap.take() {
            Some(first) if at.saturating_duration_since(first) <= self.double_tap_timeout => {
                tracing::trace!(target: targets::GESTURE, "double tap recognized");
                Some(GalleryGesture::ToggleZoom)
            }
            Some(_) => {
                tracing::trace!(target: targets::GESTURE, "stale tap resolved as single tap");
                self.pending_tap = Some(at);
                Some(GalleryGesture::ToggleChrome)
            }
            None => {
                self.pending_tap = Some(at);
                None
            }
        }
    }

    /// Resolve a pending tap whose double-tap window has closed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<GalleryGesture> {
        let first = self.pending_tap?;
        if now.saturating_duration_since(first) > self.double_tap_timeout {
            self.pending_tap = None;
            tracing::trace!(target: targets::GESTURE, "single tap recognized");
            Some(GalleryGesture::ToggleChrome)
        } else {
            None
        }
    }

    /// Instant after which [`poll`](Self::poll) will resolve the pending tap.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending_tap.map(|first| first + self.double_tap_timeout)
    }

    /// Whether a tap is waiting for the double-tap window to close.
    pub fn has_pending(&self) -> bool {
        self.pending_tap.is_some()
    }

    /// Drop any pending tap, e.g. when a swipe starts.
    pub fn reset(&mut self) {
        self.pending_tap = None;
    }
}
