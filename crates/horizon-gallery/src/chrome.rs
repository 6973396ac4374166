//! Chrome visibility and page insets.
//!
//! The chrome is the navigation bar, toolbar and status bar surrounding the
//! gallery. It is toggled as a unit, independently of page content. Every
//! visibility change yields a new [`EdgeInsets`] that the controller applies
//! to the page currently on screen so its zoomable content stays clear of
//! the bars.

use horizon_gallery_core::logging::targets;
use horizon_gallery_core::{Property, Signal};
use serde::{Deserialize, Serialize};

/// Insets applied to the interactive surface of a page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    /// Top inset.
    pub top: f32,
    /// Left inset.
    pub left: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Right inset.
    pub right: f32,
}

impl EdgeInsets {
    /// Insets of zero on every edge.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create new insets.
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Insets on the top and bottom edges only.
    pub const fn vertical(top: f32, bottom: f32) -> Self {
        Self::new(top, 0.0, bottom, 0.0)
    }

    /// Total horizontal inset (left + right).
    #[inline]
    pub fn horizontal_total(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    #[inline]
    pub fn vertical_total(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Heights of the chrome elements, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeMetrics {
    /// Height of the status bar.
    pub status_bar_height: f32,
    /// Height of the navigation bar below the status bar.
    pub navigation_bar_height: f32,
    /// Height of the bottom toolbar.
    pub toolbar_height: f32,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            status_bar_height: 20.0,
            navigation_bar_height: 44.0,
            toolbar_height: 44.0,
        }
    }
}

impl ChromeMetrics {
    /// Insets produced by these metrics when the bars are visible.
    pub fn visible_insets(&self) -> EdgeInsets {
        EdgeInsets::vertical(
            self.status_bar_height + self.navigation_bar_height,
            self.toolbar_height,
        )
    }
}

/// Visibility state of the gallery chrome.
///
/// # Signals
///
/// - `bars_hidden_changed(bool)`: Emitted whenever the bars are shown or hidden
#[derive(Debug)]
pub struct ChromeState {
    bars_hidden: Property<bool>,
    metrics: Property<ChromeMetrics>,

    /// Signal emitted when bar visibility changes.
    pub bars_hidden_changed: Signal<bool>,
}

impl ChromeState {
    /// Create chrome state with visible bars.
    pub fn new(metrics: ChromeMetrics) -> Self {
        Self {
            bars_hidden: Property::new(false),
            metrics: Property::new(metrics),
            bars_hidden_changed: Signal::new(),
        }
    }

    /// Whether the navigation bar and toolbar are hidden.
    pub fn bars_hidden(&self) -> bool {
        self.bars_hidden.get()
    }

    /// Whether the host should hide the status bar.
    ///
    /// The status bar follows the other bars.
    pub fn prefers_status_bar_hidden(&self) -> bool {
        self.bars_hidden()
    }

    /// Flip bar visibility, returning the new hidden state.
    pub fn toggle(&self) -> bool {
        let hidden = !self.bars_hidden();
        self.set_bars_hidden(hidden);
        hidden
    }

    /// Show or hide the bars.
    ///
    /// Returns `true` if the visibility changed.
    pub fn set_bars_hidden(&self, hidden: bool) -> bool {
        if self.bars_hidden.set(hidden) {
            tracing::debug!(target: targets::CHROME, hidden, "chrome visibility changed");
            self.bars_hidden_changed.emit(hidden);
            true
        } else {
            false
        }
    }

    /// Current chrome metrics.
    pub fn metrics(&self) -> ChromeMetrics {
        self.metrics.get()
    }

    /// Replace the chrome metrics, e.g. after a rotation changes bar heights.
    ///
    /// Returns `true` if the metrics changed.
    pub fn set_metrics(&self, metrics: ChromeMetrics) -> bool {
        self.metrics.set(metrics)
    }

    /// Insets for the page currently on screen.
    ///
    /// Hidden bars leave the whole surface to the page.
    pub fn insets(&self) -> EdgeInsets {
        if self.bars_hidden() {
            EdgeInsets::ZERO
        } else {
            self.metrics.with(ChromeMetrics::visible_insets)
        }
    }
}

impl Default for ChromeState {
    fn default() -> Self {
        Self::new(ChromeMetrics::default())
    }
}

static_assertions::assert_impl_all!(ChromeState: Send, Sync);
