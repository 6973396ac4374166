//! Logging facilities for Horizon Gallery.
//!
//! Horizon Gallery uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_gallery=debug")
//!         .init();
//! }
//! ```
//!
//! Every subsystem logs under one of the [`targets`], so filters such as
//! `horizon_gallery::controller=trace` isolate the navigation state machine.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_gallery_core::signal";
    /// Navigation state machine target.
    pub const CONTROLLER: &str = "horizon_gallery::controller";
    /// Chrome visibility and insets target.
    pub const CHROME: &str = "horizon_gallery::chrome";
    /// Tap disambiguation target.
    pub const GESTURE: &str = "horizon_gallery::gesture";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_gallery::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for measuring how long a reconciliation pass or page construction
/// takes when a subscriber with timing is installed.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_gallery::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
