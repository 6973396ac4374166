//! Horizon Gallery - a headless paged image gallery.
//!
//! The gallery shows an ordered collection of items one page at a time. It
//! never draws anything: the host supplies pages through [`PageFactory`] and
//! [`GalleryPage`], and the component that animates between pages through
//! [`PagingSurface`]. [`GalleryController`] keeps the current index in sync
//! with what the user actually sees, including swipes that are abandoned
//! halfway and collections replaced while pages are on screen.
//!
//! # Modules
//!
//! - [`controller`]: the navigation state machine
//! - [`page`] and [`surface`]: host capabilities
//! - [`chrome`]: bar visibility and page insets
//! - [`gesture`]: single/double tap disambiguation
//! - [`config`]: TOML-loadable configuration
//!
//! Enable logs with a `tracing` subscriber filtered on `horizon_gallery`.

pub mod chrome;
pub mod config;
pub mod controller;
pub mod direction;
pub mod gesture;
pub mod page;
pub mod surface;

pub use horizon_gallery_core::{ConnectionId, Error, PerfSpan, Property, Result, Signal};

pub use chrome::{ChromeMetrics, ChromeState, EdgeInsets};
pub use config::{GalleryConfig, PageOrientation, PageTransitionStyle};
pub use controller::{ChromeItems, GalleryController, GalleryPosition, GalleryState};
pub use direction::{NavigationDirection, NeighborDirection};
pub use gesture::{GalleryGesture, TapDisambiguator};
pub use page::{GalleryPage, PageFactory};
pub use surface::{PageStrip, PagingSurface, TransitionCompletion};
