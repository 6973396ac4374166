//! Core systems for Horizon Gallery.
//!
//! This crate provides the infrastructure the gallery components are built on:
//!
//! - **Signal/Slot System**: Type-safe observers for index, position, dismiss
//!   and action notifications
//! - **Property System**: Values with change detection
//! - **Errors**: The shared [`Error`] type for fallible operations
//! - **Logging**: `tracing` targets and helpers
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_gallery_core::Signal;
//!
//! let position_changed = Signal::<(usize, usize)>::new();
//!
//! let conn_id = position_changed.connect(|(position, total)| {
//!     println!("{} of {}", position + 1, total);
//! });
//!
//! position_changed.emit((0, 12));
//! position_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;

pub use error::{Error, Result};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};
