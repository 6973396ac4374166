//! Change-tracking properties.
//!
//! [`Property<T>`] wraps a value and reports whether a write actually changed
//! it, so the owning component can decide whether to emit its notification
//! signal.
//!
//! # Example
//!
//! ```
//! use horizon_gallery_core::{Property, Signal};
//!
//! struct Chrome {
//!     hidden: Property<bool>,
//!     hidden_changed: Signal<bool>,
//! }
//!
//! impl Chrome {
//!     fn set_hidden(&self, hidden: bool) {
//!         if self.hidden.set(hidden) {
//!             self.hidden_changed.emit(hidden);
//!         }
//!     }
//! }
//!
//! let chrome = Chrome { hidden: Property::new(false), hidden_changed: Signal::new() };
//! chrome.set_hidden(true);
//! assert!(chrome.hidden.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A property that tracks changes.
///
/// When `set()` is called, the new value is compared with the current one
/// and the call returns whether the value actually changed.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
