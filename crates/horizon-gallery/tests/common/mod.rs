//! Shared fixtures for gallery integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use horizon_gallery::{EdgeInsets, GalleryController, GalleryPage, PageFactory};
use parking_lot::Mutex;

pub type Item = &'static str;

/// A page that remembers what the controller did to it.
#[derive(Debug)]
pub struct MockPage {
    pub id: usize,
    pub item: Option<Item>,
    pub insets: Vec<(EdgeInsets, Option<Duration>)>,
    pub zoom_toggles: usize,
}

impl MockPage {
    pub fn last_insets(&self) -> Option<EdgeInsets> {
        self.insets.last().map(|(insets, _)| *insets)
    }
}

impl GalleryPage<Item> for MockPage {
    fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    fn set_item(&mut self, item: Item) {
        self.item = Some(item);
    }

    fn set_base_insets(&mut self, insets: EdgeInsets, animation: Option<Duration>) {
        self.insets.push((insets, animation));
    }

    fn toggle_zoom(&mut self) {
        self.zoom_toggles += 1;
    }
}

/// Factory handing out pages with unique ids.
#[derive(Debug, Default)]
pub struct MockFactory {
    next_id: Arc<AtomicUsize>,
    pub created: Vec<Item>,
    pub placeholders: usize,
}

impl MockFactory {
    fn page(&self, item: Option<Item>) -> MockPage {
        MockPage {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            item,
            insets: Vec::new(),
            zoom_toggles: 0,
        }
    }

    /// A page built outside the controller, as a host would hold one.
    pub fn detached(&self, item: Item) -> MockPage {
        self.page(Some(item))
    }
}

impl PageFactory<Item> for MockFactory {
    type Page = MockPage;

    fn create_page(&mut self, item: &Item) -> MockPage {
        self.created.push(item);
        self.page(Some(item))
    }

    fn placeholder_page(&mut self) -> MockPage {
        self.placeholders += 1;
        self.page(None)
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn gallery(items: &[Item]) -> GalleryController<Item, MockFactory> {
    init_tracing();
    GalleryController::new(MockFactory::default()).with_items(items.to_vec())
}

/// Collects every value emitted by a signal.
pub fn record<T: Clone + Send + 'static>(signal: &horizon_gallery::Signal<T>) -> Arc<Mutex<Vec<T>>> {
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    signal.connect(move |value: &T| {
        received_clone.lock().push(value.clone());
    });
    received
}
