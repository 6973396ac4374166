//! Integration tests for chrome toggling, gestures and host actions.

mod common;

use std::time::{Duration, Instant};

use common::{MockFactory, gallery, record};
use horizon_gallery::{
    ChromeMetrics, EdgeInsets, GalleryConfig, GalleryController, PageStrip, PagingSurface,
};

#[test]
fn toggle_chrome_animates_frontmost_insets() {
    let mut gallery = gallery(&["a", "b"]);
    let mut surface = PageStrip::new();
    gallery.set_current_image(&mut surface, 0, false);
    let changes = record(&gallery.chrome().bars_hidden_changed);

    assert!(gallery.toggle_chrome(&mut surface));
    assert!(surface.chrome_hidden());
    let front = surface.frontmost_page().and_then(|page| page.insets.last().copied());
    assert_eq!(front, Some((EdgeInsets::ZERO, Some(Duration::from_millis(150)))));

    assert!(!gallery.toggle_chrome(&mut surface));
    assert!(!surface.chrome_hidden());
    assert_eq!(
        surface.frontmost_page().and_then(|page| page.last_insets()),
        Some(EdgeInsets::vertical(64.0, 44.0))
    );
    assert_eq!(*changes.lock(), vec![true, false]);
}

#[test]
fn pending_pages_get_current_insets() {
    let mut gallery = gallery(&["a", "b"]);
    let mut surface = PageStrip::new();
    gallery.toggle_chrome(&mut surface);
    let mut pending = vec![gallery.factory().detached("b")];

    gallery.will_transition_to(&mut pending);

    assert_eq!(pending[0].last_insets(), Some(EdgeInsets::ZERO));
}

#[test]
fn metrics_change_relayouts_frontmost_page() {
    let mut gallery = gallery(&["a"]);
    let mut surface = PageStrip::new();
    gallery.set_current_image(&mut surface, 0, false);
    let landscape = ChromeMetrics {
        status_bar_height: 0.0,
        navigation_bar_height: 32.0,
        toolbar_height: 32.0,
    };

    gallery.set_chrome_metrics(&mut surface, landscape);

    assert_eq!(
        surface.frontmost_page().and_then(|page| page.last_insets()),
        Some(EdgeInsets::vertical(32.0, 32.0))
    );
}

#[test]
fn single_tap_toggles_chrome_after_timeout() {
    let mut gallery = gallery(&["a"]);
    let mut surface = PageStrip::new();
    gallery.set_current_image(&mut surface, 0, false);
    let start = Instant::now();

    gallery.tap(&mut surface, start);
    assert!(!gallery.chrome().bars_hidden());
    assert_eq!(gallery.gesture_deadline(), Some(start + Duration::from_millis(300)));

    gallery.poll_gestures(&mut surface, start + Duration::from_millis(100));
    assert!(!gallery.chrome().bars_hidden());

    gallery.poll_gestures(&mut surface, start + Duration::from_millis(301));
    assert!(gallery.chrome().bars_hidden());
    assert!(surface.chrome_hidden());
}

#[test]
fn double_tap_toggles_zoom_not_chrome() {
    let mut gallery = gallery(&["a"]);
    let mut surface = PageStrip::new();
    gallery.set_current_image(&mut surface, 0, false);
    let start = Instant::now();

    gallery.tap(&mut surface, start);
    gallery.tap(&mut surface, start + Duration::from_millis(120));
    gallery.poll_gestures(&mut surface, start + Duration::from_millis(1000));

    assert_eq!(surface.frontmost_page().map(|page| page.zoom_toggles), Some(1));
    assert!(!gallery.chrome().bars_hidden());
}

#[test]
fn cancelled_tap_does_nothing() {
    let mut gallery = gallery(&["a"]);
    let mut surface = PageStrip::new();
    let start = Instant::now();

    gallery.tap(&mut surface, start);
    gallery.cancel_pending_tap();
    gallery.poll_gestures(&mut surface, start + Duration::from_millis(1000));

    assert_eq!(gallery.gesture_deadline(), None);
    assert!(!gallery.chrome().bars_hidden());
}

#[test]
fn dismiss_without_handler_uses_surface_default() {
    let mut gallery = gallery(&["a"]);
    let mut surface = PageStrip::new();

    assert!(gallery.request_dismiss(&mut surface));

    assert!(surface.is_dismissed());
}

#[test]
fn dismiss_disabled_by_config() {
    let config = GalleryConfig::default().with_done_button(false);
    let mut gallery =
        GalleryController::with_config(MockFactory::default(), config).with_items(vec!["a"]);
    let mut surface = PageStrip::new();
    let requests = record(&gallery.dismiss_requested);

    assert!(!gallery.request_dismiss(&mut surface));
    assert!(requests.lock().is_empty());
    assert!(!surface.is_dismissed());
    assert!(!gallery.chrome_items().done);
}

#[test]
fn late_position_observer_syncs_on_refresh() {
    let mut gallery = gallery(&["a", "b", "c"]);
    let mut surface = PageStrip::new();
    gallery.set_current_image(&mut surface, 2, false);

    let positions = record(&gallery.position_changed);
    assert!(positions.lock().is_empty());

    gallery.refresh_position();
    assert_eq!(positions.lock().last().map(ToString::to_string), Some("3 of 3".to_string()));
}

#[test]
fn dismiss_with_handler_emits_signal() {
    let mut gallery = gallery(&["a"]);
    let mut surface = PageStrip::new();
    let requests = record(&gallery.dismiss_requested);

    gallery.request_dismiss(&mut surface);

    assert_eq!(requests.lock().len(), 1);
    assert!(!surface.is_dismissed());
}

#[test]
fn action_reports_frontmost_item() {
    let config = GalleryConfig::default().with_action_button(true);
    let mut gallery = GalleryController::with_config(MockFactory::default(), config)
        .with_items(vec!["a", "b"]);
    let mut surface = PageStrip::new();
    let actions = record(&gallery.action_invoked);

    assert!(!gallery.invoke_action(&surface));

    gallery.set_current_image(&mut surface, 1, false);
    assert!(gallery.invoke_action(&surface));
    assert_eq!(*actions.lock(), vec!["b"]);
}

#[test]
fn action_disabled_by_config() {
    let mut gallery = gallery(&["a"]);
    let mut surface = PageStrip::new();
    gallery.set_current_image(&mut surface, 0, false);
    let actions = record(&gallery.action_invoked);

    assert!(!gallery.invoke_action(&surface));
    assert!(actions.lock().is_empty());
    assert!(!gallery.chrome_items().action);
}

#[test]
fn display_context_change_is_broadcast() {
    let gallery = gallery(&["a"]);
    let notifications = record(&gallery.display_context_changed);

    gallery.notify_display_context_changed();

    assert_eq!(notifications.lock().len(), 1);
}
