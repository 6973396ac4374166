//! Integration tests for loading gallery configuration from disk.

use std::io::Write;

use horizon_gallery::{
    Error, GalleryConfig, GalleryController, PageOrientation, PageStrip, PagingSurface,
};

mod common;

#[test]
fn load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
chrome_animation_ms = 250
orientation = "vertical"
show_position_label = false

[metrics]
status_bar_height = 0.0
"#
    )
    .unwrap();

    let config = GalleryConfig::load(file.path()).unwrap();

    assert_eq!(config.chrome_animation_ms, 250);
    assert_eq!(config.orientation, PageOrientation::Vertical);
    assert!(!config.show_position_label);
    assert_eq!(config.metrics.status_bar_height, 0.0);
    assert_eq!(config.metrics.toolbar_height, 44.0);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.toml");

    let err = GalleryConfig::load(&path).unwrap_err();

    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_metrics_rejected_on_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[metrics]\ntoolbar_height = -2.0").unwrap();

    let err = GalleryConfig::load(file.path()).unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidValue {
            field: "metrics.toolbar_height",
            ..
        }
    ));
    assert!(err.to_string().contains("metrics.toolbar_height"));
}

#[test]
fn loaded_config_drives_controller() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "chrome_animation_ms = 400\ndouble_tap_timeout_ms = 200").unwrap();
    let config = GalleryConfig::load(file.path()).unwrap();

    let mut gallery = GalleryController::with_config(common::MockFactory::default(), config)
        .with_items(vec!["a"]);
    let mut surface = PageStrip::new();
    gallery.set_current_image(&mut surface, 0, false);
    gallery.toggle_chrome(&mut surface);

    let animation = surface
        .frontmost_page()
        .and_then(|page| page.insets.last())
        .and_then(|(_, animation)| *animation);
    assert_eq!(animation, Some(std::time::Duration::from_millis(400)));

    let start = std::time::Instant::now();
    gallery.tap(&mut surface, start);
    assert_eq!(
        gallery.gesture_deadline(),
        Some(start + std::time::Duration::from_millis(200))
    );
}
