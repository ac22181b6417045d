//! FILENAME: tests/test_assets.rs
//! Integration tests for the asset store boundary.

use app_lib::{AssetStore, ResolvedAsset};
use image::RgbImage;

#[test]
fn test_resolves_an_image_with_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flag_usa.png");
    RgbImage::new(24, 16).save(&path).unwrap();

    let store = AssetStore::new(dir.path().to_path_buf());
    match store.resolve("flag_usa.png") {
        ResolvedAsset::Image { width, height, .. } => {
            assert_eq!((width, height), (24, 16));
        }
        other => panic!("expected image, got {:?}", other),
    }
    assert_eq!(store.describe("flag_usa.png"), "flag_usa.png [24x16]");
}

#[test]
fn test_missing_asset_degrades_to_raw_identifier() {
    let dir = tempfile::tempdir().unwrap();
    let store = AssetStore::new(dir.path().to_path_buf());

    assert_eq!(
        store.resolve("nope.png"),
        ResolvedAsset::Unavailable {
            identifier: "nope.png".to_string()
        }
    );
    assert_eq!(store.describe("nope.png"), "nope.png");
}

#[test]
fn test_unreadable_asset_degrades_to_raw_identifier() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not an image").unwrap();

    let store = AssetStore::new(dir.path().to_path_buf());
    assert_eq!(store.describe("broken.png"), "broken.png");
}
