use super::*;

use crate::theme::store::ThemeOptions;

fn test_theme(optional_frame: bool) -> (tempfile::TempDir, Theme) {
    let tmp = tempfile::tempdir().unwrap();
    let full = |fill: &str| {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect width="100" height="100" fill="{fill}"/></svg>"#
        )
    };
    for (layer, fill) in [
        (Layer::DropShadow, "#202020"),
        (Layer::Face, "#f0f0f0"),
        (Layer::HourHand, "#000000"),
        (Layer::MinuteHand, "#000000"),
    ] {
        std::fs::write(tmp.path().join(layer.file_name()), full(fill)).unwrap();
    }
    if optional_frame {
        std::fs::write(tmp.path().join(Layer::Frame.file_name()), full("#804020")).unwrap();
    }
    let theme = Theme::load(tmp.path(), "test", ThemeOptions::default()).unwrap();
    (tmp, theme)
}

#[test]
fn same_size_is_a_cache_hit_with_identical_pixels() {
    let (_tmp, theme) = test_theme(true);
    let mut cache = BackgroundCache::new();

    let first = cache.ensure(&theme, 80, 80).unwrap().data().to_vec();
    assert_eq!(cache.rebuilds(), 1);

    let second = cache.ensure(&theme, 80, 80).unwrap().data().to_vec();
    assert_eq!(cache.rebuilds(), 1);
    assert_eq!(first, second);
}

#[test]
fn size_change_triggers_exactly_one_rebuild() {
    let (_tmp, theme) = test_theme(true);
    let mut cache = BackgroundCache::new();

    cache.ensure(&theme, 80, 80).unwrap();
    cache.ensure(&theme, 120, 60).unwrap();
    assert_eq!(cache.rebuilds(), 2);

    let surface = cache.ensure(&theme, 120, 60).unwrap();
    assert_eq!((surface.width(), surface.height()), (120, 60));
    assert_eq!(cache.rebuilds(), 2);
}

#[test]
fn composite_covers_the_viewport() {
    let (_tmp, theme) = test_theme(true);
    let mut cache = BackgroundCache::new();

    let surface = cache.ensure(&theme, 64, 64).unwrap();
    // The face rect fills the artwork, so corner and center pixels are opaque.
    let data = surface.data();
    assert_eq!(data[3], 255);
    let center = ((32 * 64 + 32) * 4) as usize;
    assert_eq!(data[center + 3], 255);
}

#[test]
fn missing_optional_layers_still_render() {
    let (_tmp, theme) = test_theme(false);
    let mut cache = BackgroundCache::new();

    let surface = cache.ensure(&theme, 50, 50).unwrap();
    assert!(surface.data().iter().any(|&b| b != 0));
}

#[test]
fn empty_viewport_is_rejected() {
    let (_tmp, theme) = test_theme(false);
    let mut cache = BackgroundCache::new();
    assert!(cache.ensure(&theme, 0, 50).is_err());
    assert_eq!(cache.rebuilds(), 0);
}

#[test]
fn invalidate_forces_a_rebuild_at_the_same_size() {
    let (_tmp, theme) = test_theme(true);
    let mut cache = BackgroundCache::new();

    cache.ensure(&theme, 40, 40).unwrap();
    cache.invalidate();
    cache.ensure(&theme, 40, 40).unwrap();
    assert_eq!(cache.rebuilds(), 2);
}
