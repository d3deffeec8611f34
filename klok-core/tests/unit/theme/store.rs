use super::*;

fn svg(width: u32, height: u32, fill: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}"><rect width="{width}" height="{height}" fill="{fill}"/></svg>"#
    )
}

fn write_layers(dir: &Path, layers: &[Layer]) {
    for layer in layers {
        std::fs::write(dir.join(layer.file_name()), svg(100, 100, "#336699")).unwrap();
    }
}

#[test]
fn load_with_all_required_layers_succeeds() {
    let tmp = tempfile::tempdir().unwrap();
    write_layers(
        tmp.path(),
        &[Layer::DropShadow, Layer::Face, Layer::HourHand, Layer::MinuteHand],
    );

    let theme = Theme::load(tmp.path(), "plain", ThemeOptions::default()).unwrap();
    assert_eq!(theme.name(), "plain");
    assert!(theme.layer(Layer::Face).is_some());
    assert!(theme.layer(Layer::MinuteHand).is_some());
    // Optional layers absent on disk stay empty.
    assert!(theme.layer(Layer::Glass).is_none());
    assert!(theme.layer(Layer::Frame).is_none());
    assert!(theme.layer(Layer::SecondHand).is_none());
}

#[test]
fn missing_required_layer_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    write_layers(tmp.path(), &[Layer::DropShadow, Layer::Face, Layer::HourHand]);

    let err = Theme::load(tmp.path(), "broken", ThemeOptions::default()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("theme error:"));
    assert!(msg.contains("minute-hand"));
}

#[test]
fn unparseable_required_layer_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    write_layers(
        tmp.path(),
        &[Layer::DropShadow, Layer::Face, Layer::HourHand, Layer::MinuteHand],
    );
    std::fs::write(tmp.path().join(Layer::Face.file_name()), "<svg").unwrap();

    assert!(Theme::load(tmp.path(), "bad-face", ThemeOptions::default()).is_err());
}

#[test]
fn logical_size_comes_from_drop_shadow() {
    let tmp = tempfile::tempdir().unwrap();
    write_layers(tmp.path(), &[Layer::Face, Layer::HourHand, Layer::MinuteHand]);
    std::fs::write(
        tmp.path().join(Layer::DropShadow.file_name()),
        svg(128, 96, "#000000"),
    )
    .unwrap();

    let theme = Theme::load(tmp.path(), "sized", ThemeOptions::default()).unwrap();
    assert_eq!(theme.logical_size(), (128, 96));
}

#[test]
fn show_seconds_off_leaves_second_slots_empty() {
    let tmp = tempfile::tempdir().unwrap();
    write_layers(
        tmp.path(),
        &[
            Layer::DropShadow,
            Layer::Face,
            Layer::HourHand,
            Layer::MinuteHand,
            Layer::SecondHand,
            Layer::SecondHandShadow,
        ],
    );

    let opts = ThemeOptions { show_seconds: false };
    let theme = Theme::load(tmp.path(), "no-seconds", opts).unwrap();
    assert!(theme.layer(Layer::SecondHand).is_none());
    assert!(theme.layer(Layer::SecondHandShadow).is_none());
    assert!(theme.layer(Layer::HourHand).is_some());
}

#[test]
fn theme_dir_uses_system_root() {
    let dir = theme_dir("default", false).unwrap();
    assert_eq!(
        dir,
        Path::new(SYSTEM_THEMES_ROOT).join("themes").join("default")
    );
}
