use markchart::core::CoordinateSystemKind;
use markchart::series::{Color, CustomSeriesOptions, CustomSeriesOptionsPatch};
use serde_json::json;

#[test]
fn defaults_match_declared_literals() {
    let options = CustomSeriesOptions::default();

    assert_eq!(options.coordinate_system, CoordinateSystemKind::Cartesian2d);
    assert!(!options.clip);
    assert_eq!(options.z, 2.0);
    assert_eq!(options.zlevel, 0);
    assert!(options.id.is_none());
    assert!(options.color.is_none());
    assert!(!options.universal_transition);
}

#[test]
fn coordinate_system_serializes_as_lowercase_keywords() {
    let options = CustomSeriesOptions::default();
    let value = serde_json::to_value(&options).expect("serialize");
    assert_eq!(value["coordinate_system"], "cartesian2d");

    let none: CustomSeriesOptions =
        serde_json::from_value(json!({"coordinate_system": "none"})).expect("deserialize");
    assert_eq!(none.coordinate_system, CoordinateSystemKind::None);
}

#[test]
fn patch_overlays_declared_fields_only() {
    let mut options = CustomSeriesOptions {
        name: Some("hexbins".to_owned()),
        ..CustomSeriesOptions::default()
    };

    options.apply(&CustomSeriesOptionsPatch {
        z: Some(7.0),
        clip: Some(true),
        ..CustomSeriesOptionsPatch::default()
    });

    assert_eq!(options.z, 7.0);
    assert!(options.clip);
    assert_eq!(options.name.as_deref(), Some("hexbins"));
    assert_eq!(options.zlevel, 0);
}

#[test]
fn validation_rejects_blank_ids_and_bad_colors() {
    let blank_id = CustomSeriesOptions {
        id: Some("   ".to_owned()),
        ..CustomSeriesOptions::default()
    };
    blank_id.validate().expect_err("blank id");

    let bad_color = CustomSeriesOptions {
        color: Some(Color::rgba(0.2, 0.2, 0.2, -1.0)),
        ..CustomSeriesOptions::default()
    };
    bad_color.validate().expect_err("negative alpha");

    let bad_z = CustomSeriesOptions {
        z: f64::INFINITY,
        ..CustomSeriesOptions::default()
    };
    bad_z.validate().expect_err("non-finite z");
}
