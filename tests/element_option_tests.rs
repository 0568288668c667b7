use markchart::series::{
    Color, ElementOption, PropSnapshot, StyleProps, TransformProps, TransitionHints,
    TransitionScope,
};
use serde_json::json;

#[test]
fn element_options_serialize_with_lowercase_type_tag() {
    let element = ElementOption::path("M0 0 L10 0").named("outline");
    let value = serde_json::to_value(&element).expect("serialize");

    assert_eq!(value["type"], "path");
    assert_eq!(value["name"], "outline");
    assert_eq!(value["shape"]["d"], "M0 0 L10 0");
}

#[test]
fn element_options_deserialize_with_declared_defaults() {
    let element: ElementOption =
        serde_json::from_value(json!({"type": "path", "shape": {"d": "M0 0 L4 4"}}))
            .expect("deserialize");

    let common = element.common();
    assert_eq!(common.transform, TransformProps::default());
    assert_eq!(common.transform.scale_x, 1.0);
    assert!(!common.invisible);
    assert!(common.name.is_none());
    assert!(common.z.is_none());
    assert!(common.transition.transition.is_none());
}

#[test]
fn text_elements_default_font_size_and_alignment() {
    let element: ElementOption =
        serde_json::from_value(json!({"type": "text", "shape": {"text": "label"}}))
            .expect("deserialize");

    let ElementOption::Text(text) = element else {
        panic!("expected text variant");
    };
    assert_eq!(text.shape.font_size_px, 12.0);
}

#[test]
fn transition_scope_accepts_keyword_and_property_list() {
    let all: ElementOption = serde_json::from_value(json!({
        "type": "path",
        "shape": {"d": "M0 0"},
        "transition": "all"
    }))
    .expect("deserialize all");
    assert_eq!(
        all.common().transition.transition,
        Some(TransitionScope::All)
    );

    let listed: ElementOption = serde_json::from_value(json!({
        "type": "path",
        "shape": {"d": "M0 0"},
        "transition": ["x", "y"]
    }))
    .expect("deserialize list");
    assert_eq!(
        listed.common().transition.transition,
        Some(TransitionScope::Props(vec!["x".to_owned(), "y".to_owned()]))
    );
}

#[test]
fn transition_scope_rejects_unknown_properties() {
    let hints = TransitionHints {
        transition: Some(TransitionScope::Props(vec!["width".to_owned()])),
        ..TransitionHints::default()
    };
    let element = ElementOption::path("M0 0").with_transition(hints);

    let error = element.validate().expect_err("unknown property");
    assert!(error.to_string().contains("width"));
}

#[test]
fn group_options_nest_children_and_validate_recursively() {
    let group = ElementOption::group([
        ElementOption::path("M0 0 L1 1").named("body"),
        ElementOption::group([ElementOption::text("inner")]).named("labels"),
    ]);

    group.validate().expect("valid nested group");
    assert_eq!(group.children().len(), 2);

    let invalid = ElementOption::group([
        ElementOption::path("M0 0").named("body"),
        ElementOption::group([ElementOption::text("")]).named("labels"),
    ]);
    invalid.validate().expect_err("empty nested text");
}

#[test]
fn groups_reject_duplicate_child_names() {
    let group = ElementOption::group([
        ElementOption::path("M0 0").named("mark"),
        ElementOption::text("label").named("mark"),
    ]);

    let error = group.validate().expect_err("duplicate name");
    assert!(error.to_string().contains("mark"));
}

#[test]
fn style_and_transform_validation_reject_non_finite_values() {
    let bad_transform = ElementOption::path("M0 0").with_transform(TransformProps {
        x: f64::NAN,
        ..TransformProps::default()
    });
    bad_transform.validate().expect_err("nan transform");

    let bad_style = ElementOption::path("M0 0").with_style(StyleProps {
        opacity: Some(1.5),
        ..StyleProps::default()
    });
    bad_style.validate().expect_err("opacity out of range");

    let bad_color = ElementOption::path("M0 0").with_style(StyleProps {
        fill: Some(Color::rgb(2.0, 0.0, 0.0)),
        ..StyleProps::default()
    });
    bad_color.validate().expect_err("color channel out of range");
}

#[test]
fn image_elements_require_positive_intrinsic_size() {
    ElementOption::image("sprite.png", 16.0, 16.0)
        .validate()
        .expect("valid image");
    ElementOption::image("sprite.png", 0.0, 16.0)
        .validate()
        .expect_err("zero width");
    ElementOption::image("", 16.0, 16.0)
        .validate()
        .expect_err("blank source");
}

#[test]
fn transition_snapshots_merge_field_by_field() {
    let mut stored = TransitionHints {
        leave_to: Some(PropSnapshot {
            opacity: Some(0.0),
            y: Some(40.0),
            ..PropSnapshot::default()
        }),
        ..TransitionHints::default()
    };

    stored.merge_from(&TransitionHints {
        leave_to: Some(PropSnapshot {
            y: Some(80.0),
            ..PropSnapshot::default()
        }),
        ..TransitionHints::default()
    });

    let leave_to = stored.leave_to.expect("leave-to kept");
    assert_eq!(leave_to.y, Some(80.0));
    assert_eq!(leave_to.opacity, Some(0.0));
}
