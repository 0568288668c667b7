use approx::assert_relative_eq;
use markchart::core::{
    CartesianFrame, CoordinateMapping, CoordinateSystemKind, TimeScale, ValueScale, Viewport,
};
use markchart::data::{DataSource, build_series_data};
use markchart::series::{Color, RenderItemApi};

fn cartesian_mapping() -> CoordinateMapping {
    let viewport = Viewport::new(1000, 500);
    let time_scale = TimeScale::new(0.0, 10.0).expect("time scale");
    let value_scale = ValueScale::new(0.0, 100.0).expect("value scale");
    CoordinateMapping::Cartesian(
        CartesianFrame::new(time_scale, value_scale, viewport).expect("frame"),
    )
}

#[test]
fn coord_maps_data_onto_the_pixel_grid() {
    let data = build_series_data(&DataSource::from_rows([vec![5.0, 25.0]])).expect("data");
    let api = RenderItemApi::new(cartesian_mapping(), &data, None);

    let [x, y] = api.coord(&[5.0, 25.0]).expect("coord");
    assert_relative_eq!(x, 500.0);
    assert_relative_eq!(y, 375.0);

    let [x0, y_max] = api.coord(&[0.0, 100.0]).expect("coord");
    assert_relative_eq!(x0, 0.0);
    assert_relative_eq!(y_max, 0.0);
}

#[test]
fn size_maps_data_spans_to_absolute_pixel_spans() {
    let data = build_series_data(&DataSource::from_rows([vec![0.0, 0.0]])).expect("data");
    let api = RenderItemApi::new(cartesian_mapping(), &data, None);

    let [width, height] = api.size(&[2.0, 10.0]).expect("size");
    assert_relative_eq!(width, 200.0);
    assert_relative_eq!(height, 50.0);

    let [width_neg, _] = api.size(&[-2.0, 10.0]).expect("size");
    assert_relative_eq!(width_neg, 200.0);
}

#[test]
fn value_reads_dimensions_from_the_series_data() {
    let data =
        build_series_data(&DataSource::from_rows([vec![1.0, 4.0, 9.0]])).expect("data");
    let api = RenderItemApi::new(cartesian_mapping(), &data, None);

    assert_eq!(api.value(2, 0).expect("value"), 9.0);
    api.value(3, 0).expect_err("missing dimension");
    api.value(0, 1).expect_err("missing datum");
}

#[test]
fn style_is_seeded_from_the_series_color() {
    let data = build_series_data(&DataSource::from_rows([vec![0.0, 0.0]])).expect("data");
    let color = Color::rgb(0.9, 0.1, 0.2);

    let api = RenderItemApi::new(cartesian_mapping(), &data, Some(color));
    assert_eq!(api.style().fill, Some(color));

    let fallback = RenderItemApi::new(cartesian_mapping(), &data, None);
    assert!(fallback.style().fill.is_some());
}

#[test]
fn none_mapping_passes_pixel_coordinates_through() {
    let viewport = Viewport::new(640, 480);
    let mapping = CoordinateMapping::None { viewport };
    assert_eq!(mapping.kind(), CoordinateSystemKind::None);

    let data = build_series_data(&DataSource::from_rows([vec![0.0, 0.0]])).expect("data");
    let api = RenderItemApi::new(mapping, &data, None);

    let [x, y] = api.coord(&[12.5, 40.0]).expect("coord");
    assert_eq!([x, y], [12.5, 40.0]);
    assert_eq!(api.size(&[-3.0, 4.0]).expect("size"), [3.0, 4.0]);
    assert_eq!(api.viewport(), viewport);
}

#[test]
fn coord_rejects_short_or_non_finite_input() {
    let data = build_series_data(&DataSource::from_rows([vec![0.0, 0.0]])).expect("data");
    let api = RenderItemApi::new(cartesian_mapping(), &data, None);

    api.coord(&[1.0]).expect_err("one dimension");
    api.coord(&[f64::NAN, 0.0]).expect_err("nan input");
}
