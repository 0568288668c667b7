use chrono::{TimeZone, Utc};
use markchart::data::{DataItem, DataSource, build_series_data};
use rust_decimal::Decimal;

#[test]
fn list_builder_preserves_order_and_widest_dimension() {
    let mut source = DataSource::from_rows([vec![0.0, 1.0], vec![1.0, 2.0, 3.0]]);
    source.push(DataItem::new([2.0]).with_name("tail").with_id("d2"));

    let data = build_series_data(&source).expect("build");

    assert_eq!(data.len(), 3);
    assert_eq!(data.dimension_count(), 3);
    assert_eq!(data.values(1).expect("values"), &[1.0, 2.0, 3.0]);
    assert_eq!(data.name(2), Some("tail"));
    assert_eq!(data.item(2).expect("item").id.as_deref(), Some("d2"));
}

#[test]
fn list_builder_rejects_non_finite_values() {
    let source = DataSource::from_rows([vec![0.0, f64::NAN]]);
    let error = build_series_data(&source).expect_err("nan value");
    assert!(error.to_string().contains("dimension 1"));
}

#[test]
fn list_builder_rejects_empty_value_vectors() {
    let source = DataSource::from_rows([Vec::<f64>::new()]);
    build_series_data(&source).expect_err("empty row");
}

#[test]
fn ragged_rows_surface_missing_dimensions_at_read_time() {
    let source = DataSource::from_rows([vec![0.0, 1.0], vec![1.0]]);
    let data = build_series_data(&source).expect("build");

    assert_eq!(data.value(1, 0).expect("present"), 1.0);
    let error = data.value(1, 1).expect_err("missing dimension");
    assert!(error.to_string().contains("dimension 1"));
}

#[test]
fn dimension_values_skip_rows_without_that_dimension() {
    let source = DataSource::from_rows([vec![0.0, 10.0], vec![1.0], vec![2.0, 30.0]]);
    let data = build_series_data(&source).expect("build");

    assert_eq!(data.dimension_values(0), vec![0.0, 1.0, 2.0]);
    assert_eq!(data.dimension_values(1), vec![10.0, 30.0]);
}

#[test]
fn decimal_time_input_converts_to_unix_seconds() {
    let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let item = DataItem::from_decimal_time(
        time,
        &[Decimal::new(4215, 2), Decimal::new(100, 0)],
    )
    .expect("convert");

    assert_eq!(item.value.len(), 3);
    assert_eq!(item.value[0], time.timestamp() as f64);
    assert_eq!(item.value[1], 42.15);
    assert_eq!(item.value[2], 100.0);
}

#[test]
fn data_items_round_trip_through_serde() {
    let item = DataItem::new([1.0, 2.0]).with_name("a");
    let json = serde_json::to_string(&item).expect("serialize");
    let back: DataItem = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, item);
}
