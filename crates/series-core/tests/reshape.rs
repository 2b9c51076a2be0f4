// File: crates/series-core/tests/reshape.rs
// Purpose: End-to-end reshape scenarios over realistic monthly payloads.

use series_core::{
    monthly_sales_specs, reshape, Field, Palette, PeriodCollection, PeriodRecord, ReshapeError, Series,
    SeriesList, SeriesPoint, SeriesSpec,
};

fn two_months() -> PeriodCollection {
    PeriodCollection::from_records(vec![
        PeriodRecord::new("Jan", 100.0, 5.0),
        PeriodRecord::new("Feb", 150.0, 8.0),
    ])
}

#[test]
fn sales_and_units_lines() {
    let specs = vec![
        SeriesSpec::new("Total Sales", Field::TotalPrimary),
        SeriesSpec::new("Total Units", Field::TotalSecondary),
    ];
    let out = reshape(&two_months(), &specs).expect("reshape");
    let want = SeriesList::from(vec![
        Series::with_points("Total Sales", None, vec![SeriesPoint::new("Jan", 100.0), SeriesPoint::new("Feb", 150.0)]),
        Series::with_points("Total Units", None, vec![SeriesPoint::new("Jan", 5.0), SeriesPoint::new("Feb", 8.0)]),
    ]);
    assert_eq!(out, want);
}

#[test]
fn empty_collection_yields_empty_series() {
    let specs = monthly_sales_specs(&Palette::dark());
    let out = reshape(&PeriodCollection::<String>::new(), &specs).expect("reshape");
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|s| s.points.is_empty()));
    assert_eq!(out[0].color.as_deref(), Some("#ffe3a3"));
}

#[test]
fn empty_config_is_invalid_input() {
    let specs: Vec<SeriesSpec> = Vec::new();
    let err = reshape(&two_months(), &specs).unwrap_err();
    assert!(matches!(err, ReshapeError::InvalidInput(_)));
}

#[test]
fn missing_field_fails_fast() {
    let mut input = two_months();
    input.insert("2".to_string(), PeriodRecord::empty("Mar"));
    let specs = vec![SeriesSpec::new("Total Units", Field::TotalSecondary)];
    match reshape(&input, &specs) {
        Err(ReshapeError::FieldMissing { series, period, field }) => {
            assert_eq!(series, "Total Units");
            assert_eq!(period, "Mar");
            assert_eq!(field, "totalSecondary");
        }
        other => panic!("expected FieldMissing, got {other:?}"),
    }
}

#[test]
fn input_is_untouched() {
    let input = two_months();
    let before = input.clone();
    let specs = monthly_sales_specs(&Palette::light());
    let a = reshape(&input, &specs).expect("first");
    let b = reshape(&input, &specs).expect("second");
    assert_eq!(a, b);
    assert_eq!(input, before);
}

#[test]
fn api_payload_object_keeps_document_order() {
    // keys deliberately not sorted
    let json = r#"{
        "b7": {"_id": "b7", "month": "January", "totalSales": 2121, "totalUnits": 321},
        "a3": {"_id": "a3", "month": "February", "totalSales": 3000, "totalUnits": 400, "returns": 12},
        "c1": {"_id": "c1", "month": "March", "totalSales": 1800.5, "totalUnits": 250}
    }"#;
    let input: PeriodCollection = serde_json::from_str(json).expect("parse payload");
    let labels: Vec<&str> = input.records().map(|r| r.period.as_str()).collect();
    assert_eq!(labels, ["January", "February", "March"]);
    assert_eq!(input.get("a3").and_then(|r| r.metric("returns")), Some(12.0));

    let out = reshape(&input, &monthly_sales_specs(&Palette::dark())).expect("reshape");
    assert_eq!(out[0].points[2], SeriesPoint::new("March", 1800.5));
    assert_eq!(out[1].points[0].y, 321.0);
}

#[test]
fn api_payload_array_and_renderer_shape() {
    let json = r#"[
        {"month": "January", "totalSales": 10, "totalUnits": 1},
        {"month": "February", "totalSales": null, "totalUnits": 2}
    ]"#;
    let input: PeriodCollection = serde_json::from_str(json).expect("parse payload");
    assert_eq!(input.len(), 2);
    assert_eq!(input.get("1").and_then(|r| r.total_primary), None);

    let units = vec![SeriesSpec::new("Total Units", Field::TotalSecondary).with_color("#cca752")];
    let out = reshape(&input, &units).expect("reshape");
    let value = serde_json::to_value(&out).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!([
            {"id": "Total Units", "color": "#cca752", "data": [
                {"x": "January", "y": 1.0},
                {"x": "February", "y": 2.0}
            ]}
        ])
    );
}
