// File: crates/demo/tests/csv_input.rs
// Purpose: CSV rows become chart data of the requested kind; the built-in dashboard renders cleanly.

use pulse_core::{Chart, ChartData, ChartKind, Color, RenderOptions};
use pulse_demo::data::{self, Row, PALETTE};
use std::io::Write;

fn csv_file(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".csv").tempfile().expect("temp csv");
    f.write_all(body.as_bytes()).expect("write csv");
    f
}

#[test]
fn reads_named_columns_in_any_order() {
    let f = csv_file("Value,Label,Color\n45000,North,#10b981\n32000,South,\n");
    let rows = data::load_rows(f.path()).expect("rows");
    assert_eq!(
        rows,
        vec![
            Row { label: "North".into(), value: 45_000.0, color: Some(Color::rgb(0x10, 0xb9, 0x81)) },
            Row { label: "South".into(), value: 32_000.0, color: None },
        ]
    );
}

#[test]
fn bad_value_reports_the_line() {
    let f = csv_file("label,value\nJan,95000\nFeb,lots\n");
    let err = data::load_rows(f.path()).unwrap_err();
    assert!(format!("{err:#}").contains(":3: value 'lots'"), "{err:#}");
}

#[test]
fn headerless_file_keeps_first_row() {
    let f = csv_file("Q1,580000\nQ2,650000\nQ3,720000,#ef4444\n");
    let rows = data::load_rows(f.path()).expect("rows");
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["Q1", "Q2", "Q3"]);
    assert_eq!(rows[0].value, 580_000.0);
    // Third column is still a color when there is no header.
    assert_eq!(rows[2].color, Some(Color::rgb(0xef, 0x44, 0x44)));
}

#[test]
fn headerless_errors_count_from_line_one() {
    let f = csv_file("Jan,95000\nFeb,lots\n");
    let err = data::load_rows(f.path()).unwrap_err();
    assert!(format!("{err:#}").contains(":2: value 'lots'"), "{err:#}");
}

#[test]
fn unnamed_extra_columns_are_not_colors() {
    let f = csv_file("month,value,notes\nJan,1,first month\nFeb,2,#10b981\n");
    let rows = data::load_rows(f.path()).expect("rows");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.color.is_none()), "{rows:?}");
}

#[test]
fn bad_color_is_an_error() {
    let f = csv_file("label,value,color\nA,1,chartreuse-ish\n");
    assert!(data::load_rows(f.path()).is_err());
}

#[test]
fn pie_rows_fall_back_to_the_palette() {
    let rows = vec![
        Row { label: "a".into(), value: 1.0, color: None },
        Row { label: "b".into(), value: 2.0, color: Some(Color::BLACK) },
        Row { label: "c".into(), value: 3.0, color: None },
    ];
    match data::rows_to_data(rows, ChartKind::Pie) {
        ChartData::Pie(points) => {
            let colors: Vec<Color> = points.iter().map(|p| p.color).collect();
            assert_eq!(colors, vec![PALETTE[0], Color::BLACK, PALETTE[2]]);
        }
        other => panic!("expected pie data, got {other:?}"),
    }
}

#[test]
fn chart_is_named_after_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cash_flow.csv");
    std::fs::write(&path, "label,value\nJan,45000\nFeb,52000\n").expect("write csv");
    let spec = data::load_chart(&path, ChartKind::Line).expect("chart");
    assert_eq!(spec.id, "cash_flow");
    assert_eq!(spec.title, "cash flow");
    assert_eq!(spec.kind(), ChartKind::Line);
    assert_eq!(spec.data.len(), 2);
}

#[test]
fn dashboard_charts_all_render() {
    let specs = data::dashboard();
    assert_eq!(specs.len(), 5);
    for spec in specs {
        let chart = Chart::new(spec);
        assert!(!chart.is_placeholder(&RenderOptions::default()), "{} is empty", chart.spec.id);
        assert!(chart.render_scene(&RenderOptions::default()).is_finite());
    }
}
