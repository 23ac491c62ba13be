// File: crates/pulse-core/tests/svg_output.rs
// Purpose: SVG markup for each chart kind: structure, escaping, hover labels, file output.

use pulse_core::pie::{self, PieOptions};
use pulse_core::{svg, BarPoint, Chart, ChartData, ChartSpec, Color, LinePoint, PiePoint, RenderOptions};

fn bar_chart() -> Chart {
    Chart::new(ChartSpec::new(
        "sales-by-region",
        "Sales by Region",
        ChartData::Bar(vec![
            BarPoint::new("North", 45_000.0),
            BarPoint::new("South", 32_000.0),
            BarPoint::new("East", 28_000.0),
            BarPoint::new("West", 38_000.0),
        ]),
    ))
}

#[test]
fn bar_svg_has_view_box_rects_and_labels() {
    let out = bar_chart().render_to_svg_string(&RenderOptions::default());
    assert!(out.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(out.contains("viewBox=\"0 0 380 300\""));
    // Shadow + bar per point.
    assert_eq!(out.matches("<rect ").count(), 8);
    assert!(out.contains(">45,000</text>"));
    assert!(out.contains(">North</text>"));
    assert!(out.contains("stroke-dasharray=\"2,2\""));
    assert!(out.trim_end().ends_with("</svg>"));
}

#[test]
fn chart_color_reaches_the_bars() {
    let mut chart = bar_chart();
    chart.spec.color = Some(Color::rgb(0x10, 0xb9, 0x81));
    let out = chart.render_to_svg_string(&RenderOptions::default());
    assert_eq!(out.matches("fill=\"#10b981\"").count(), 4);
}

#[test]
fn line_svg_has_paths_and_hover_labels() {
    let chart = Chart::new(ChartSpec::new(
        "revenue-trend",
        "Revenue Trend",
        ChartData::Line(vec![
            LinePoint::new("Jan", 95_000.0),
            LinePoint::new("Feb", 102_000.0),
            LinePoint::new("Mar", 98_000.0),
        ]),
    ));
    let out = chart.render_to_svg_string(&RenderOptions::default());
    assert_eq!(out.matches("<path ").count(), 2);
    assert!(out.contains("d=\"M 40 260 L 300 40 L 560 "));
    assert!(out.contains("stroke-linecap=\"round\""));
    assert_eq!(out.matches("class=\"value-label on-hover\"").count(), 3);
    assert!(out.contains("g:hover>.on-hover"));
}

#[test]
fn pie_sector_path_syntax() {
    let points = vec![
        PiePoint::new("Software", 45.0, Color::rgb(0x3b, 0x82, 0xf6)),
        PiePoint::new("Hardware", 55.0, Color::rgb(0x10, 0xb9, 0x81)),
    ];
    let out = svg::to_string(&pie::render(&points, &PieOptions::default(), &Default::default()));
    assert!(out.contains("d=\"M 125 125 L 125 20 A 105 105 0 0 1 "));
    // Second sector is larger than a half circle.
    assert!(out.contains(" A 105 105 0 1 1 "));
    assert!(out.contains("transform=\"translate(2,2)\""));
    assert!(out.contains(">45.0%</text>"));
}

#[test]
fn text_is_escaped() {
    let chart = Chart::new(ChartSpec::new(
        "rd",
        "R&D",
        ChartData::Bar(vec![BarPoint::new("R&D <lab>", 3.0)]),
    ));
    let out = chart.render_to_svg_string(&RenderOptions::default());
    assert!(out.contains(">R&amp;D &lt;lab&gt;</text>"));
    assert!(!out.contains("<lab>"));
}

#[test]
fn translucent_colors_use_opacity_attributes() {
    let out = bar_chart().render_to_svg_string(&RenderOptions::default());
    // Bar shadows are black at 10%.
    assert!(out.contains("fill=\"#000000\" fill-opacity=\"0.102\""));
}

#[test]
fn placeholder_svg() {
    let chart = Chart::new(ChartSpec::new("empty", "Empty", ChartData::Pie(Vec::new())));
    assert!(chart.is_placeholder(&RenderOptions::default()));
    let out = chart.render_to_svg_string(&RenderOptions::default());
    assert!(out.contains("No data available"));
    assert!(out.contains("class=\"placeholder\""));
    assert!(!out.contains("NaN"));
}

#[test]
fn render_to_svg_writes_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested/bar.svg");
    bar_chart().render_to_svg(&RenderOptions::default(), &path).expect("write svg");
    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.contains("Sales") || text.contains("North"));
}
