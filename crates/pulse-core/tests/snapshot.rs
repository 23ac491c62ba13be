// File: crates/pulse-core/tests/snapshot.rs
// Purpose: Golden SVG snapshots for the three dashboard charts with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, compares the markup exactly against the committed snapshot; a missing file fails.

use pulse_core::{BarPoint, Chart, ChartData, ChartSpec, Color, LinePoint, PiePoint, RenderOptions};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, markup: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, markup).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), markup.len());
        return;
    }
    let want = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("[snapshot] Missing {} ({e}); set UPDATE_SNAPSHOTS=1 to bless.", path.display()));
    assert_eq!(markup, want, "SVG differs from golden snapshot: {}", path.display());
}

#[test]
fn golden_revenue_trend() {
    let chart = Chart::new(ChartSpec::new(
        "revenue-trend",
        "Revenue Trend",
        ChartData::Line(vec![
            LinePoint::new("Jan", 95_000.0),
            LinePoint::new("Feb", 102_000.0),
            LinePoint::new("Mar", 98_000.0),
            LinePoint::new("Apr", 115_000.0),
            LinePoint::new("May", 124_563.0),
        ]),
    ));
    write_or_compare("revenue_trend.svg", &chart.render_to_svg_string(&RenderOptions::default()));
}

#[test]
fn golden_quarterly_bars() {
    let chart = Chart::new(ChartSpec::new(
        "quarterly",
        "Quarterly Revenue",
        ChartData::Bar(vec![
            BarPoint::new("Q1", 580_000.0),
            BarPoint::new("Q2", 650_000.0),
            BarPoint::new("Q3", 720_000.0),
            BarPoint::new("Q4", 790_000.0),
        ]),
    ));
    write_or_compare("quarterly_bars.svg", &chart.render_to_svg_string(&RenderOptions::default()));
}

#[test]
fn golden_product_mix() {
    let chart = Chart::new(ChartSpec::new(
        "product-mix",
        "Product Mix",
        ChartData::Pie(vec![
            PiePoint::new("Software", 45.0, Color::rgb(0x3b, 0x82, 0xf6)),
            PiePoint::new("Hardware", 30.0, Color::rgb(0x10, 0xb9, 0x81)),
            PiePoint::new("Services", 15.0, Color::rgb(0xf5, 0x9e, 0x0b)),
            PiePoint::new("Support", 10.0, Color::rgb(0xef, 0x44, 0x44)),
        ]),
    ));
    write_or_compare("product_mix.svg", &chart.render_to_svg_string(&RenderOptions::default()));
}
