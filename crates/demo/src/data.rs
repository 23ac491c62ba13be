// File: crates/demo/src/data.rs
// Summary: Built-in dashboard charts and a `label,value[,color]` CSV loader.

use anyhow::{Context, Result};
use pulse_core::{BarPoint, ChartData, ChartKind, ChartSpec, Color, LinePoint, PiePoint};
use std::path::Path;

pub const BLUE: Color = Color::rgb(0x3b, 0x82, 0xf6);
pub const GREEN: Color = Color::rgb(0x10, 0xb9, 0x81);
pub const AMBER: Color = Color::rgb(0xf5, 0x9e, 0x0b);
pub const RED: Color = Color::rgb(0xef, 0x44, 0x44);
pub const VIOLET: Color = Color::rgb(0x8b, 0x5c, 0xf6);
pub const CYAN: Color = Color::rgb(0x06, 0xb6, 0xd4);

/// Slice colors for CSV pie rows that carry none.
pub const PALETTE: [Color; 6] = [BLUE, GREEN, AMBER, RED, VIOLET, CYAN];

/// Overview cards followed by the finance page cards.
pub fn dashboard() -> Vec<ChartSpec> {
    vec![
        ChartSpec::new(
            "revenue-trend",
            "Revenue Trend",
            ChartData::Line(vec![
                LinePoint::new("Jan", 95_000.0),
                LinePoint::new("Feb", 102_000.0),
                LinePoint::new("Mar", 98_000.0),
                LinePoint::new("Apr", 115_000.0),
                LinePoint::new("May", 124_563.0),
            ]),
        )
        .with_description("Monthly revenue progression")
        .with_period("Last 5 months")
        .with_growth("+15.2%")
        .with_color(BLUE),
        ChartSpec::new(
            "sales-by-region",
            "Sales by Region",
            ChartData::Bar(vec![
                BarPoint::new("North", 45_000.0),
                BarPoint::new("South", 32_000.0),
                BarPoint::new("East", 28_000.0),
                BarPoint::new("West", 38_000.0),
            ]),
        )
        .with_description("Regional sales distribution")
        .with_period("This month")
        .with_color(GREEN),
        ChartSpec::new(
            "product-mix",
            "Product Mix",
            ChartData::Pie(vec![
                PiePoint::new("Software", 45.0, BLUE),
                PiePoint::new("Hardware", 30.0, GREEN),
                PiePoint::new("Services", 15.0, AMBER),
                PiePoint::new("Support", 10.0, RED),
            ]),
        )
        .with_description("Revenue by product category")
        .with_period("Current quarter"),
        ChartSpec::new(
            "revenue-vs-expenses",
            "Revenue vs Expenses",
            ChartData::Bar(vec![
                BarPoint::new("Q1", 580_000.0),
                BarPoint::new("Q2", 650_000.0),
                BarPoint::new("Q3", 720_000.0),
                BarPoint::new("Q4", 790_000.0),
            ]),
        )
        .with_description("Quarterly comparison")
        .with_period("This year")
        .with_growth("+23.5%")
        .with_color(GREEN),
        ChartSpec::new(
            "cash-flow-trend",
            "Cash Flow Trend",
            ChartData::Line(vec![
                LinePoint::new("Jan", 45_000.0),
                LinePoint::new("Feb", 52_000.0),
                LinePoint::new("Mar", 48_000.0),
                LinePoint::new("Apr", 61_000.0),
                LinePoint::new("May", 58_000.0),
                LinePoint::new("Jun", 65_000.0),
            ]),
        )
        .with_description("Monthly cash flow progression")
        .with_period("Last 6 months")
        .with_growth("+18.2%")
        .with_color(BLUE),
    ]
}

/// One parsed CSV row.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub label: String,
    pub value: f64,
    pub color: Option<Color>,
}

const LABEL_NAMES: [&str; 4] = ["label", "name", "category", "month"];
const VALUE_NAMES: [&str; 3] = ["value", "amount", "total"];
const COLOR_NAMES: [&str; 2] = ["color", "colour"];

/// Column positions for the row fields.
#[derive(Clone, Copy, Debug)]
struct Columns {
    label: usize,
    value: usize,
    color: Option<usize>,
}

impl Columns {
    /// Header-less files are read positionally as `label,value[,color]`.
    const POSITIONAL: Columns = Columns { label: 0, value: 1, color: Some(2) };

    /// Columns named by a header record, or `None` when no field is a known name.
    fn from_header(rec: &csv::StringRecord) -> Option<Columns> {
        let fields = rec.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
        let idx = |names: &[&str]| fields.iter().position(|h| names.contains(&h.as_str()));
        let (label, value, color) = (idx(&LABEL_NAMES), idx(&VALUE_NAMES), idx(&COLOR_NAMES));
        if label.is_none() && value.is_none() && color.is_none() {
            return None;
        }
        // Only a named column is read as a color.
        Some(Columns { label: label.unwrap_or(0), value: value.unwrap_or(1), color })
    }
}

/// Read `label,value[,color]` rows. A first line naming any known column is a header, and
/// its columns are matched by name, case-insensitively. Otherwise every line is data and the
/// first three columns are used in that order.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut records = rdr.records().enumerate().peekable();
    let header = match records.peek() {
        Some((_, Ok(first))) => Columns::from_header(first),
        _ => None,
    };
    let cols = match header {
        Some(cols) => {
            records.next();
            cols
        }
        None => Columns::POSITIONAL,
    };
    log::debug!("csv columns: {:?} (header: {})", cols, header.is_some());

    let mut out = Vec::new();
    for (n, rec) in records {
        let rec = rec?;
        let line = n + 1;
        let label = rec.get(cols.label).unwrap_or_default().to_string();
        let raw = rec.get(cols.value).unwrap_or_default();
        let value: f64 = raw
            .parse()
            .with_context(|| format!("{}:{line}: value '{raw}' is not a number", path.display()))?;
        let color = match cols.color.and_then(|i| rec.get(i)).filter(|s| !s.is_empty()) {
            Some(s) => Some(s.parse::<Color>().with_context(|| format!("{}:{line}", path.display()))?),
            None => None,
        };
        out.push(Row { label, value, color });
    }
    Ok(out)
}

/// Turn rows into chart data of `kind`. Pie rows without a color cycle through `PALETTE`.
pub fn rows_to_data(rows: Vec<Row>, kind: ChartKind) -> ChartData {
    match kind {
        ChartKind::Bar => ChartData::Bar(
            rows.into_iter()
                .map(|r| BarPoint { label: r.label, value: r.value, color: r.color })
                .collect(),
        ),
        ChartKind::Line => ChartData::Line(rows.into_iter().map(|r| LinePoint::new(r.label, r.value)).collect()),
        ChartKind::Pie => ChartData::Pie(
            rows.into_iter()
                .enumerate()
                .map(|(i, r)| {
                    let color = r.color.unwrap_or(PALETTE[i % PALETTE.len()]);
                    PiePoint::new(r.label, r.value, color)
                })
                .collect(),
        ),
    }
}

/// Chart for a CSV file, titled and identified after the file stem.
pub fn load_chart(path: &Path, kind: ChartKind) -> Result<ChartSpec> {
    let rows = load_rows(path)?;
    log::info!("loaded {} rows from {}", rows.len(), path.display());
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
    let title = stem.replace(['_', '-'], " ");
    Ok(ChartSpec::new(stem, title, rows_to_data(rows, kind)))
}
