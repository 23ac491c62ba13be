// File: crates/demo/src/main.rs
// Summary: Demo renders the dashboard charts (or a CSV/JSON input) to SVG, optionally PNG, under a mocked session.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pulse_core::format::{currency, percent_change, relative_time};
use pulse_core::session::FileStore;
use pulse_core::{theme, Chart, ChartKind, ChartSpec, RenderOptions, Session};
use pulse_demo::data;
use pulse_render_skia::{RasterOptions, SkiaRenderer};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Bar,
    Line,
    Pie,
}

impl From<KindArg> for ChartKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Bar => ChartKind::Bar,
            KindArg::Line => ChartKind::Line,
            KindArg::Pie => ChartKind::Pie,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pulse-demo", version, about = "Render dashboard charts to SVG and PNG.")]
struct Args {
    /// `label,value[,color]` CSV, or a JSON array of chart specs. Omit for the built-in dashboard.
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Chart kind for CSV input.
    #[arg(short, long, value_enum, default_value_t = KindArg::Bar)]
    kind: KindArg,

    /// Output directory; the session file lives here too.
    #[arg(short, long, value_name = "DIR", default_value = "target/out")]
    out: PathBuf,

    /// Also rasterize each chart to PNG.
    #[arg(long)]
    png: bool,

    /// PNG pixels per chart unit.
    #[arg(long, default_value_t = 2.0)]
    scale: f32,

    /// Theme preset: light, dark or high-contrast-dark.
    #[arg(long, default_value = "light")]
    theme: String,

    /// Bar and line chart height.
    #[arg(long)]
    height: Option<f64>,

    /// Thin line series longer than this many points.
    #[arg(long, value_name = "N")]
    max_points: Option<usize>,

    /// Sign in with this email before rendering.
    #[arg(long, value_name = "EMAIL", conflicts_with = "logout")]
    login: Option<String>,

    /// Clear the stored session and exit.
    #[arg(long)]
    logout: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose)?;

    let store = FileStore::new(args.out.join("session.json"));
    let mut session = Session::restore_or_demo(store)?;
    if args.logout {
        session.logout()?;
        println!("Signed out.");
        return Ok(());
    }
    if let Some(email) = &args.login {
        session.login(email, "")?;
    }
    if let Some(user) = session.user() {
        println!("Signed in as {} <{}> ({})", user.name, user.email, user.role);
    }

    let specs = match &args.input {
        Some(path) => load_input(path, args.kind.into())?,
        None => data::dashboard(),
    };
    anyhow::ensure!(!specs.is_empty(), "no charts to render");

    let mut opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    if !opts.theme.name.eq_ignore_ascii_case(&args.theme) {
        log::warn!("unknown theme '{}', using {}", args.theme, opts.theme.name);
    }
    if let Some(h) = args.height {
        anyhow::ensure!(h.is_finite() && h > 0.0, "--height must be positive");
        opts = opts.with_height(h);
    }
    opts.line.max_points = args.max_points;

    let raster = RasterOptions { scale: args.scale, ..RasterOptions::themed(&opts.theme) };
    let renderer = args.png.then(SkiaRenderer::new);

    let started = chrono::Utc::now();
    for spec in specs {
        render_one(Chart::new(spec), &opts, &args.out, renderer.as_ref(), &raster)?;
    }
    println!("Last rendered: {}", relative_time(started, chrono::Utc::now()));
    Ok(())
}

fn render_one(
    chart: Chart,
    opts: &RenderOptions,
    out_dir: &Path,
    renderer: Option<&SkiaRenderer>,
    raster: &RasterOptions,
) -> Result<()> {
    let spec = &chart.spec;
    let mut header = format!("{} [{:?}, {} points]", spec.title, spec.kind(), spec.data.len());
    if let Some(period) = &spec.period {
        header.push_str(&format!(" - {period}"));
    }
    if let Some(growth) = &spec.growth {
        header.push_str(&format!(" ({growth})"));
    }
    println!("{header}");
    if let Some(desc) = &spec.description {
        println!("  {desc}");
    }
    if chart.is_placeholder(opts) {
        println!("  No data available");
    }
    for row in chart.pie_legend(opts).unwrap_or_default() {
        println!("  {:<12} {:>10} {:>7}  {}", row.label, row.value_label, row.percentage_label, row.color);
    }
    if let Some(legend) = chart.series_legend(opts) {
        println!("  Legend: {} {}", legend.label, legend.color);
    }
    if let Some(change) = first_to_last_change(&chart) {
        println!("  Change over period: {} (now {})", percent_change(change.0), currency(change.1, 0));
    }

    let out_svg = out_dir.join(format!("{}.svg", spec.id));
    chart
        .render_to_svg(opts, &out_svg)
        .with_context(|| format!("writing {}", out_svg.display()))?;
    println!("  Wrote {}", out_svg.display());

    if let Some(renderer) = renderer {
        let out_png = out_svg.with_extension("png");
        renderer.render_to_png(&chart.render_scene(opts), raster, &out_png)?;
        println!("  Wrote {}", out_png.display());
    }
    Ok(())
}

/// Percent change from the first to the last point of a line series, and the last value.
fn first_to_last_change(chart: &Chart) -> Option<(f64, f64)> {
    match &chart.spec.data {
        pulse_core::ChartData::Line(points) => {
            let (first, last) = (points.first()?, points.last()?);
            if points.len() < 2 || first.value == 0.0 {
                return None;
            }
            Some(((last.value - first.value) / first.value * 100.0, last.value))
        }
        _ => None,
    }
}

fn load_input(path: &Path, kind: ChartKind) -> Result<Vec<ChartSpec>> {
    let is_json = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let specs: Vec<ChartSpec> =
            serde_json::from_str(&text).with_context(|| format!("parsing chart specs in {}", path.display()))?;
        log::info!("loaded {} chart specs from {}", specs.len(), path.display());
        Ok(specs)
    } else {
        Ok(vec![data::load_chart(path, kind)?])
    }
}

fn init_logger(verbosity: u8) -> Result<(), fern::InitError> {
    let level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Utc::now().format("[%Y-%m-%d][%H:%M:%S%.3f]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
