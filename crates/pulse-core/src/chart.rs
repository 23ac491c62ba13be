// File: crates/pulse-core/src/chart.rs
// Summary: Chart facade dispatching a `ChartSpec` to the bar, line or pie layout and the SVG writer.

use std::path::Path;

use crate::bar::{self, BarOptions};
use crate::color::Color;
use crate::error::Result;
use crate::layout::Layout;
use crate::line::{self, LineOptions};
use crate::pie::{self, PieOptions};
use crate::scene::Scene;
use crate::series::{ChartData, ChartSpec};
use crate::svg;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOptions {
    pub theme: Theme,
    pub bar: BarOptions,
    pub line: LineOptions,
    pub pie: PieOptions,
}

impl RenderOptions {
    /// Same defaults with a single height for both bar and line charts.
    pub fn with_height(mut self, height: f64) -> Self {
        self.bar.height = height;
        self.line.height = height;
        self
    }
}

/// Single-entry legend shown under a bar or line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesLegend {
    pub label: &'static str,
    pub color: Color,
}

pub struct Chart {
    pub spec: ChartSpec,
}

impl Chart {
    pub fn new(spec: ChartSpec) -> Self {
        Self { spec }
    }

    /// Whether the layout pass would produce the "no data" state.
    pub fn is_placeholder(&self, opts: &RenderOptions) -> bool {
        match &self.spec.data {
            ChartData::Bar(p) => bar::layout(p, &self.bar_options(opts)).is_empty(),
            ChartData::Line(p) => line::layout(p, &self.line_options(opts)).is_empty(),
            ChartData::Pie(p) => pie::layout(p, &opts.pie).is_empty(),
        }
    }

    pub fn render_scene(&self, opts: &RenderOptions) -> Scene {
        let theme = &opts.theme;
        let scene = match &self.spec.data {
            ChartData::Bar(p) => bar::render(p, &self.bar_options(opts), theme),
            ChartData::Line(p) => line::render(p, &self.line_options(opts), theme),
            ChartData::Pie(p) => pie::render(p, &opts.pie, theme),
        };
        if scene.placeholder {
            log::debug!("chart '{}' has nothing to draw; using placeholder", self.spec.id);
        }
        scene
    }

    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> String {
        svg::to_string(&self.render_scene(opts))
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<()> {
        svg::write(&self.render_scene(opts), output_svg_path)
    }

    /// Pie legend rows, when this is a pie chart with something to show.
    pub fn pie_legend(&self, opts: &RenderOptions) -> Option<Vec<pie::LegendRow>> {
        match &self.spec.data {
            ChartData::Pie(p) => match pie::layout(p, &opts.pie) {
                Layout::Ready(g) => Some(g.legend()),
                Layout::Empty(_) => None,
            },
            _ => None,
        }
    }

    /// "Values" for bar charts and "Trend" for line charts, in the series color.
    /// `None` for pie charts and for charts showing the placeholder.
    pub fn series_legend(&self, opts: &RenderOptions) -> Option<SeriesLegend> {
        if self.is_placeholder(opts) {
            return None;
        }
        match &self.spec.data {
            ChartData::Bar(_) => Some(SeriesLegend { label: "Values", color: self.bar_options(opts).color }),
            ChartData::Line(_) => Some(SeriesLegend { label: "Trend", color: self.line_options(opts).color }),
            ChartData::Pie(_) => None,
        }
    }

    // The chart card color overrides the per-kind default.
    fn bar_options(&self, opts: &RenderOptions) -> BarOptions {
        BarOptions { color: self.spec.color.unwrap_or(opts.bar.color), ..opts.bar }
    }

    fn line_options(&self, opts: &RenderOptions) -> LineOptions {
        LineOptions { color: self.spec.color.unwrap_or(opts.line.color), ..opts.line }
    }
}
