// File: crates/pulse-core/src/line.rs
// Summary: Line chart layout: polyline, filled area, point markers with hover labels, guides and x labels.

use std::borrow::Cow;

use crate::color::Color;
use crate::downsample::lttb;
use crate::format::group_thousands;
use crate::geometry::{Point, Rect};
use crate::grid::{guides, GuideLine};
use crate::layout::{EmptyReason, Layout};
use crate::scale::{IndexScale, ValueScale};
use crate::scene::{Anchor, Group, Node, Paint, PathData, Scene, TextStyle, Weight};
use crate::series::{sanitize, ChartKind, LinePoint};
use crate::theme::Theme;
use crate::types::{DEFAULT_COLOR, DEFAULT_HEIGHT, LINE_PADDING, LINE_VIEW_WIDTH};

const MARKER_RADIUS: f64 = 6.0;
const TOOLTIP_WIDTH: f64 = 50.0;
const TOOLTIP_HEIGHT: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineOptions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub color: Color,
    /// Thin longer series with LTTB before layout.
    pub max_points: Option<usize>,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            width: LINE_VIEW_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: LINE_PADDING,
            color: DEFAULT_COLOR,
            max_points: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlottedPoint {
    pub label: String,
    pub value: f64,
    pub at: Point,
    pub value_label: String,
    /// Background of the on-demand value label.
    pub tooltip: Rect,
    pub tooltip_text_at: Point,
    pub label_at: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub color: Color,
    pub min_value: f64,
    pub max_value: f64,
    pub points: Vec<PlottedPoint>,
    /// Polyline through every point; `None` for a single-point series.
    pub line: Option<PathData>,
    /// Polyline closed down to the baseline; `None` for a single-point series.
    pub area: Option<PathData>,
    pub guides: Vec<GuideLine>,
}

pub fn layout(points: &[LinePoint], opts: &LineOptions) -> Layout<LineGeometry> {
    if points.is_empty() {
        log::debug!("line layout: empty series");
        return Layout::Empty(EmptyReason::NoData);
    }

    let points: Cow<'_, [LinePoint]> = match opts.max_points {
        Some(max) if max >= 2 && points.len() > max => {
            log::debug!("line layout: thinning {} points to {max}", points.len());
            Cow::Owned(lttb(points, max))
        }
        _ => Cow::Borrowed(points),
    };

    let (w, h, pad) = (opts.width, opts.height, opts.padding);
    let values: Vec<f64> = points.iter().map(|p| sanitize(&p.label, p.value)).collect();
    let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let raw_range = max_value - min_value;

    let scale = ValueScale::new_linear(pad, h - pad, min_value, max_value);
    let xs = IndexScale::spanning(pad, w - pad, points.len());

    let plotted: Vec<PlottedPoint> = points
        .iter()
        .zip(&values)
        .enumerate()
        .map(|(i, (p, &value))| {
            // A lone point has no step; it sits in the middle of the plot area.
            let at = match xs {
                Some(xs) => Point::new(xs.to_px(i), scale.to_px(value)),
                None => Point::new(w / 2.0, h / 2.0),
            };
            PlottedPoint {
                label: p.label.clone(),
                value,
                at,
                value_label: group_thousands(value),
                tooltip: Rect::from_xywh(at.x - TOOLTIP_WIDTH / 2.0, at.y - 35.0, TOOLTIP_WIDTH, TOOLTIP_HEIGHT),
                tooltip_text_at: Point::new(at.x, at.y - 22.0),
                label_at: Point::new(at.x, h - 10.0),
            }
        })
        .collect();

    let (line, area) = if plotted.len() >= 2 {
        let mut path = PathData::new().move_to(plotted[0].at);
        for p in &plotted[1..] { path = path.line_to(p.at); }
        let base = h - pad;
        let last_x = plotted[plotted.len() - 1].at.x;
        let area = path.clone().line_to(Point::new(last_x, base)).line_to(Point::new(pad, base)).close();
        (Some(path), Some(area))
    } else {
        (None, None)
    };

    let guides = guides(pad, w - pad, |r| scale.ratio_to_px(r), |r| min_value + raw_range * r);

    Layout::Ready(LineGeometry {
        width: w,
        height: h,
        padding: pad,
        color: opts.color,
        min_value,
        max_value,
        points: plotted,
        line,
        area,
        guides,
    })
}

impl LineGeometry {
    pub fn to_scene(&self, theme: &Theme) -> Scene {
        let mut scene = Scene::new(self.width, self.height);

        for g in &self.guides {
            scene.push(Node::Group(Group::new(vec![
                Node::Line {
                    from: Point::new(g.x1, g.y),
                    to: Point::new(g.x2, g.y),
                    paint: Paint::stroke(theme.guide, 1.0).dashed(2.0, 2.0),
                },
                Node::text(
                    Point::new(self.padding - 10.0, g.y + 4.0),
                    &g.label,
                    TextStyle::small(theme.guide_label, Anchor::End),
                ),
            ])));
        }

        if let Some(area) = &self.area {
            scene.push(Node::Path { data: area.clone(), paint: Paint::fill(self.color.with_alpha(0.1)) });
        }
        if let Some(line) = &self.line {
            scene.push(Node::Path { data: line.clone(), paint: Paint::stroke(self.color, 3.0).rounded() });
        }

        for p in &self.points {
            let tooltip = Group::new(vec![
                Node::Rect { rect: p.tooltip, radius: 4.0, paint: Paint::fill(theme.tooltip_fill) },
                Node::text(
                    p.tooltip_text_at,
                    &p.value_label,
                    TextStyle::small(theme.tooltip_text, Anchor::Middle).weight(Weight::Medium),
                ),
            ])
            .class("value-label")
            .on_hover();

            scene.push(Node::Group(
                Group::new(vec![
                    Node::Circle { center: p.at.offset(1.0, 1.0), radius: MARKER_RADIUS, paint: Paint::fill(theme.shadow) },
                    Node::Circle {
                        center: p.at,
                        radius: MARKER_RADIUS,
                        paint: Paint::fill(theme.marker_fill).with_stroke(self.color, 3.0),
                    },
                    Node::Group(tooltip),
                ])
                .class("point"),
            ));
        }

        for p in &self.points {
            scene.push(Node::text(p.label_at, &p.label, TextStyle::small(theme.category_label, Anchor::Middle)));
        }
        scene
    }
}

/// Lay out and draw in one step; empty input yields the placeholder scene.
pub fn render(points: &[LinePoint], opts: &LineOptions, theme: &Theme) -> Scene {
    match layout(points, opts) {
        Layout::Ready(g) => g.to_scene(theme),
        Layout::Empty(_) => Scene::placeholder(ChartKind::Line, opts.width, opts.height, theme),
    }
}
